use crate::domain::ScreenKind;
use crate::presentation::theme::Theme;
use crate::presentation::theme::adapter::ColorConverter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub version: Style,
    pub screen: Style,
    pub position: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let version_bg = ColorConverter::shade(theme.accent, 0.5, 0.08);

        Self {
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            version: Style::default().bg(version_bg).fg(Color::White),
            screen: theme.selection_style.add_modifier(Modifier::BOLD),
            position: Style::default().bg(version_bg).fg(theme.accent),
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
            screen: Style::default().add_modifier(Modifier::BOLD),
            position: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Top bar: application name and version on the left, active screen on the right.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    screen: ScreenKind,
    screen_title: &'a str,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            screen: ScreenKind::default(),
            screen_title: "",
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn screen(mut self, screen: ScreenKind, title: &'a str) -> Self {
        self.screen = screen;
        self.screen_title = title;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn position_text(&self) -> String {
        let index = ScreenKind::ALL
            .iter()
            .position(|s| *s == self.screen)
            .unwrap_or(0);
        format!(" {}/{} ", index + 1, ScreenKind::ALL.len())
    }
}

impl Widget for HeaderBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let app_text = format!(" {} ", self.app_name.to_uppercase());
        let version_text = format!(" v{} ", self.version);
        let left_width = (app_text.width() + 1 + version_text.width()) as u16;

        let left_line = Line::from(vec![
            Span::styled(app_text, self.style.app_name),
            Span::raw(" "),
            Span::styled(version_text, self.style.version),
        ]);
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        let title_text = format!(" {} ", self.screen_title);
        let position_text = self.position_text();
        let right_width = (title_text.width() + position_text.width()) as u16;

        if right_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(right_width);
            let right_area = Rect::new(right_x, area.y, right_width, 1);
            let right_line = Line::from(vec![
                Span::styled(title_text, self.style.screen),
                Span::styled(position_text, self.style.position),
            ]);
            Paragraph::new(right_line).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_renders_name_and_screen() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        HeaderBar::new("lemonstand", "0.1.0")
            .screen(ScreenKind::Dice, "Dice Roller")
            .render(area, &mut buf);

        let text = row_text(&buf, 0);
        assert!(text.starts_with(" LEMONSTAND "));
        assert!(text.contains("v0.1.0"));
        assert!(text.trim_end().ends_with("Dice Roller  2/6"));
    }

    #[test]
    fn test_narrow_area_drops_screen_title() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);

        HeaderBar::new("lemonstand", "0.1.0")
            .screen(ScreenKind::Task, "Task Manager")
            .render(area, &mut buf);

        assert!(!row_text(&buf, 0).contains("Task Manager"));
    }
}
