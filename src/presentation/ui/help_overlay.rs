use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Padding, Paragraph, Widget},
};

use crate::domain::keybinding::Action;
use crate::presentation::commands::CommandRegistry;
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::centered_rect;
use crate::presentation::widgets::FooterBar;

const ENTRIES: [(Action, &str); 6] = [
    (Action::Primary, "Tap the control"),
    (Action::NextScreen, "Next screen"),
    (Action::PreviousScreen, "Previous screen"),
    (Action::ToggleHelp, "Toggle this help"),
    (Action::Cancel, "Close help / quit"),
    (Action::Quit, "Quit"),
];

const KEY_COLUMN_WIDTH: usize = 18;

/// Popup listing every key binding.
pub struct HelpOverlay<'a> {
    registry: &'a CommandRegistry,
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(registry: &'a CommandRegistry, theme: &'a Theme) -> Self {
        Self { registry, theme }
    }

    fn keys(&self, action: Action) -> String {
        let mut keys: Vec<String> = Vec::new();
        for key in self.registry.keys_for(action) {
            let formatted = FooterBar::format_key(key);
            if !keys.contains(&formatted) {
                keys.push(formatted);
            }
        }
        keys.join(" ")
    }
}

impl Widget for HelpOverlay<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = ENTRIES
            .iter()
            .map(|(action, description)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<KEY_COLUMN_WIDTH$}", self.keys(*action)),
                        Style::default().fg(self.theme.accent),
                    ),
                    Span::raw(*description),
                ])
            })
            .collect();

        let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 6;
        let height = lines.len() as u16 + 4;
        let popup = centered_rect(width, height, area);

        Clear.render(popup, buf);
        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.theme.accent))
                    .title(" Help ")
                    .padding(Padding::uniform(1)),
            )
            .style(self.theme.base_style)
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::ui::utils::{buffer_contains, buffer_lines};

    #[test]
    fn test_lists_all_bindings() {
        let registry = CommandRegistry::new();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        HelpOverlay::new(&registry, &theme).render(area, &mut buf);

        assert!(buffer_contains(&buf, "Help"));
        assert!(buffer_contains(&buf, "Enter Space"));
        assert!(buffer_contains(&buf, "Tab → l"));
        assert!(buffer_contains(&buf, "S-Tab ← h"));
        assert!(buffer_contains(&buf, "? F1"));
        assert!(buffer_contains(&buf, "q C-c"));
    }

    #[test]
    fn test_popup_is_centered() {
        let registry = CommandRegistry::new();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        HelpOverlay::new(&registry, &theme).render(area, &mut buf);

        let lines = buffer_lines(&buf);
        let top = lines.iter().position(|l| l.contains('╭'));
        let bottom = lines.iter().position(|l| l.contains('╰'));
        assert_eq!(top, Some(7));
        assert_eq!(bottom, Some(16));
    }
}
