use std::sync::Arc;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};

use crate::application::StringCatalog;
use crate::domain::{Asset, StringId};
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::vertical_band;
use crate::presentation::widgets::{AsciiArt, ascii_art, centered_top};

pub struct TaskScreen {
    strings: Arc<StringCatalog>,
    theme: Theme,
}

impl TaskScreen {
    #[must_use]
    pub const fn new(strings: Arc<StringCatalog>, theme: Theme) -> Self {
        Self { strings, theme }
    }
}

impl Widget for &TaskScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (art_width, art_height) = ascii_art::size(Asset::TaskCompleted);
        let content = vertical_band(art_height + 4, area);
        let art_rect = centered_top(content, (art_width, art_height));

        AsciiArt::new(Asset::TaskCompleted)
            .style(Style::default().fg(self.theme.accent))
            .render(art_rect, buf);

        let text = Text::from(vec![
            Line::from(self.strings.get(StringId::TaskCompletionHeader))
                .style(Style::default().add_modifier(Modifier::BOLD)),
            Line::default(),
            Line::from(self.strings.get(StringId::TaskCompletionSubheading)),
        ])
        .centered();

        let text_rect = Rect::new(
            content.x,
            art_rect.bottom() + 1,
            content.width,
            content.bottom().saturating_sub(art_rect.bottom() + 1),
        );
        Paragraph::new(text)
            .style(self.theme.base_style)
            .render(text_rect, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::ui::utils::buffer_lines;

    #[test]
    fn test_header_above_subheading() {
        let screen = TaskScreen::new(Arc::new(StringCatalog::new()), Theme::default());
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);

        (&screen).render(area, &mut buf);

        let lines = buffer_lines(&buf);
        let header = lines.iter().position(|l| l.contains("All tasks completed"));
        let subheading = lines.iter().position(|l| l.contains("Nice work!"));
        assert!(header.is_some());
        assert_eq!(subheading, header.map(|row| row + 2));
    }
}
