use std::sync::Arc;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Padding, Paragraph, Widget, Wrap},
};

use crate::application::StringCatalog;
use crate::domain::{Asset, StringId};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::AsciiArt;

const BANNER_HEIGHT: u16 = 3;

/// Tutorial page: banner, heading and two wrapped paragraphs.
pub struct ArticleScreen {
    strings: Arc<StringCatalog>,
    theme: Theme,
}

impl ArticleScreen {
    #[must_use]
    pub const fn new(strings: Arc<StringCatalog>, theme: Theme) -> Self {
        Self { strings, theme }
    }
}

impl Widget for &ArticleScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [banner_area, text_area] =
            Layout::vertical([Constraint::Length(BANNER_HEIGHT), Constraint::Min(0)]).areas(area);

        AsciiArt::new(Asset::ArticleBanner)
            .tiled()
            .style(Style::default().fg(self.theme.accent))
            .render(banner_area, buf);

        let text = Text::from(vec![
            Line::from(self.strings.get(StringId::ArticleHeading))
                .style(Style::default().add_modifier(Modifier::BOLD)),
            Line::default(),
            Line::from(self.strings.get(StringId::ArticleIntroduction)),
            Line::default(),
            Line::from(self.strings.get(StringId::ArticleBody)),
        ]);

        Paragraph::new(text)
            .block(Block::default().padding(Padding::new(2, 2, 1, 0)))
            .style(self.theme.base_style)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::ui::utils::{buffer_contains, buffer_lines};

    #[test]
    fn test_layout() {
        let screen = ArticleScreen::new(Arc::new(StringCatalog::new()), Theme::default());
        let area = Rect::new(0, 0, 60, 30);
        let mut buf = Buffer::empty(area);

        (&screen).render(area, &mut buf);

        let lines = buffer_lines(&buf);
        assert!(lines[0].starts_with("/\\/\\"));
        assert!(lines[4].starts_with("  Jetpack Compose tutorial"));
        assert!(buffer_contains(&buf, "Jetpack Compose is a modern toolkit"));
    }

    #[test]
    fn test_text_is_wrapped_within_padding() {
        let screen = ArticleScreen::new(Arc::new(StringCatalog::new()), Theme::default());
        let area = Rect::new(0, 0, 30, 40);
        let mut buf = Buffer::empty(area);

        (&screen).render(area, &mut buf);

        for line in buffer_lines(&buf).iter().skip(usize::from(BANNER_HEIGHT)) {
            assert!(line.ends_with("  "), "text reached the right edge: {line:?}");
        }
    }
}
