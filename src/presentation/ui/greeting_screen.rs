use std::sync::Arc;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::Line,
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use crate::application::StringCatalog;
use crate::domain::{Asset, StringId};
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::vertical_band;
use crate::presentation::widgets::AsciiArt;

/// Birthday card: a message and its sender over a patterned backdrop.
pub struct GreetingScreen {
    strings: Arc<StringCatalog>,
    theme: Theme,
}

impl GreetingScreen {
    #[must_use]
    pub const fn new(strings: Arc<StringCatalog>, theme: Theme) -> Self {
        Self { strings, theme }
    }
}

impl Widget for &GreetingScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        AsciiArt::new(Asset::PartyBackdrop)
            .tiled()
            .style(self.theme.dimmed_style)
            .render(area, buf);

        let message = self.strings.get(StringId::GreetingMessage);
        let from = self.strings.get(StringId::GreetingFrom);

        let card = vertical_band(4, area);
        Clear.render(card, buf);
        buf.set_style(card, self.theme.base_style);

        let [message_area, _, from_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(card);

        Paragraph::new(Line::from(message).centered())
            .style(self.theme.base_style.add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .render(message_area, buf);
        Paragraph::new(Line::from(format!("{from}  ")).right_aligned())
            .style(self.theme.base_style)
            .render(from_area, buf);
    }
}
