//! Clickable controls.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Padding, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::Asset;
use crate::presentation::widgets::ascii_art::{self, AsciiArt};

/// Drawing wrapped in a rounded, filled frame; the description is the frame title.
pub struct ImageButton<'a> {
    asset: Asset,
    description: &'a str,
    style: Style,
}

impl<'a> ImageButton<'a> {
    #[must_use]
    pub fn new(asset: Asset, description: &'a str) -> Self {
        Self {
            asset,
            description,
            style: Style::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Outer size: drawing plus one cell of padding and the border on each side.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn size(&self) -> (u16, u16) {
        let (w, h) = ascii_art::size(self.asset);
        let title = self.description.width() as u16 + 2;
        (w.max(title) + 4, h + 2)
    }
}

impl Widget for ImageButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .padding(Padding::horizontal(1))
            .title_bottom(Line::from(format!(" {} ", self.description)).centered())
            .style(self.style);

        let inner = block.inner(area);
        block.render(area, buf);
        AsciiArt::new(self.asset).style(self.style).render(inner, buf);
    }
}

/// One-line labelled button.
pub struct TextButton<'a> {
    label: &'a str,
    style: Style,
}

impl<'a> TextButton<'a> {
    #[must_use]
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            style: Style::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn size(&self) -> (u16, u16) {
        (self.label.width() as u16 + 6, 3)
    }
}

impl Widget for TextButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .style(self.style);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(self.label).centered())
            .style(self.style.add_modifier(Modifier::BOLD))
            .render(inner, buf);
    }
}

/// Rect of `size` centered horizontally in `area`, starting at its top row.
#[must_use]
pub fn centered_top(area: Rect, (width, height): (u16, u16)) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_button_size_fits_art() {
        let button = ImageButton::new(Asset::Dice(3), "3");
        assert_eq!(button.size(), (15, 7));
    }

    #[test]
    fn test_long_description_widens_button() {
        let button = ImageButton::new(Asset::Dice(3), "A very long image description");
        assert_eq!(button.size().0, 29 + 2 + 4);
    }

    #[test]
    fn test_text_button_renders_label() {
        let button = TextButton::new("Roll");
        let (w, h) = button.size();
        let area = Rect::new(0, 0, w, h);
        let mut buf = Buffer::empty(area);

        button.render(area, &mut buf);

        let middle: String = (0..w).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(middle, "│  Roll  │");
    }

    #[test]
    fn test_centered_top_clamps() {
        let area = Rect::new(2, 3, 10, 4);
        assert_eq!(centered_top(area, (6, 2)), Rect::new(4, 3, 6, 2));
        assert_eq!(centered_top(area, (20, 9)), Rect::new(2, 3, 10, 4));
    }
}
