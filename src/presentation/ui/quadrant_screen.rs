use std::sync::Arc;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Padding, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::application::StringCatalog;
use crate::domain::StringId;
use crate::presentation::theme::QUADRANT_COLORS;

/// Title and body of each cell, in reading order.
const QUADRANTS: [(StringId, StringId); 4] = [
    (StringId::TextTitle, StringId::TextContent),
    (StringId::ImageTitle, StringId::ImageContent),
    (StringId::RowTitle, StringId::RowContent),
    (StringId::ColumnTitle, StringId::ColumnContent),
];

/// Two-by-two grid of equally sized colored cells.
pub struct QuadrantScreen {
    strings: Arc<StringCatalog>,
}

impl QuadrantScreen {
    #[must_use]
    pub const fn new(strings: Arc<StringCatalog>) -> Self {
        Self { strings }
    }
}

impl Widget for &QuadrantScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([Constraint::Ratio(1, 2); 2]).split(area);
        let cells = rows
            .iter()
            .flat_map(|row| Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(*row).to_vec());

        for ((cell, (title, content)), color) in cells.zip(QUADRANTS).zip(QUADRANT_COLORS) {
            render_cell(
                self.strings.get(title),
                self.strings.get(content),
                color,
                cell,
                buf,
            );
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn render_cell(title: &str, content: &str, color: Color, area: Rect, buf: &mut Buffer) {
    let style = Style::default().bg(color).fg(Color::Black);
    let block = Block::default().style(style).padding(Padding::uniform(1));
    let inner = block.inner(area);
    block.render(area, buf);

    let text = Text::from(vec![
        Line::from(title)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .centered(),
        Line::default(),
        Line::from(content).centered(),
    ]);

    // Estimate; word wrapping can take an extra row.
    let width = usize::from(inner.width.max(1));
    let height = 2 + content.width().div_ceil(width) as u16;
    let y_offset = inner.height.saturating_sub(height) / 2;
    let target = Rect::new(
        inner.x,
        inner.y + y_offset,
        inner.width,
        inner.height - y_offset,
    );

    Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .render(target, buf);
}
