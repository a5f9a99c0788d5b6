//! Text-mode drawings for every [`Asset`].

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::Asset;

const LEMON_TREE: &[&str] = &[
    r"     .-~~~~~~-.     ",
    r"   .'  o   o   '.   ",
    r"  /  o    o   o  \  ",
    r" |  o   o    o    | ",
    r"  \   o   o   o  /  ",
    r"   '._  o   o _.'   ",
    r"      '-.||.-'      ",
    r"        ||||        ",
    r"        ||||        ",
    r"   _____||||_____   ",
];

const LEMON_SQUEEZE: &[&str] = &[
    r"                    ",
    r"          __        ",
    r"      .-''  ''-.    ",
    r"     /          \   ",
    r"   <(            )> ",
    r"     \          /   ",
    r"      '-.____.-'    ",
    r"                    ",
];

const LEMON_DRINK: &[&str] = &[
    r"       \  |  /      ",
    r"    .----------.    ",
    r"    |~~~~~~~~~~|    ",
    r"    | o    o   |    ",
    r"    |   o    o |    ",
    r"    |  o   o   |    ",
    r"    | o     o  |    ",
    r"    '----------'    ",
];

const LEMON_RESTART: &[&str] = &[
    r"                    ",
    r"    .----------.    ",
    r"    |          |    ",
    r"    |          |    ",
    r"    |          |    ",
    r"    |          |    ",
    r"    |__________|    ",
    r"    '----------'    ",
];

const DICE: [&[&str]; 6] = [
    &[
        "+---------+",
        "|         |",
        "|    o    |",
        "|         |",
        "+---------+",
    ],
    &[
        "+---------+",
        "| o       |",
        "|         |",
        "|       o |",
        "+---------+",
    ],
    &[
        "+---------+",
        "| o       |",
        "|    o    |",
        "|       o |",
        "+---------+",
    ],
    &[
        "+---------+",
        "| o     o |",
        "|         |",
        "| o     o |",
        "+---------+",
    ],
    &[
        "+---------+",
        "| o     o |",
        "|    o    |",
        "| o     o |",
        "+---------+",
    ],
    &[
        "+---------+",
        "| o     o |",
        "| o     o |",
        "| o     o |",
        "+---------+",
    ],
];

const PARTY_BACKDROP: &[&str] = &[
    r" *   .  o    *   .   +   o  .   *    .  + ",
    r"   o   +   .   *   o   .    +   o  *    . ",
    r" .   *   o   +   .   *   o    .    +  o   ",
    r"   +   .   *   o   +   .   *   o   .    * ",
    r" o   .   +   .   *   o   +   .   *   o  . ",
    r"   *   o   .   +   o   .   *   +   .  o   ",
    r" .   +   *   o   .   +   o   .   *   +  . ",
];

const ARTICLE_BANNER: &[&str] = &[
    r"/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/",
    r"\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\",
    r"/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/\/",
];

const TASK_COMPLETED: &[&str] = &[
    r"    .-----------.    ",
    r"  .'           / '.  ",
    r" /            /    \ ",
    r"|    \       /      |",
    r"|     \     /       |",
    r" \     \   /       / ",
    r"  '.    \_/      .'  ",
    r"    '-----------'    ",
];

/// Lines of the drawing for `asset`.
#[must_use]
pub fn lines(asset: Asset) -> &'static [&'static str] {
    match asset {
        Asset::LemonTree => LEMON_TREE,
        Asset::LemonSqueeze => LEMON_SQUEEZE,
        Asset::LemonDrink => LEMON_DRINK,
        Asset::LemonRestart => LEMON_RESTART,
        Asset::Dice(face) => DICE[usize::from(face.clamp(1, 6) - 1)],
        Asset::PartyBackdrop => PARTY_BACKDROP,
        Asset::ArticleBanner => ARTICLE_BANNER,
        Asset::TaskCompleted => TASK_COMPLETED,
    }
}

/// Width and height of the drawing in terminal cells.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn size(asset: Asset) -> (u16, u16) {
    let art = lines(asset);
    let width = art.iter().map(|l| l.width()).max().unwrap_or(0);
    (width as u16, art.len() as u16)
}

/// Draws an asset centered in its area.
pub struct AsciiArt {
    asset: Asset,
    style: Style,
    tile: bool,
}

impl AsciiArt {
    #[must_use]
    pub fn new(asset: Asset) -> Self {
        Self {
            asset,
            style: Style::default(),
            tile: false,
        }
    }

    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Repeat the drawing to fill the whole area instead of centering it.
    #[must_use]
    pub const fn tiled(mut self) -> Self {
        self.tile = true;
        self
    }
}

impl Widget for AsciiArt {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let art = lines(self.asset);
        if art.is_empty() || area.is_empty() {
            return;
        }

        if self.tile {
            let text: Text = (0..area.height)
                .map(|row| {
                    let source = art[usize::from(row) % art.len()];
                    let repeated = source.repeat(usize::from(area.width) / source.len().max(1) + 1);
                    Line::from(repeated)
                })
                .collect();
            Paragraph::new(text).style(self.style).render(area, buf);
            return;
        }

        let (width, height) = size(self.asset);
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        let target = Rect::new(x, y, width.min(area.width), height.min(area.height));

        let text: Text = art.iter().map(|l| Line::from(*l)).collect();
        Paragraph::new(text).style(self.style).render(target, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_face_has_art() {
        for face in 1..=6 {
            let art = lines(Asset::Dice(face));
            let pips: usize = art.iter().map(|l| l.matches('o').count()).sum();
            assert_eq!(pips, usize::from(face));
        }
    }

    #[test]
    fn test_lemonade_stages_share_size() {
        let tree = size(Asset::LemonTree);
        for asset in [Asset::LemonSqueeze, Asset::LemonDrink, Asset::LemonRestart] {
            assert_eq!(size(asset).0, tree.0);
        }
    }

    #[test]
    fn test_centered_render() {
        let area = Rect::new(0, 0, 21, 7);
        let mut buf = Buffer::empty(area);

        AsciiArt::new(Asset::Dice(1)).render(area, &mut buf);

        // 11x5 die centered in 21x7: origin at (5, 1)
        assert_eq!(buf[(5, 1)].symbol(), "+");
        assert_eq!(buf[(10, 3)].symbol(), "o");
    }

    #[test]
    fn test_tiled_fills_area() {
        let area = Rect::new(0, 0, 100, 10);
        let mut buf = Buffer::empty(area);

        AsciiArt::new(Asset::ArticleBanner).tiled().render(area, &mut buf);

        assert_ne!(buf[(99, 9)].symbol(), " ");
    }
}
