//! Screen identifiers and navigation order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::resources::StringId;

/// One of the demo screens.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ScreenKind {
    /// Lemonade stage machine.
    #[default]
    Lemonade,
    /// Dice roller.
    Dice,
    /// Greeting card.
    Greeting,
    /// Article layout.
    Article,
    /// 2x2 quadrant grid.
    Quadrants,
    /// Task completion confirmation.
    Task,
}

impl ScreenKind {
    /// Navigation order.
    pub const ALL: [Self; 6] = [
        Self::Lemonade,
        Self::Dice,
        Self::Greeting,
        Self::Article,
        Self::Quadrants,
        Self::Task,
    ];

    const fn index(self) -> usize {
        match self {
            Self::Lemonade => 0,
            Self::Dice => 1,
            Self::Greeting => 2,
            Self::Article => 3,
            Self::Quadrants => 4,
            Self::Task => 5,
        }
    }

    /// Following screen, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Preceding screen, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Title shown in the header.
    #[must_use]
    pub const fn title(self) -> StringId {
        match self {
            Self::Lemonade => StringId::LemonadeTitle,
            Self::Dice => StringId::DiceTitle,
            Self::Greeting => StringId::GreetingTitle,
            Self::Article => StringId::ArticleTitle,
            Self::Quadrants => StringId::QuadrantTitle,
            Self::Task => StringId::TaskTitle,
        }
    }

    /// Whether the screen reacts to the primary action.
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        matches!(self, Self::Lemonade | Self::Dice)
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lemonade => "lemonade",
            Self::Dice => "dice",
            Self::Greeting => "greeting",
            Self::Article => "article",
            Self::Quadrants => "quadrants",
            Self::Task => "task",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(ScreenKind::Lemonade, ScreenKind::Dice ; "first")]
    #[test_case(ScreenKind::Quadrants, ScreenKind::Task ; "middle")]
    #[test_case(ScreenKind::Task, ScreenKind::Lemonade ; "wrap")]
    fn test_next(from: ScreenKind, to: ScreenKind) {
        assert_eq!(from.next(), to);
        assert_eq!(to.previous(), from);
    }

    #[test]
    fn test_full_rotation() {
        let mut screen = ScreenKind::default();
        for _ in 0..ScreenKind::ALL.len() {
            screen = screen.next();
        }
        assert_eq!(screen, ScreenKind::Lemonade);
    }

    #[test]
    fn test_parse_from_config() {
        #[derive(Deserialize)]
        struct Wrapper {
            screen: ScreenKind,
        }

        let parsed: Wrapper = toml::from_str("screen = \"quadrants\"").expect("valid toml");
        assert_eq!(parsed.screen, ScreenKind::Quadrants);
    }
}
