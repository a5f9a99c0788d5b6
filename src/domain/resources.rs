//! Resource identifiers for images and user-visible strings.

use std::fmt;
use std::str::FromStr;

/// Image shown by a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Asset {
    LemonTree,
    LemonSqueeze,
    LemonDrink,
    LemonRestart,
    /// Die face showing the given pip count (1-6).
    Dice(u8),
    PartyBackdrop,
    ArticleBanner,
    TaskCompleted,
}

/// Key of a user-visible string.
///
/// Every key has a built-in English default and can be overridden from the
/// `[strings]` table of the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum StringId {
    LemonadeTitle,
    LemonTreeDescription,
    LemonDescription,
    LemonGlassDescription,
    LemonEmptyDescription,
    LemonTreeInstruction,
    LemonInstruction,
    LemonGlassInstruction,
    LemonRestartInstruction,

    DiceTitle,
    RollLabel,

    GreetingTitle,
    GreetingMessage,
    GreetingFrom,

    ArticleTitle,
    ArticleHeading,
    ArticleIntroduction,
    ArticleBody,

    QuadrantTitle,
    TextTitle,
    TextContent,
    ImageTitle,
    ImageContent,
    RowTitle,
    RowContent,
    ColumnTitle,
    ColumnContent,

    TaskTitle,
    TaskCompletionHeader,
    TaskCompletionSubheading,
}

impl StringId {
    /// All string keys, in declaration order.
    pub const ALL: [Self; 30] = [
        Self::LemonadeTitle,
        Self::LemonTreeDescription,
        Self::LemonDescription,
        Self::LemonGlassDescription,
        Self::LemonEmptyDescription,
        Self::LemonTreeInstruction,
        Self::LemonInstruction,
        Self::LemonGlassInstruction,
        Self::LemonRestartInstruction,
        Self::DiceTitle,
        Self::RollLabel,
        Self::GreetingTitle,
        Self::GreetingMessage,
        Self::GreetingFrom,
        Self::ArticleTitle,
        Self::ArticleHeading,
        Self::ArticleIntroduction,
        Self::ArticleBody,
        Self::QuadrantTitle,
        Self::TextTitle,
        Self::TextContent,
        Self::ImageTitle,
        Self::ImageContent,
        Self::RowTitle,
        Self::RowContent,
        Self::ColumnTitle,
        Self::ColumnContent,
        Self::TaskTitle,
        Self::TaskCompletionHeader,
        Self::TaskCompletionSubheading,
    ];

    /// Configuration key for this string.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::LemonadeTitle => "lemonade_title",
            Self::LemonTreeDescription => "lemon_tree_description",
            Self::LemonDescription => "lemon_description",
            Self::LemonGlassDescription => "lemon_glass_description",
            Self::LemonEmptyDescription => "lemon_empty_description",
            Self::LemonTreeInstruction => "lemon_tree_instruction",
            Self::LemonInstruction => "lemon_instruction",
            Self::LemonGlassInstruction => "lemon_glass_instruction",
            Self::LemonRestartInstruction => "lemon_restart_instruction",
            Self::DiceTitle => "dice_title",
            Self::RollLabel => "roll_label",
            Self::GreetingTitle => "greeting_title",
            Self::GreetingMessage => "greeting_message",
            Self::GreetingFrom => "greeting_from",
            Self::ArticleTitle => "article_title",
            Self::ArticleHeading => "title",
            Self::ArticleIntroduction => "introduction",
            Self::ArticleBody => "body",
            Self::QuadrantTitle => "quadrant_title",
            Self::TextTitle => "text_title",
            Self::TextContent => "text_content",
            Self::ImageTitle => "image_title",
            Self::ImageContent => "image_content",
            Self::RowTitle => "row_title",
            Self::RowContent => "row_content",
            Self::ColumnTitle => "column_title",
            Self::ColumnContent => "column_content",
            Self::TaskTitle => "task_title",
            Self::TaskCompletionHeader => "task_completion_header",
            Self::TaskCompletionSubheading => "task_completion_subheading",
        }
    }

    /// Built-in English text.
    #[must_use]
    pub const fn default_text(self) -> &'static str {
        match self {
            Self::LemonadeTitle => "Lemonade",
            Self::LemonTreeDescription => "Lemon tree",
            Self::LemonDescription => "Lemon",
            Self::LemonGlassDescription => "Glass of lemonade",
            Self::LemonEmptyDescription => "Empty glass",
            Self::LemonTreeInstruction => "Tap the lemon tree to select a lemon",
            Self::LemonInstruction => "Keep tapping the lemon to squeeze it",
            Self::LemonGlassInstruction => "Tap the lemonade to drink it",
            Self::LemonRestartInstruction => "Tap the empty glass to start again",
            Self::DiceTitle => "Dice Roller",
            Self::RollLabel => "Roll",
            Self::GreetingTitle => "Greeting Card",
            Self::GreetingMessage => "Happy Birthday Sam!",
            Self::GreetingFrom => "From Emma",
            Self::ArticleTitle => "Article",
            Self::ArticleHeading => "Jetpack Compose tutorial",
            Self::ArticleIntroduction => {
                "Jetpack Compose is a modern toolkit for building native Android UI. \
                 Compose simplifies and accelerates UI development on Android with less \
                 code, powerful tools, and intuitive Kotlin APIs."
            }
            Self::ArticleBody => {
                "In this tutorial, you build a simple UI component with declarative \
                 functions. You call Compose functions to say what elements you want and \
                 the Compose compiler does the rest. Compose is built around Composable \
                 functions. These functions let you define your app's UI programmatically \
                 because they let you describe how it should look and provide data \
                 dependencies, rather than focus on the process of the UI's construction, \
                 such as initializing an element and then attaching it to a parent. To \
                 create a Composable function, you add the @Composable annotation to the \
                 function name."
            }
            Self::QuadrantTitle => "Compose Quadrant",
            Self::TextTitle => "Text composable",
            Self::TextContent => {
                "Displays text and follows the recommended Material Design guidelines."
            }
            Self::ImageTitle => "Image composable",
            Self::ImageContent => {
                "Creates a composable that lays out and draws a given Painter class object."
            }
            Self::RowTitle => "Row composable",
            Self::RowContent => {
                "A layout composable that places its children in a horizontal sequence."
            }
            Self::ColumnTitle => "Column composable",
            Self::ColumnContent => {
                "A layout composable that places its children in a vertical sequence."
            }
            Self::TaskTitle => "Task Manager",
            Self::TaskCompletionHeader => "All tasks completed",
            Self::TaskCompletionSubheading => "Nice work!",
        }
    }
}

impl fmt::Display for StringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a string key is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown string key: {0}")]
pub struct UnknownStringKey(pub String);

impl FromStr for StringId {
    type Err = UnknownStringKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| UnknownStringKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = StringId::ALL.iter().map(|id| id.key()).collect();
        assert_eq!(keys.len(), StringId::ALL.len());
    }

    #[test]
    fn test_key_lookup() {
        for id in StringId::ALL {
            assert_eq!(id.key().parse::<StringId>(), Ok(id));
        }
        assert_eq!(
            "lemon_sorbet".parse::<StringId>(),
            Err(UnknownStringKey("lemon_sorbet".to_string()))
        );
    }

    #[test]
    fn test_defaults_are_not_empty() {
        assert!(StringId::ALL.iter().all(|id| !id.default_text().is_empty()));
    }
}
