//! Display-ready view state.

use std::borrow::Cow;

use crate::application::services::StringCatalog;
use crate::domain::{Asset, DiceRoller, StageView, StringId};

/// What an interactive screen shows: one image plus two lines of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState<'a> {
    /// Image to draw.
    pub asset: Asset,
    /// Description of the image.
    pub description: Cow<'a, str>,
    /// Text shown under the image.
    pub instruction: Cow<'a, str>,
}

impl<'a> ViewState<'a> {
    /// Resolves a lemonade stage view against the catalog.
    #[must_use]
    pub fn for_stage(view: StageView, strings: &'a StringCatalog) -> Self {
        Self {
            asset: view.asset,
            description: Cow::Borrowed(strings.get(view.description)),
            instruction: Cow::Borrowed(strings.get(view.instruction)),
        }
    }

    /// View of the die; the description is the face value.
    #[must_use]
    pub fn for_dice(dice: &DiceRoller, strings: &'a StringCatalog) -> Self {
        Self {
            asset: dice.asset(),
            description: Cow::Owned(dice.value().to_string()),
            instruction: Cow::Borrowed(strings.get(StringId::RollLabel)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::ScriptedRandom;
    use crate::domain::{Stage, StageMachine};

    #[test]
    fn test_stage_view_state() {
        let strings = StringCatalog::new();
        let mut machine = StageMachine::new(Box::new(ScriptedRandom::constant(2)));

        let state = ViewState::for_stage(machine.view(), &strings);
        assert_eq!(state.asset, Asset::LemonTree);
        assert_eq!(state.description, "Lemon tree");
        assert_eq!(state.instruction, "Tap the lemon tree to select a lemon");

        machine.advance();
        let state = ViewState::for_stage(machine.view(), &strings);
        assert_eq!(state.asset, Asset::LemonSqueeze);
        assert_eq!(state.instruction, "Keep tapping the lemon to squeeze it");

        machine.advance();
        machine.advance();
        assert_eq!(machine.stage(), Stage::Ready);
        let state = ViewState::for_stage(machine.view(), &strings);
        assert_eq!(state.description, "Glass of lemonade");
    }

    #[test]
    fn test_dice_view_state() {
        let strings = StringCatalog::new();
        let mut dice = DiceRoller::new(Box::new(ScriptedRandom::constant(5)));
        dice.roll();

        let state = ViewState::for_dice(&dice, &strings);
        assert_eq!(state.asset, Asset::Dice(5));
        assert_eq!(state.description, "5");
        assert_eq!(state.instruction, "Roll");
    }
}
