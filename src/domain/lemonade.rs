//! Lemonade stage machine.
//!
//! One primary action walks the machine through picking a lemon, squeezing it
//! a random number of times, drinking the lemonade and starting over with an
//! empty glass. The cycle has no terminal state.

use std::fmt;
use std::ops::RangeInclusive;

use crate::domain::ports::RandomSource;
use crate::domain::resources::{Asset, StringId};

/// Closed range the per-episode squeeze target is drawn from.
pub const SQUEEZE_TARGET_RANGE: RangeInclusive<u8> = 2..=4;

/// Phase of the lemonade cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    /// Lemon tree, waiting for a lemon to be picked.
    #[default]
    Start,
    /// Lemon being squeezed.
    InProgress,
    /// Glass of lemonade ready to drink.
    Ready,
    /// Empty glass.
    Done,
}

impl Stage {
    /// Image shown for this stage.
    #[must_use]
    pub const fn asset(self) -> Asset {
        match self {
            Self::Start => Asset::LemonTree,
            Self::InProgress => Asset::LemonSqueeze,
            Self::Ready => Asset::LemonDrink,
            Self::Done => Asset::LemonRestart,
        }
    }

    /// Description of the image shown for this stage.
    #[must_use]
    pub const fn description(self) -> StringId {
        match self {
            Self::Start => StringId::LemonTreeDescription,
            Self::InProgress => StringId::LemonDescription,
            Self::Ready => StringId::LemonGlassDescription,
            Self::Done => StringId::LemonEmptyDescription,
        }
    }

    /// Instruction telling the user what the primary action does next.
    #[must_use]
    pub const fn instruction(self) -> StringId {
        match self {
            Self::Start => StringId::LemonTreeInstruction,
            Self::InProgress => StringId::LemonInstruction,
            Self::Ready => StringId::LemonGlassInstruction,
            Self::Done => StringId::LemonRestartInstruction,
        }
    }

    /// Short label used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::InProgress => "in_progress",
            Self::Ready => "ready",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource ids rendered for the current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageView {
    /// Image.
    pub asset: Asset,
    /// Image description.
    pub description: StringId,
    /// Instruction text below the image.
    pub instruction: StringId,
}

impl From<Stage> for StageView {
    fn from(stage: Stage) -> Self {
        Self {
            asset: stage.asset(),
            description: stage.description(),
            instruction: stage.instruction(),
        }
    }
}

/// Four-stage lemonade cycle with a randomized squeeze threshold.
pub struct StageMachine {
    stage: Stage,
    squeeze_count: u8,
    target_squeeze_count: u8,
    random: Box<dyn RandomSource>,
}

impl StageMachine {
    /// Creates a machine at [`Stage::Start`] with a freshly drawn target.
    #[must_use]
    pub fn new(mut random: Box<dyn RandomSource>) -> Self {
        let target_squeeze_count = draw_target(random.as_mut());
        Self {
            stage: Stage::Start,
            squeeze_count: 0,
            target_squeeze_count,
            random,
        }
    }

    /// Applies one primary action.
    ///
    /// | stage        | effect                                                |
    /// |--------------|-------------------------------------------------------|
    /// | `Start`      | enter `InProgress`, reset count, draw a new target    |
    /// | `InProgress` | count one squeeze, move to `Ready` on reaching target |
    /// | `Ready`      | move to `Done`                                        |
    /// | `Done`       | back to `Start`, reset count, draw a new target       |
    pub fn advance(&mut self) {
        match self.stage {
            Stage::Start => {
                self.stage = Stage::InProgress;
                self.begin_episode();
            }
            Stage::InProgress => {
                self.squeeze_count += 1;
                if self.squeeze_count == self.target_squeeze_count {
                    self.stage = Stage::Ready;
                }
            }
            Stage::Ready => {
                self.stage = Stage::Done;
            }
            Stage::Done => {
                self.stage = Stage::Start;
                self.begin_episode();
            }
        }
    }

    fn begin_episode(&mut self) {
        self.squeeze_count = 0;
        self.target_squeeze_count = draw_target(self.random.as_mut());
    }

    /// Current stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Squeezes performed in the current episode.
    #[must_use]
    pub const fn squeeze_count(&self) -> u8 {
        self.squeeze_count
    }

    /// Squeezes needed to finish the current episode.
    #[must_use]
    pub const fn target_squeeze_count(&self) -> u8 {
        self.target_squeeze_count
    }

    /// Resource ids for the current stage.
    #[must_use]
    pub fn view(&self) -> StageView {
        StageView::from(self.stage)
    }
}

impl fmt::Debug for StageMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StageMachine")
            .field("stage", &self.stage)
            .field("squeeze_count", &self.squeeze_count)
            .field("target_squeeze_count", &self.target_squeeze_count)
            .finish_non_exhaustive()
    }
}

fn draw_target(random: &mut dyn RandomSource) -> u8 {
    random
        .draw(SQUEEZE_TARGET_RANGE)
        .clamp(*SQUEEZE_TARGET_RANGE.start(), *SQUEEZE_TARGET_RANGE.end())
}
