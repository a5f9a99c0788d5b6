//! Domain layer with the screen state machines, resource ids and ports.

/// Dice roller.
pub mod dice;
/// Keybinding definitions.
pub mod keybinding;
/// Lemonade stage machine.
pub mod lemonade;
/// Port definitions.
pub mod ports;
/// Image and string resource ids.
pub mod resources;
/// Screen identifiers.
pub mod screen;

pub use dice::DiceRoller;
pub use lemonade::{Stage, StageMachine, StageView};
pub use ports::RandomSource;
pub use resources::{Asset, StringId};
pub use screen::ScreenKind;
