//! Six-sided die.

use std::fmt;
use std::ops::RangeInclusive;

use crate::domain::ports::RandomSource;
use crate::domain::resources::Asset;

/// Faces of the die.
pub const DIE_FACES: RangeInclusive<u8> = 1..=6;

/// Die that shows one face and rolls on demand.
pub struct DiceRoller {
    value: u8,
    random: Box<dyn RandomSource>,
}

impl DiceRoller {
    /// Creates a die showing 1.
    #[must_use]
    pub fn new(random: Box<dyn RandomSource>) -> Self {
        Self { value: 1, random }
    }

    /// Rolls the die and returns the new face.
    pub fn roll(&mut self) -> u8 {
        self.value = self
            .random
            .draw(DIE_FACES)
            .clamp(*DIE_FACES.start(), *DIE_FACES.end());
        self.value
    }

    /// Face currently shown.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Image for the current face.
    #[must_use]
    pub const fn asset(&self) -> Asset {
        Asset::Dice(self.value)
    }
}

impl fmt::Debug for DiceRoller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiceRoller")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
