//! Random source backed by the thread-local generator.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::domain::ports::RandomSource;

/// Uniform draws from `rand`'s thread-local generator.
///
/// Holds no state of its own, so every instance shares the process-wide
/// entropy source and no seed is exposed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    /// Creates a boxed source ready to hand to a domain object.
    #[must_use]
    pub fn boxed() -> Box<dyn RandomSource> {
        Box::new(Self)
    }
}

impl RandomSource for ThreadRandom {
    fn draw(&mut self, range: RangeInclusive<u8>) -> u8 {
        rand::rng().random_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lemonade::SQUEEZE_TARGET_RANGE;
    use crate::domain::{DiceRoller, Stage, StageMachine};
    use std::collections::BTreeSet;

    #[test]
    fn test_squeeze_targets_cover_exactly_two_to_four() {
        let mut machine = StageMachine::new(ThreadRandom::boxed());
        let mut seen = BTreeSet::new();

        for _ in 0..10_000 {
            // Start -> InProgress draws a fresh target.
            while machine.stage() != Stage::Start {
                machine.advance();
            }
            machine.advance();
            seen.insert(machine.target_squeeze_count());
        }

        assert_eq!(seen, SQUEEZE_TARGET_RANGE.collect::<BTreeSet<_>>());
    }

    #[test]
    fn test_dice_faces_cover_one_to_six() {
        let mut dice = DiceRoller::new(ThreadRandom::boxed());
        let faces: BTreeSet<u8> = (0..5_000).map(|_| dice.roll()).collect();

        assert_eq!(faces, (1..=6).collect::<BTreeSet<_>>());
    }

    #[test]
    fn test_random_cycle_obeys_counter_bounds() {
        let mut machine = StageMachine::new(ThreadRandom::boxed());

        for _ in 0..5_000 {
            machine.advance();
            assert!(SQUEEZE_TARGET_RANGE.contains(&machine.target_squeeze_count()));
            if machine.stage() == Stage::InProgress {
                assert!(machine.squeeze_count() <= machine.target_squeeze_count());
            }
        }
    }
}
