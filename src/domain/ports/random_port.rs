//! Random number source port definition.

use std::ops::RangeInclusive;

/// Port for uniform random draws.
///
/// Everything that rolls or picks a threshold goes through this trait so tests
/// can substitute a deterministic source.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send {
    /// Draws a value uniformly from the closed `range`.
    fn draw(&mut self, range: RangeInclusive<u8>) -> u8;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;

    /// Random source replaying a fixed script of values.
    ///
    /// Once the script runs out the last value repeats. Values outside the
    /// requested range are clamped into it.
    pub struct ScriptedRandom {
        script: VecDeque<u8>,
        last: u8,
    }

    impl ScriptedRandom {
        /// Creates a source yielding `values` in order.
        pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
            let script: VecDeque<u8> = values.into_iter().collect();
            let last = script.back().copied().unwrap_or(0);
            Self { script, last }
        }

        /// Creates a source that always yields `value`.
        pub fn constant(value: u8) -> Self {
            Self::new([value])
        }
    }

    impl RandomSource for ScriptedRandom {
        fn draw(&mut self, range: RangeInclusive<u8>) -> u8 {
            let value = self.script.pop_front().unwrap_or(self.last);
            value.clamp(*range.start(), *range.end())
        }
    }
}
