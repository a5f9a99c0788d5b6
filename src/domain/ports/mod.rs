mod random_port;

pub use random_port::RandomSource;

#[cfg(test)]
pub use random_port::MockRandomSource;

#[cfg(test)]
pub mod mocks {
    pub use super::random_port::mock::ScriptedRandom;
}
