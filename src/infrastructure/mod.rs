//! Infrastructure layer with adapters for the terminal host.

/// Application configuration.
pub mod config;
/// Process-wide random source.
pub mod random;

pub use config::{
    AppConfig, CliArgs, ConfigError, LoadedConfig, LogLevel, StorageManager, load_config,
};
pub use random::ThreadRandom;
