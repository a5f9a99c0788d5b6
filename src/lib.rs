//! Lemonstand - a terminal rendition of the classic beginner app exercises.
//!
//! The centerpiece is the lemonade stage machine; the crate also ships a dice
//! roller, a greeting card, an article page, a quadrant grid and a task
//! completion page, all behind one keyboard and mouse driven TUI.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing view state and string lookup.
pub mod application;
/// Domain layer containing the stage machine, resources and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and the random source.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "lemonstand";
