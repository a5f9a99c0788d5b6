//! Color theme derived from the configured accent.

pub mod adapter;
mod service;

pub use service::{QUADRANT_COLORS, Theme, is_light_background};
