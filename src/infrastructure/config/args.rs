use super::app_config::{LogLevel, ThemeMode};
use crate::domain::ScreenKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "lemonstand",
    version,
    about = "Lemonade stand and friends: small interactive demo screens",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Screen shown after startup.
    #[arg(long, value_enum)]
    pub start_screen: Option<ScreenKind>,

    /// Enable `TachyonFX` animations.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Theme mode.
    #[arg(long, value_enum)]
    pub theme_mode: Option<ThemeMode>,
}
