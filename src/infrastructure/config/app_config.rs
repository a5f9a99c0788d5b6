//! Application configuration.

use crate::domain::ScreenKind;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "lemonstand";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, loaded from TOML and refined by CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Enable mouse support.
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Screen shown after startup.
    #[serde(default)]
    pub start_screen: ScreenKind,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// String overrides keyed by resource name.
    #[serde(default)]
    pub strings: HashMap<String, String>,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Enable `TachyonFX` animations.
    #[serde(default = "default_true")]
    pub enable_animations: bool,

    /// Open the help overlay on startup.
    #[serde(default)]
    pub show_help: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_animations: true,
            show_help: false,
        }
    }
}

/// Theme mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark mode (default).
    #[default]
    Dark,
    /// Light mode.
    Light,
    /// Auto detect from the terminal background.
    Auto,
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,

    /// Theme mode (Dark, Light, Auto).
    #[serde(default)]
    pub mode: ThemeMode,
}

fn default_accent_color() -> String {
    "Yellow".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
            mode: ThemeMode::default(),
        }
    }
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(mouse) = args.mouse {
            self.mouse = mouse;
        }
        if let Some(start_screen) = args.start_screen {
            self.start_screen = start_screen;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
        if let Some(theme_mode) = args.theme_mode {
            self.theme.mode = theme_mode;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("lemonstand.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            mouse: true,
            start_screen: ScreenKind::default(),
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
            strings: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config_file() {
        let toml_content = r##"
            log_level = "debug"
            mouse = false
            start_screen = "dice"

            [ui]
            enable_animations = false

            [theme]
            accent_color = "#ffd700"
            mode = "light"

            [strings]
            greeting_message = "Happy Birthday Ana!"
            lemon_instruction = "Squeeze!"
        "##;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(!config.mouse);
        assert_eq!(config.start_screen, ScreenKind::Dice);
        assert!(!config.ui.enable_animations);
        assert!(!config.ui.show_help);
        assert_eq!(config.theme.accent_color, "#ffd700");
        assert_eq!(config.theme.mode, ThemeMode::Light);
        assert_eq!(config.strings.len(), 2);
        assert_eq!(
            config.strings.get("greeting_message").map(String::as_str),
            Some("Happy Birthday Ana!")
        );
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert!(config.mouse);
        assert!(config.ui.enable_animations);
        assert_eq!(config.start_screen, ScreenKind::Lemonade);
        assert_eq!(config.theme.accent_color, "Yellow");
        assert!(config.strings.is_empty());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("empty config is valid");
        assert!(config.mouse);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config: AppConfig =
            toml::from_str("mouse = true\nstart_screen = \"article\"").expect("valid config");
        let args = CliArgs::parse_from([
            "lemonstand",
            "--mouse",
            "false",
            "--start-screen",
            "task",
            "--log-level",
            "trace",
        ]);

        config.merge_with_args(args);

        assert!(!config.mouse);
        assert_eq!(config.start_screen, ScreenKind::Task);
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.theme.accent_color, "Yellow");
    }

    #[test]
    fn test_command_line_paths_stay_out_of_the_file() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "lemonstand",
            "--config",
            "/tmp/lemon.toml",
            "--log-path",
            "/tmp/lemon.log",
        ]);

        config.merge_with_args(args);
        let written = toml::to_string_pretty(&config).expect("config serializes");

        assert_eq!(config.log_path.as_deref(), Some(std::path::Path::new("/tmp/lemon.log")));
        assert!(!written.contains("lemon.toml"));
        assert!(!written.contains("lemon.log"));
    }
}
