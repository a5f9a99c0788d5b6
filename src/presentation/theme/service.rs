use super::adapter::ColorConverter;
use crate::infrastructure::config::ThemeMode;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::time::Duration;

const BACKGROUND_QUERY_TIMEOUT: Duration = Duration::from_millis(100);

/// Background colors of the four quadrant cells.
pub const QUADRANT_COLORS: [Color; 4] = [
    Color::Rgb(0xEA, 0xDD, 0xFF),
    Color::Rgb(0xD0, 0xBC, 0xFF),
    Color::Rgb(0xB6, 0x9D, 0xF8),
    Color::Rgb(0xF6, 0xED, 0xFF),
];

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    /// Banner across the top of a screen.
    pub title_style: Style,
    /// Tappable image or button.
    pub button_style: Style,
    pub selection_style: Style,
    pub dimmed_style: Style,
    pub base_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Yellow", false)
    }
}

impl Theme {
    pub fn new(accent_color_str: &str, light_background: bool) -> Self {
        Self::from_color(parse_color(accent_color_str), light_background)
    }

    #[must_use]
    pub fn from_color(accent: Color, light_background: bool) -> Self {
        let (selection_lightness, base_fg) = if light_background {
            (0.8, Color::Black)
        } else {
            (0.2, Color::Reset)
        };

        let selection_bg = ColorConverter::shade(accent, 0.3, selection_lightness);

        Self {
            accent,
            title_style: Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            button_style: Style::default().bg(Color::Cyan).fg(Color::Black),
            selection_style: Style::default().bg(selection_bg).fg(base_fg),
            dimmed_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(base_fg),
        }
    }
}

/// Resolves the configured mode to "is the background light".
///
/// `Auto` asks the terminal and falls back to dark when it does not answer.
#[must_use]
pub fn is_light_background(mode: ThemeMode) -> bool {
    match mode {
        ThemeMode::Light => true,
        ThemeMode::Dark => false,
        ThemeMode::Auto => match termbg::theme(BACKGROUND_QUERY_TIMEOUT) {
            Ok(termbg::Theme::Light) => true,
            Ok(termbg::Theme::Dark) => false,
            Err(e) => {
                tracing::debug!(error = ?e, "Terminal background detection failed");
                false
            }
        },
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if let Some((r, g, b)) = parse_hex_color(s) {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "lemon" => Color::Rgb(0xFF, 0xF4, 0x4F),
        "orange" => Color::Indexed(208),
        _ => Color::Yellow,
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    let short = |i: usize| channel(i..i + 1).map(|v| v * 17);

    match hex.len() {
        6 => Some((channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        3 => Some((short(0)?, short(1)?, short(2)?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Red", Color::Red ; "named")]
    #[test_case("yellow", Color::Yellow ; "lowercase_named")]
    #[test_case("#FF0000", Color::Rgb(255, 0, 0) ; "long_hex")]
    #[test_case("#0f0", Color::Rgb(0, 255, 0) ; "short_hex")]
    #[test_case("Lemon", Color::Rgb(0xFF, 0xF4, 0x4F) ; "lemon")]
    #[test_case("Orange", Color::Indexed(208) ; "orange")]
    #[test_case("#12", Color::Yellow ; "bad_hex")]
    #[test_case("Invalid", Color::Yellow ; "fallback")]
    fn test_parse_color(input: &str, expected: Color) {
        assert_eq!(parse_color(input), expected);
    }

    #[test]
    fn test_explicit_modes_skip_detection() {
        assert!(is_light_background(ThemeMode::Light));
        assert!(!is_light_background(ThemeMode::Dark));
    }

    #[test]
    fn test_light_theme_uses_dark_text() {
        let theme = Theme::new("Yellow", true);
        assert_eq!(theme.base_style.fg, Some(Color::Black));
        assert_eq!(theme.title_style.bg, Some(Color::Yellow));
    }
}
