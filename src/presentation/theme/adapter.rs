use coolor::{Hsl, Rgb};
use ratatui::style::Color;

/// Converts between ratatui colors and HSL for shade adjustments.
pub struct ColorConverter;

impl ColorConverter {
    #[must_use]
    pub fn to_hsl(color: Color) -> Hsl {
        let (r, g, b) = rgb_components(color);
        Rgb::new(r, g, b).to_hsl()
    }

    #[must_use]
    pub fn to_ratatui(hsl: Hsl) -> Color {
        let rgb: Rgb = hsl.to_rgb();
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }

    /// Same hue as `color` with the given saturation and lightness.
    #[must_use]
    pub fn shade(color: Color, saturation: f32, lightness: f32) -> Color {
        let mut hsl = Self::to_hsl(color);
        hsl.s = saturation;
        hsl.l = lightness;
        Self::to_ratatui(hsl)
    }
}

fn rgb_components(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::Red => (170, 0, 0),
        Color::Green => (0, 170, 0),
        Color::Yellow => (170, 85, 0),
        Color::Blue => (0, 0, 170),
        Color::Magenta => (170, 0, 170),
        Color::Cyan => (0, 170, 170),
        Color::Gray => (170, 170, 170),
        Color::DarkGray => (85, 85, 85),
        Color::LightRed => (255, 85, 85),
        Color::LightGreen => (85, 255, 85),
        Color::LightYellow => (255, 255, 85),
        Color::LightBlue => (85, 85, 255),
        Color::LightMagenta => (255, 85, 255),
        Color::LightCyan => (85, 255, 255),
        Color::Indexed(i) => indexed_to_rgb(i),
        _ => (255, 255, 255),
    }
}

fn indexed_to_rgb(i: u8) -> (u8, u8, u8) {
    match i {
        0..=15 => rgb_components(BASE_PALETTE[usize::from(i)]),
        16..=231 => {
            let i = i - 16;
            let level = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
            (level(i / 36), level((i / 6) % 6), level(i % 6))
        }
        _ => {
            let v = (i - 232) * 10 + 8;
            (v, v, v)
        }
    }
}

const BASE_PALETTE: [Color; 16] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::Gray,
    Color::DarkGray,
    Color::LightRed,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightBlue,
    Color::LightMagenta,
    Color::LightCyan,
    Color::Rgb(255, 255, 255),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_round_trip_is_close() {
        let back = ColorConverter::to_ratatui(ColorConverter::to_hsl(Color::Rgb(234, 221, 255)));

        let Color::Rgb(r, g, b) = back else {
            panic!("Expected RGB color");
        };
        assert!((i16::from(r) - 234).abs() <= 1);
        assert!((i16::from(g) - 221).abs() <= 1);
        assert!((i16::from(b) - 255).abs() <= 1);
    }

    #[test]
    fn test_indexed_palette() {
        assert_eq!(indexed_to_rgb(3), (170, 85, 0));
        assert_eq!(indexed_to_rgb(208), (255, 135, 0));
        assert_eq!(indexed_to_rgb(232), (8, 8, 8));
        assert_eq!(indexed_to_rgb(255), (238, 238, 238));
    }

    #[test]
    fn test_shade_sets_lightness() {
        let dark = ColorConverter::shade(Color::Yellow, 0.5, 0.1);
        let hsl = ColorConverter::to_hsl(dark);
        assert!((hsl.l - 0.1).abs() < 0.02);
    }
}
