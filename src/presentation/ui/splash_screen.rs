use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Text,
    widgets::{Paragraph, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};

const LOGO_TEXT: &str = "
 _                                _                  _
| | ___ _ __ ___   ___  _ __  ___| |_ __ _ _ __   __| |
| |/ _ \\ '_ ` _ \\ / _ \\| '_ \\/ __| __/ _` | '_ \\ / _` |
| |  __/ | | | | | (_) | | | \\__ \\ || (_| | | | | (_| |
|_|\\___|_| |_| |_|\\___/|_| |_|___/\\__\\__,_|_| |_|\\__,_|";

/// Time the logo stays still between the two effects.
const HOLD_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Default)]
pub struct SplashState {
    pub intro_finished: bool,
    pub animation_complete: bool,
    held: Duration,
}

pub struct SplashScreen {
    intro_effect: Effect,
    outro_effect: Effect,
    pub state: SplashState,
    pending_duration: Duration,
    style: Style,
}

impl Default for SplashScreen {
    fn default() -> Self {
        Self::new(Style::default())
    }
}

impl SplashScreen {
    #[must_use]
    pub fn new(style: Style) -> Self {
        let intro_effect = fx::coalesce((800, Interpolation::CircOut));
        let outro_effect = fx::dissolve((600, Interpolation::CircIn));

        Self {
            intro_effect,
            outro_effect,
            state: SplashState::default(),
            pending_duration: Duration::ZERO,
            style,
        }
    }

    pub fn tick(&mut self, duration: Duration) {
        self.pending_duration = self.pending_duration.saturating_add(duration);
    }

    /// Ends the animation on the next frame.
    pub fn skip(&mut self) {
        self.state.intro_finished = true;
        self.state.animation_complete = true;
    }
}

impl Widget for &mut SplashScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_content = LOGO_TEXT.trim_matches('\n');
        let text = Text::from(text_content);

        let text_width = u16::try_from(
            text.lines
                .iter()
                .map(ratatui::prelude::Line::width)
                .max()
                .unwrap_or(0),
        )
        .unwrap_or(0);
        let text_height = u16::try_from(text.lines.len()).unwrap_or(0);

        let x = area.x + (area.width.saturating_sub(text_width)) / 2;
        let y = area.y + (area.height.saturating_sub(text_height)) / 2;
        let center_area = Rect::new(
            x,
            y,
            text_width.min(area.width),
            text_height.min(area.height),
        );

        Paragraph::new(text)
            .style(self.style)
            .render(center_area, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        if self.state.animation_complete {
            return;
        }

        if !self.state.intro_finished {
            let overflow = self.intro_effect.process(duration.into(), buf, center_area);
            if overflow.is_some() {
                self.state.intro_finished = true;
            }
        } else if self.state.held < HOLD_DURATION {
            self.state.held = self.state.held.saturating_add(duration);
        } else {
            let overflow = self.outro_effect.process(duration.into(), buf, center_area);
            if overflow.is_some() {
                self.state.animation_complete = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::ui::utils::buffer_contains;

    #[test]
    fn test_skip_completes() {
        let mut splash = SplashScreen::default();
        splash.skip();
        assert!(splash.state.animation_complete);
    }

    #[test]
    fn test_logo_drawn_after_skip() {
        let mut splash = SplashScreen::default();
        splash.skip();
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);

        splash.render(area, &mut buf);

        assert!(buffer_contains(&buf, "| |/ _ \\ '_ ` _ \\"));
    }

    #[test]
    fn test_runs_to_completion() {
        let mut splash = SplashScreen::default();
        let area = Rect::new(0, 0, 80, 12);

        for _ in 0..200 {
            splash.tick(Duration::from_millis(33));
            let mut buf = Buffer::empty(area);
            splash.render(area, &mut buf);
            if splash.state.animation_complete {
                break;
            }
        }

        assert!(splash.state.intro_finished);
        assert!(splash.state.animation_complete);
    }
}
