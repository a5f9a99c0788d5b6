use std::sync::Arc;

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};
use tracing::debug;

use crate::application::{StringCatalog, ViewState};
use crate::domain::{DiceRoller, StringId};
use crate::domain::keybinding::{Action, Keybind};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::vertical_band;
use crate::presentation::widgets::{AsciiArt, TextButton, ascii_art, centered_top};

pub struct DiceScreen {
    dice: DiceRoller,
    strings: Arc<StringCatalog>,
    theme: Theme,
    button_area: Option<Rect>,
}

impl DiceScreen {
    #[must_use]
    pub fn new(dice: DiceRoller, strings: Arc<StringCatalog>, theme: Theme) -> Self {
        Self {
            dice,
            strings,
            theme,
            button_area: None,
        }
    }

    /// Rolls the die.
    pub fn press(&mut self) {
        let value = self.dice.roll();
        debug!(value, "Die rolled");
    }

    #[must_use]
    pub const fn dice(&self) -> &DiceRoller {
        &self.dice
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState<'_> {
        ViewState::for_dice(&self.dice, &self.strings)
    }

    /// Whether `position` lies on the roll button as last drawn.
    #[must_use]
    pub fn hit_test(&self, position: Position) -> bool {
        self.button_area.is_some_and(|area| area.contains(position))
    }
}

impl Widget for &mut DiceScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.view_state();
        let (art_width, art_height) = ascii_art::size(view.asset);
        let button = TextButton::new(&view.instruction).style(self.theme.button_style);
        let (button_width, button_height) = button.size();

        let content = vertical_band(art_height + 1 + 1 + button_height, area);
        let art_rect = centered_top(content, (art_width, art_height));
        let value_rect = Rect::new(content.x, art_rect.bottom(), content.width, 1)
            .intersection(content);
        let button_rect = centered_top(
            Rect::new(
                content.x,
                value_rect.bottom() + 1,
                content.width,
                content.bottom().saturating_sub(value_rect.bottom() + 1),
            ),
            (button_width, button_height),
        );

        AsciiArt::new(view.asset)
            .style(self.theme.base_style)
            .render(art_rect, buf);
        Paragraph::new(Line::from(&*view.description).centered())
            .style(self.theme.dimmed_style)
            .render(value_rect, buf);
        button.render(button_rect, buf);

        self.button_area = Some(button_rect);
    }
}

impl HasCommands for DiceScreen {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let label = self.strings.get(StringId::RollLabel).to_owned();
        registry
            .keybind(Action::Primary, label)
            .into_iter()
            .collect()
    }
}
