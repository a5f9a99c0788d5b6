use std::sync::Arc;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};
use tracing::{debug, info};

use crate::application::{StringCatalog, ViewState};
use crate::domain::keybinding::{Action, Keybind};
use crate::domain::{Stage, StageMachine, StringId};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::vertical_band;
use crate::presentation::widgets::{ImageButton, centered_top};

pub struct LemonadeScreen {
    machine: StageMachine,
    strings: Arc<StringCatalog>,
    theme: Theme,
    button_area: Option<Rect>,
}

impl LemonadeScreen {
    #[must_use]
    pub fn new(machine: StageMachine, strings: Arc<StringCatalog>, theme: Theme) -> Self {
        Self {
            machine,
            strings,
            theme,
            button_area: None,
        }
    }

    /// Taps the image once.
    pub fn press(&mut self) {
        let before = self.machine.stage();
        self.machine.advance();
        let after = self.machine.stage();

        if before == Stage::InProgress {
            debug!(
                squeeze_count = self.machine.squeeze_count(),
                target = self.machine.target_squeeze_count(),
                "Lemon squeezed"
            );
        }
        if before != after {
            info!(from = %before, to = %after, "Lemonade stage changed");
        }
    }

    #[must_use]
    pub const fn machine(&self) -> &StageMachine {
        &self.machine
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState<'_> {
        ViewState::for_stage(self.machine.view(), &self.strings)
    }

    /// Whether `position` lies on the image as last drawn.
    #[must_use]
    pub fn hit_test(&self, position: Position) -> bool {
        self.button_area.is_some_and(|area| area.contains(position))
    }

    fn primary_label(&self) -> &'static str {
        match self.machine.stage() {
            Stage::Start => "Pick",
            Stage::InProgress => "Squeeze",
            Stage::Ready => "Drink",
            Stage::Done => "Restart",
        }
    }
}

impl Widget for &mut LemonadeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [banner_area, body_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let banner_inner = Rect::new(banner_area.x, banner_area.y + 1, banner_area.width, 1);
        buf.set_style(banner_area, self.theme.title_style);
        Paragraph::new(Line::from(self.strings.get(StringId::LemonadeTitle)).centered())
            .style(self.theme.title_style)
            .render(banner_inner, buf);

        let view = self.view_state();
        let button = ImageButton::new(view.asset, &view.description).style(self.theme.button_style);
        let (button_width, button_height) = button.size();

        let content = vertical_band(button_height + 2, body_area);
        let button_rect = centered_top(content, (button_width, button_height));
        let instruction_rect = Rect::new(
            content.x,
            (button_rect.bottom() + 1).min(content.bottom().saturating_sub(1)),
            content.width,
            content.height.min(1),
        );

        button.render(button_rect, buf);
        Paragraph::new(Line::from(&*view.instruction).centered())
            .style(self.theme.base_style)
            .render(instruction_rect, buf);

        self.button_area = Some(button_rect);
    }
}

impl HasCommands for LemonadeScreen {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        registry
            .keybind(Action::Primary, self.primary_label())
            .into_iter()
            .collect()
    }
}
