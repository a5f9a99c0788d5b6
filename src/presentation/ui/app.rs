//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent, MouseEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};
use tokio::time::interval;
use tracing::{debug, info};

use crate::application::StringCatalog;
use crate::domain::keybinding::{Action, Keybind};
use crate::domain::{DiceRoller, RandomSource, ScreenKind, Stage, StageMachine};
use crate::infrastructure::AppConfig;
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{
    ArticleScreen, DiceScreen, GreetingScreen, HelpOverlay, LemonadeScreen, QuadrantScreen,
    SplashScreen, TaskScreen,
};
use crate::presentation::widgets::{FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Splash,
    Running,
    Exiting,
}

pub struct App {
    state: AppState,
    active: ScreenKind,
    show_help: bool,
    mouse_enabled: bool,
    registry: CommandRegistry,
    strings: Arc<StringCatalog>,
    theme: Theme,
    splash: SplashScreen,
    lemonade: LemonadeScreen,
    dice: DiceScreen,
    greeting: GreetingScreen,
    article: ArticleScreen,
    quadrants: QuadrantScreen,
    task: TaskScreen,
}

impl App {
    /// Builds every screen up front; each keeps its state until exit.
    #[must_use]
    pub fn new(
        config: &AppConfig,
        theme: Theme,
        lemon_random: Box<dyn RandomSource>,
        dice_random: Box<dyn RandomSource>,
    ) -> Self {
        let strings = Arc::new(StringCatalog::with_overrides(&config.strings));
        debug!(overrides = strings.override_count(), "String catalog loaded");
        let machine = StageMachine::new(lemon_random);
        debug!(?machine, "Lemonade machine created");

        let state = if config.ui.enable_animations {
            AppState::Splash
        } else {
            AppState::Running
        };

        Self {
            state,
            active: config.start_screen,
            show_help: config.ui.show_help,
            mouse_enabled: config.mouse,
            registry: CommandRegistry::new(),
            splash: SplashScreen::new(theme.base_style.fg(theme.accent)),
            lemonade: LemonadeScreen::new(machine, Arc::clone(&strings), theme),
            dice: DiceScreen::new(DiceRoller::new(dice_random), Arc::clone(&strings), theme),
            greeting: GreetingScreen::new(Arc::clone(&strings), theme),
            article: ArticleScreen::new(Arc::clone(&strings), theme),
            quadrants: QuadrantScreen::new(Arc::clone(&strings)),
            task: TaskScreen::new(Arc::clone(&strings), theme),
            strings,
            theme,
        }
    }

    /// Whether the terminal should report mouse events.
    #[must_use]
    pub const fn mouse_enabled(&self) -> bool {
        self.mouse_enabled
    }

    /// # Errors
    /// Returns error if drawing to the terminal or reading its events fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        info!(screen = %self.active, "Application started");
        self.run_event_loop(terminal).await?;
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            let animating = self.state == AppState::Splash;

            tokio::select! {
                _ = animation_interval.tick(), if animating => {
                    self.splash.tick(ANIMATION_TICK_RATE);
                    terminal.draw(|frame| self.render(frame))?;

                    if self.splash.state.animation_complete {
                        self.state = AppState::Running;
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                event = terminal_events.next() => {
                    match event {
                        Some(Ok(event)) => {
                            if self.handle_event(event) == EventResult::Exit {
                                self.state = AppState::Exiting;
                            } else {
                                terminal.draw(|frame| self.render(frame))?;
                            }
                        }
                        Some(Err(e)) => return Err(e.into()),
                        None => self.state = AppState::Exiting,
                    }
                }
            }
        }

        Ok(())
    }

    /// Applies one terminal event to the application state.
    pub fn handle_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if EventHandler::is_press(&key) => self.handle_key(key),
            Event::Mouse(mouse) if self.mouse_enabled => self.handle_mouse(&mouse),
            Event::Resize(..) => EventResult::Consumed,
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_force_quit_event(&key) {
            return EventResult::Exit;
        }

        if self.state == AppState::Splash {
            debug!("Splash skipped");
            self.splash.skip();
            self.state = AppState::Running;
            return EventResult::Consumed;
        }

        let Some(action) = self.registry.find_action(key) else {
            return EventResult::Continue;
        };
        debug!(?action, code = ?key.code, "Key resolved");

        match action {
            Action::Quit => EventResult::Exit,
            Action::Cancel if self.show_help => {
                self.show_help = false;
                EventResult::Consumed
            }
            Action::Cancel => EventResult::Exit,
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                EventResult::Consumed
            }
            _ if self.show_help => EventResult::Continue,
            Action::Primary => self.press_active(),
            Action::NextScreen => self.switch_to(self.active.next()),
            Action::PreviousScreen => self.switch_to(self.active.previous()),
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> EventResult {
        if self.state != AppState::Running || self.show_help {
            return EventResult::Continue;
        }
        let Some(position) = EventHandler::left_click(mouse) else {
            return EventResult::Continue;
        };

        let hit = match self.active {
            ScreenKind::Lemonade => self.lemonade.hit_test(position),
            ScreenKind::Dice => self.dice.hit_test(position),
            _ => false,
        };

        if hit {
            self.press_active()
        } else {
            EventResult::Continue
        }
    }

    fn press_active(&mut self) -> EventResult {
        if !self.active.is_interactive() {
            return EventResult::Continue;
        }
        match self.active {
            ScreenKind::Lemonade => self.lemonade.press(),
            ScreenKind::Dice => self.dice.press(),
            _ => {}
        }
        EventResult::Consumed
    }

    fn switch_to(&mut self, screen: ScreenKind) -> EventResult {
        info!(from = %self.active, to = %screen, "Screen changed");
        self.active = screen;
        EventResult::Consumed
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.draw(area, frame.buffer_mut());
    }

    fn draw(&mut self, area: Rect, buf: &mut Buffer) {
        if self.state == AppState::Splash {
            self.splash.render(area, buf);
            return;
        }

        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        HeaderBar::new(crate::NAME, crate::VERSION)
            .screen(self.active, self.strings.get(self.active.title()))
            .style(HeaderBarStyle::from_theme(&self.theme))
            .render(header_area, buf);

        match self.active {
            ScreenKind::Lemonade => self.lemonade.render(body_area, buf),
            ScreenKind::Dice => self.dice.render(body_area, buf),
            ScreenKind::Greeting => self.greeting.render(body_area, buf),
            ScreenKind::Article => self.article.render(body_area, buf),
            ScreenKind::Quadrants => self.quadrants.render(body_area, buf),
            ScreenKind::Task => self.task.render(body_area, buf),
        }

        let commands = self.get_commands(&self.registry);
        let progress = self.squeeze_progress();
        FooterBar::new(&commands)
            .right_info(progress.as_deref())
            .style(FooterBarStyle::from_theme(&self.theme))
            .render(footer_area, buf);

        if self.show_help {
            HelpOverlay::new(&self.registry, &self.theme).render(area, buf);
        }
    }

    fn squeeze_progress(&self) -> Option<String> {
        let machine = self.lemonade.machine();
        (self.active == ScreenKind::Lemonade && machine.stage() == Stage::InProgress)
            .then(|| format!(" squeezed {}x ", machine.squeeze_count()))
    }
}

impl HasCommands for App {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let mut commands = match self.active {
            ScreenKind::Lemonade => self.lemonade.get_commands(registry),
            ScreenKind::Dice => self.dice.get_commands(registry),
            _ => Vec::new(),
        };

        commands.extend(
            [
                (Action::NextScreen, "Next"),
                (Action::PreviousScreen, "Prev"),
                (Action::ToggleHelp, "Help"),
                (Action::Quit, "Quit"),
            ]
            .into_iter()
            .filter_map(|(action, label)| registry.keybind(action, label)),
        );
        commands
            .into_iter()
            .map(|k| {
                // The footer only hints forward navigation; help lists both.
                if k.action == Action::PreviousScreen {
                    k.hidden()
                } else {
                    k
                }
            })
            .collect()
    }
}
