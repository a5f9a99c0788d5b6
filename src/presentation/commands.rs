use crate::domain::keybinding::{Action, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;
use std::collections::HashMap;

pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |action: Action, key: KeyEvent, is_primary: bool| {
            if is_primary {
                display_bindings.insert(action, key);
            }
            input_bindings.push((key, action));
        };

        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            false,
        );
        register(
            Action::Cancel,
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            true,
        );
        register(
            Action::ToggleHelp,
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::ToggleHelp,
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT),
            false,
        );
        register(
            Action::ToggleHelp,
            KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE),
            false,
        );

        register(
            Action::Primary,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            true,
        );
        register(
            Action::Primary,
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            false,
        );

        register(
            Action::NextScreen,
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            true,
        );
        register(
            Action::NextScreen,
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            false,
        );
        register(
            Action::NextScreen,
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE),
            false,
        );
        register(
            Action::PreviousScreen,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            true,
        );
        register(
            Action::PreviousScreen,
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            false,
        );
        register(
            Action::PreviousScreen,
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE),
            false,
        );

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    /// Resolves a key press; `BackTab` matches with or without the shift flag.
    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(k, _)| {
                k.code == key.code
                    && (k.modifiers == key.modifiers || key.code == KeyCode::BackTab)
            })
            .map(|(_, a)| *a)
    }

    /// All keys bound to `action`, in registration order.
    pub fn keys_for(&self, action: Action) -> impl Iterator<Item = &KeyEvent> {
        self.input_bindings
            .iter()
            .filter(move |(_, a)| *a == action)
            .map(|(k, _)| k)
    }

    /// Footer entry for `action` under its primary key.
    pub fn keybind(
        &self,
        action: Action,
        label: impl Into<Cow<'static, str>>,
    ) -> Option<Keybind> {
        self.get(action).map(|key| Keybind::new(key, action, label))
    }
}

pub trait HasCommands {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind>;
}
