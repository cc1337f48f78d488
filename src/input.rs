//! Commands and the key bindings that trigger them

use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};

/// Something the user asked the viewer to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move to next page
    NextPage,
    /// Move to previous page
    PreviousPage,
    /// Jump to the page number typed by the user
    GoToPage(String),
    ToggleFullscreen,
    /// Leave fullscreen, or quit when windowed
    ExitFullscreenOrClose,
    ZoomIn,
    ZoomOut,
}

/// One row of the key table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub key: Key,
    /// Ctrl on Linux and Windows, Cmd on macOS
    pub command_modifier: bool,
    pub command: Command,
}

/// Table mapping key presses to commands
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<Binding>,
}

impl KeyBindings {
    /// A table with no bindings
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    pub fn bind(mut self, key: Key, command_modifier: bool, command: Command) -> Self {
        self.bindings.push(Binding {
            key,
            command_modifier,
            command,
        });
        self
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// First command bound to `key` under `modifiers`
    pub fn resolve(&self, key: &Key, modifiers: Modifiers) -> Option<Command> {
        self.bindings
            .iter()
            .find(|b| b.key == *key && b.command_modifier == modifiers.command())
            .map(|b| b.command.clone())
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::empty()
            .bind(Key::Named(Named::Escape), false, Command::ExitFullscreenOrClose)
            .bind(Key::Named(Named::F11), false, Command::ToggleFullscreen)
            .bind(Key::Named(Named::PageDown), false, Command::NextPage)
            .bind(Key::Named(Named::PageUp), false, Command::PreviousPage)
            .bind(Key::Character("=".into()), true, Command::ZoomIn)
            .bind(Key::Character("+".into()), true, Command::ZoomIn)
            .bind(Key::Character("-".into()), true, Command::ZoomOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ch(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[rstest]
    #[case(Key::Named(Named::Escape), Modifiers::empty(), Some(Command::ExitFullscreenOrClose))]
    #[case(Key::Named(Named::F11), Modifiers::empty(), Some(Command::ToggleFullscreen))]
    #[case(Key::Named(Named::PageDown), Modifiers::empty(), Some(Command::NextPage))]
    #[case(Key::Named(Named::PageUp), Modifiers::empty(), Some(Command::PreviousPage))]
    #[case(ch("="), Modifiers::COMMAND, Some(Command::ZoomIn))]
    #[case(ch("+"), Modifiers::COMMAND, Some(Command::ZoomIn))]
    #[case(ch("-"), Modifiers::COMMAND, Some(Command::ZoomOut))]
    #[case(ch("="), Modifiers::empty(), None)]
    #[case(ch("-"), Modifiers::empty(), None)]
    #[case(ch("q"), Modifiers::empty(), None)]
    #[case(Key::Named(Named::Enter), Modifiers::empty(), None)]
    fn default_bindings(
        #[case] key: Key,
        #[case] modifiers: Modifiers,
        #[case] expected: Option<Command>,
    ) {
        assert_eq!(KeyBindings::default().resolve(&key, modifiers), expected);
    }

    #[test]
    fn first_binding_wins() {
        let table = KeyBindings::empty()
            .bind(ch("n"), false, Command::NextPage)
            .bind(ch("n"), false, Command::PreviousPage);
        assert_eq!(table.bindings().len(), 2);
        assert_eq!(
            table.resolve(&ch("n"), Modifiers::empty()),
            Some(Command::NextPage)
        );
    }
}
