use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key binding configuration
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub keys: Vec<(KeyCode, KeyModifiers)>,
    pub label: &'static str,
    pub description: &'static str,
}

impl KeyBinding {
    pub fn new(keys: &[KeyCode], label: &'static str, description: &'static str) -> Self {
        Self {
            keys: keys.iter().map(|key| (*key, KeyModifiers::NONE)).collect(),
            label,
            description,
        }
    }

    pub fn with_modifiers(mut self, key: KeyCode, modifiers: KeyModifiers) -> Self {
        self.keys.push((key, modifiers));
        self
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        // Shift is implied by the character itself for keys like '?' and 'G'
        let modifiers = event.modifiers.difference(KeyModifiers::SHIFT);
        self.keys
            .iter()
            .any(|(key, mods)| *key == event.code && *mods == modifiers)
    }
}

/// Action triggered by a key in normal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Help,
    PreviousPage,
    NextPage,
    FirstPage,
    LastPage,
    JumpBack,
    JumpForward,
    SelectPrevious,
    SelectNext,
    GoTo,
    Search,
    CycleKind,
    Delete,
}

/// Application key mappings
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<(Action, KeyBinding)>,
}

impl Default for KeyMap {
    fn default() -> Self {
        use KeyCode::*;
        Self {
            bindings: vec![
                (
                    Action::Quit,
                    KeyBinding::new(&[Char('q')], "q", "Quit")
                        .with_modifiers(Char('c'), KeyModifiers::CONTROL),
                ),
                (Action::Help, KeyBinding::new(&[Char('?')], "?", "Show/hide help")),
                (
                    Action::PreviousPage,
                    KeyBinding::new(&[Left, Char('h')], "←/h", "Previous page"),
                ),
                (
                    Action::NextPage,
                    KeyBinding::new(&[Right, Char('l')], "→/l", "Next page"),
                ),
                (Action::FirstPage, KeyBinding::new(&[Home], "Home", "First page")),
                (
                    Action::LastPage,
                    KeyBinding::new(&[End, Char('G')], "End/G", "Last page"),
                ),
                (Action::JumpBack, KeyBinding::new(&[PageUp], "PgUp", "Back 5 pages")),
                (
                    Action::JumpForward,
                    KeyBinding::new(&[PageDown], "PgDn", "Forward 5 pages"),
                ),
                (
                    Action::SelectPrevious,
                    KeyBinding::new(&[Up, Char('k')], "↑/k", "Select previous row"),
                ),
                (
                    Action::SelectNext,
                    KeyBinding::new(&[Down, Char('j')], "↓/j", "Select next row"),
                ),
                (Action::GoTo, KeyBinding::new(&[Char('g')], "g", "Go to page")),
                (Action::Search, KeyBinding::new(&[Char('/')], "/", "Search")),
                (Action::CycleKind, KeyBinding::new(&[Tab], "Tab", "Cycle kind filter")),
                (
                    Action::Delete,
                    KeyBinding::new(&[Delete, Char('x')], "Del/x", "Delete selected row"),
                ),
            ],
        }
    }
}

impl KeyMap {
    /// Action bound to the key event, if any
    pub fn action(&self, event: &KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(_, binding)| binding.matches(event))
            .map(|(action, _)| *action)
    }

    /// Get help text for all key bindings
    pub fn help_text(&self) -> String {
        self.bindings
            .iter()
            .map(|(_, binding)| format!("{:<8} {}", binding.label, binding.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_default_bindings() {
        let map = KeyMap::default();
        assert_eq!(
            map.action(&key(KeyCode::Right, KeyModifiers::NONE)),
            Some(Action::NextPage)
        );
        assert_eq!(
            map.action(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            map.action(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(Action::LastPage)
        );
        assert_eq!(map.action(&key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_help_lists_every_binding() {
        let help = KeyMap::default().help_text();
        assert_eq!(help.lines().count(), 14);
        assert!(help.contains("Go to page"));
    }
}
