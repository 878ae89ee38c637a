use rune_core::Script;

/// An edit to the active buffer, as produced by a physical or on-screen key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// Append text (a letter, digit, rune, or a pasted run of them).
    Text(String),
    Space,
    /// Remove the last code point of the active buffer.
    Backspace,
}

impl KeyEvent {
    pub fn text(s: &str) -> Self {
        KeyEvent::Text(s.to_string())
    }
}

/// Input to the editor state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Advance Latin → Cyrillic → Runic → Latin.
    Cycle,
    /// Jump straight to a script.
    SwitchTo(Script),
    /// Replace the whole active buffer.
    Replace(String),
    Key(KeyEvent),
}
