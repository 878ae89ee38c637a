//! Editor mode state machine for the transliteration keyboard.
//!
//! The editor shows two fields: the Latin/Cyrillic text and its runic
//! rendering. Only the field of the active script is edited by the user; the
//! other one is always derived from it. Switching scripts re-derives both
//! fields from the runic text, which is the shared source of truth.

mod types;

#[cfg(test)]
mod tests;

use tracing::debug_span;

use rune_core::settings::settings;
use rune_core::{Orthography, RuneTable, Script};

pub use types::{Event, KeyEvent};

/// Editor state. Plain data: advance it with [`transition`] or
/// [`EditorState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    active: Script,
    /// Target of the reverse conversion while runes are being edited.
    last_orthography: Orthography,
    source: String,
    runic: String,
}

impl EditorState {
    pub fn new(initial: Orthography) -> Self {
        Self {
            active: initial.into(),
            last_orthography: initial,
            source: String::new(),
            runic: String::new(),
        }
    }

    /// Empty editor in the orthography configured in settings.
    pub fn from_settings() -> Self {
        Self::new(settings().session.initial_script)
    }

    pub fn active(&self) -> Script {
        self.active
    }

    pub fn last_orthography(&self) -> Orthography {
        self.last_orthography
    }

    /// The Latin or Cyrillic field, in `last_orthography`.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn runic(&self) -> &str {
        &self.runic
    }

    /// Text of the field the user is editing.
    pub fn active_text(&self) -> &str {
        match self.active {
            Script::Runic => &self.runic,
            Script::Latin | Script::Cyrillic => &self.source,
        }
    }

    /// Text of the derived field.
    pub fn mirror_text(&self) -> &str {
        match self.active {
            Script::Runic => &self.source,
            Script::Latin | Script::Cyrillic => &self.runic,
        }
    }

    /// Advance with the global rune table.
    pub fn apply(self, event: Event) -> Self {
        transition(RuneTable::global(), self, event)
    }
}

/// The state machine: returns the state after `event`.
pub fn transition(table: &RuneTable, state: EditorState, event: Event) -> EditorState {
    let _span = debug_span!("transition", from = %state.active).entered();
    match event {
        Event::Cycle => {
            let next = state.active.cycle_next();
            switch(table, state, next)
        }
        Event::SwitchTo(script) => switch(table, state, script),
        Event::Replace(text) => with_active_text(table, state, text),
        Event::Key(key) => {
            let mut text = state.active_text().to_string();
            match key {
                KeyEvent::Text(s) => text.push_str(&s),
                KeyEvent::Space => text.push(' '),
                KeyEvent::Backspace => {
                    text.pop();
                }
            }
            with_active_text(table, state, text)
        }
    }
}

fn switch(table: &RuneTable, state: EditorState, to: Script) -> EditorState {
    if state.active == to {
        return state;
    }
    match to.orthography() {
        Some(o) => {
            // Adjacent runes whose spellings read back as one longer
            // grapheme merge here (𐰣𐰏 -> "ng" -> 𐰭). Re-derive the source
            // from the merged runes so both fields agree.
            let runic = table.to_runic(&table.from_runic(&state.runic, o), o);
            let source = table.from_runic(&runic, o);
            EditorState {
                active: to,
                last_orthography: o,
                source,
                runic,
            }
        }
        None => {
            let source = table.from_runic(&state.runic, state.last_orthography);
            EditorState {
                active: Script::Runic,
                source,
                ..state
            }
        }
    }
}

fn with_active_text(table: &RuneTable, state: EditorState, text: String) -> EditorState {
    match state.active.orthography() {
        Some(o) => EditorState {
            runic: table.to_runic(&text, o),
            source: text,
            ..state
        },
        None => EditorState {
            source: table.from_runic(&text, state.last_orthography),
            runic: text,
            ..state
        },
    }
}
