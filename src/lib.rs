//! Rune engine: Turkic Latin/Cyrillic ↔ Old Turkic runic transliteration.
//!
//! Re-exports the conversion core and the editor state machine, and adds the
//! human-verification gate that fronts the keyboard.

pub mod gate;
pub mod trace_init;

pub use rune_core::{settings, table};
pub use rune_core::{
    from_runic, to_runic, Letter, Orthography, ParseScriptError, RuneTable, Script, TableError,
    Token,
};
pub use rune_session::{transition, EditorState, Event, KeyEvent};

/// Engine version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
