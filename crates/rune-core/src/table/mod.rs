//! The canonical letter table.
//!
//! One list of `(rune, Latin graphemes, Cyrillic graphemes)` rows is the only
//! source of mapping data; the forward maps (grapheme → rune, one per
//! orthography) and the reverse map (rune → canonical spelling) are both
//! derived from it when the table is built, so they cannot drift apart.

mod config;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use config::{parse_table_toml, TableError};

use crate::script::{Orthography, Script};

pub const DEFAULT_TOML: &str = include_str!("default_table.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<RuneTable> = OnceLock::new();

/// One row of the table. The first grapheme of each list is canonical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letter {
    pub rune: char,
    pub latin: Vec<String>,
    pub cyrillic: Vec<String>,
}

impl Letter {
    pub fn graphemes(&self, orthography: Orthography) -> &[String] {
        match orthography {
            Orthography::Latin => &self.latin,
            Orthography::Cyrillic => &self.cyrillic,
        }
    }

    /// Spelling produced when this rune is converted back to `orthography`.
    pub fn canonical(&self, orthography: Orthography) -> &str {
        // Validation guarantees at least one grapheme per orthography.
        self.graphemes(orthography)
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Immutable forward and reverse mappings built from the letter rows.
#[derive(Debug)]
pub struct RuneTable {
    letters: Vec<Letter>,
    latin: HashMap<String, char>,
    cyrillic: HashMap<String, char>,
    reverse: HashMap<char, usize>,
    max_grapheme_chars: usize,
}

impl RuneTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        if INSTANCE.get().is_some() {
            return Err(TableError::AlreadyInitialized);
        }
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RuneTable {
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            parse_table_toml(toml_str).expect("rune table TOML must be valid")
        })
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Length in code points of the longest source grapheme.
    pub fn max_grapheme_chars(&self) -> usize {
        self.max_grapheme_chars
    }

    pub(crate) fn forward_map(&self, orthography: Orthography) -> &HashMap<String, char> {
        match orthography {
            Orthography::Latin => &self.latin,
            Orthography::Cyrillic => &self.cyrillic,
        }
    }

    /// Rune for an already case-folded grapheme.
    pub fn forward(&self, grapheme: &str, orthography: Orthography) -> Option<char> {
        self.forward_map(orthography).get(grapheme).copied()
    }

    pub fn letter(&self, rune: char) -> Option<&Letter> {
        self.reverse.get(&rune).map(|&idx| &self.letters[idx])
    }

    /// Canonical spelling of `rune` in `orthography`, if the rune is covered.
    pub fn canonical(&self, rune: char, orthography: Orthography) -> Option<&str> {
        self.letter(rune).map(|l| l.canonical(orthography))
    }

    /// Graphemes of `script` in table order, e.g. for laying out a keyboard.
    ///
    /// Latin and Cyrillic list every accepted spelling, aliases included;
    /// Runic lists each rune once.
    pub fn alphabet(&self, script: Script) -> Vec<String> {
        match script.orthography() {
            Some(o) => self
                .letters
                .iter()
                .flat_map(|l| l.graphemes(o).iter().cloned())
                .collect(),
            None => self.letters.iter().map(|l| l.rune.to_string()).collect(),
        }
    }
}

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
