//! Forward (orthography → runes) and reverse (runes → orthography) conversion.
//!
//! Both directions are total: anything the table does not cover is copied to
//! the output unchanged, at the same position.

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::script::Orthography;
use crate::table::RuneTable;

/// Render Latin or Cyrillic text in runes using the global table.
pub fn to_runic(text: &str, source: Orthography) -> String {
    RuneTable::global().to_runic(text, source)
}

/// Render runic text in Latin or Cyrillic using the global table.
pub fn from_runic(text: &str, target: Orthography) -> String {
    RuneTable::global().from_runic(text, target)
}

impl RuneTable {
    pub fn to_runic(&self, text: &str, source: Orthography) -> String {
        let _span = debug_span!("to_runic", %source, bytes = text.len()).entered();
        let mut out = String::with_capacity(text.len());
        let mut graphemes = 0usize;
        let mut passed = 0usize;
        for token in self.tokenize(text, source) {
            match token.rune {
                Some(rune) => {
                    graphemes += 1;
                    out.push(rune);
                }
                None => {
                    passed += 1;
                    out.push_str(token.raw);
                }
            }
        }
        debug!(graphemes, passed, "to_runic done");
        out
    }

    /// Covered runes become their canonical spelling; the distinctions the
    /// forward direction collapsed (`k`/`q`, `o`/`u`, …) are not recovered.
    pub fn from_runic(&self, text: &str, target: Orthography) -> String {
        let _span = debug_span!("from_runic", %target, bytes = text.len()).entered();
        let mut out = String::with_capacity(text.len());
        let mut passed = 0usize;
        for token in self.reverse_tokens(text) {
            match token.rune.and_then(|r| self.canonical(r, target)) {
                Some(spelling) => out.push_str(spelling),
                None => {
                    passed += 1;
                    out.push_str(token.raw);
                }
            }
        }
        debug!(passed, "from_runic done");
        out
    }

    /// `from_runic(to_runic(text))`: the canonical spelling of `text`.
    pub fn normalize(&self, text: &str, orthography: Orthography) -> String {
        self.from_runic(&self.to_runic(text, orthography), orthography)
    }
}
