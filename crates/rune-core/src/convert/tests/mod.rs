mod basic;

use crate::script::Orthography;
use crate::table::RuneTable;

pub(super) fn latin(text: &str) -> String {
    RuneTable::global().to_runic(text, Orthography::Latin)
}

pub(super) fn cyrillic(text: &str) -> String {
    RuneTable::global().to_runic(text, Orthography::Cyrillic)
}

/// Concatenate per-grapheme forward lookups, bypassing the tokenizer.
pub(super) fn runes_of(graphemes: &[&str], o: Orthography) -> String {
    let table = RuneTable::global();
    graphemes
        .iter()
        .map(|g| {
            table
                .forward(g, o)
                .unwrap_or_else(|| panic!("{g:?} is not a {o} grapheme"))
        })
        .collect()
}
