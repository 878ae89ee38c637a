//! Character-level helpers shared by the tokenizer and the table loader.

/// Old Turkic block (Orkhon and Yenisei runes).
pub fn is_old_turkic(c: char) -> bool {
    ('\u{10C00}'..='\u{10C4F}').contains(&c)
}

/// Case-fold a single code point for table lookup.
///
/// Takes the first code point of the lowercase mapping so that one raw code
/// point always folds to exactly one: `'İ'` folds to `'i'` rather than the
/// two-code-point `"i\u{307}"`.
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// True if every code point in `s` is already folded.
pub fn is_folded(s: &str) -> bool {
    s.chars().all(|c| fold_char(c) == c)
}
