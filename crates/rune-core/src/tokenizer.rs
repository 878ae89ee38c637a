//! Greedy grapheme tokenizer.
//!
//! At each position the next `max_grapheme_chars` code points are case-folded
//! and the longest prefix present in the orthography's forward map wins.
//! There is no backtracking: a longer match is taken even if it leaves a
//! worse split behind it.

use std::collections::HashMap;

use crate::script::Orthography;
use crate::table::RuneTable;
use crate::unicode::fold_char;

/// One unit of input: a recognized grapheme or a pass-through code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The input slice covered by this token, original casing intact.
    pub raw: &'a str,
    /// The rune this grapheme maps to, `None` for pass-through.
    pub rune: Option<char>,
}

impl Token<'_> {
    pub fn is_matched(&self) -> bool {
        self.rune.is_some()
    }
}

/// Lazy tokenizer over Latin or Cyrillic text. Cloning restarts from the
/// clone point.
#[derive(Debug, Clone)]
pub struct Tokens<'t, 'a> {
    map: &'t HashMap<String, char>,
    max_chars: usize,
    rest: &'a str,
    key: String,
}

impl<'t, 'a> Tokens<'t, 'a> {
    pub(crate) fn new(table: &'t RuneTable, text: &'a str, orthography: Orthography) -> Self {
        Self {
            map: table.forward_map(orthography),
            max_chars: table.max_grapheme_chars(),
            rest: text,
            key: String::new(),
        }
    }
}

impl<'a> Iterator for Tokens<'_, 'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let first = self.rest.chars().next()?;

        self.key.clear();
        let mut longest: Option<(usize, char)> = None;
        for (idx, c) in self.rest.char_indices().take(self.max_chars) {
            self.key.push(fold_char(c));
            if let Some(&rune) = self.map.get(self.key.as_str()) {
                longest = Some((idx + c.len_utf8(), rune));
            }
        }

        let (len, rune) = match longest {
            Some((len, rune)) => (len, Some(rune)),
            None => (first.len_utf8(), None),
        };
        let (raw, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(Token { raw, rune })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let bytes = self.rest.len();
        (bytes.div_ceil(self.max_chars.max(1) * 4), Some(bytes))
    }
}

/// Tokenizer over runic text: one code point per token.
#[derive(Debug, Clone)]
pub struct ReverseTokens<'t, 'a> {
    table: &'t RuneTable,
    rest: &'a str,
}

impl<'t, 'a> ReverseTokens<'t, 'a> {
    pub(crate) fn new(table: &'t RuneTable, text: &'a str) -> Self {
        Self { table, rest: text }
    }
}

impl<'a> Iterator for ReverseTokens<'_, 'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let c = self.rest.chars().next()?;
        let (raw, rest) = self.rest.split_at(c.len_utf8());
        self.rest = rest;
        let rune = self.table.letter(c).map(|l| l.rune);
        Some(Token { raw, rune })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let bytes = self.rest.len();
        (bytes.div_ceil(4), Some(bytes))
    }
}

impl RuneTable {
    /// Split Latin or Cyrillic text into graphemes, longest match first.
    pub fn tokenize<'t, 'a>(&'t self, text: &'a str, source: Orthography) -> Tokens<'t, 'a> {
        Tokens::new(self, text, source)
    }

    /// Split runic text into single code points, marking covered runes.
    pub fn reverse_tokens<'t, 'a>(&'t self, text: &'a str) -> ReverseTokens<'t, 'a> {
        ReverseTokens::new(self, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raws(text: &str, o: Orthography) -> Vec<&str> {
        RuneTable::global().tokenize(text, o).map(|t| t.raw).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(RuneTable::global().tokenize("", Orthography::Latin).count(), 0);
        assert_eq!(RuneTable::global().reverse_tokens("").count(), 0);
    }

    #[test]
    fn test_greedy_chocha() {
        assert_eq!(raws("chocha", Orthography::Latin), ["ch", "o", "ch", "a"]);
    }

    #[test]
    fn test_greedy_ogchz() {
        assert_eq!(raws("ogchz", Orthography::Latin), ["o", "g", "ch", "z"]);
    }

    #[test]
    fn test_apostrophe_digraphs() {
        assert_eq!(raws("o‘g‘il", Orthography::Latin), ["o‘", "g‘", "i", "l"]);
        assert_eq!(raws("g'oz", Orthography::Latin), ["g'", "o", "z"]);
    }

    #[test]
    fn test_casing_preserved_in_raw() {
        let tokens: Vec<_> = RuneTable::global()
            .tokenize("ShA", Orthography::Latin)
            .collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].raw, "Sh");
        assert_eq!(tokens[0].rune, Some('𐱁'));
        assert_eq!(tokens[1].raw, "A");
    }

    #[test]
    fn test_pass_through_flags() {
        let tokens: Vec<_> = RuneTable::global()
            .tokenize("a1!", Orthography::Latin)
            .collect();
        assert!(tokens[0].is_matched());
        assert_eq!(
            &tokens[1..],
            &[
                Token { raw: "1", rune: None },
                Token { raw: "!", rune: None }
            ]
        );
    }

    #[test]
    fn test_digraph_cut_by_end_of_input() {
        // "s" at the end cannot become "sh"; "n" cannot become "nd".
        assert_eq!(raws("as", Orthography::Latin), ["a", "s"]);
        assert_eq!(raws("an", Orthography::Latin), ["a", "n"]);
    }

    #[test]
    fn test_cyrillic_digraphs() {
        assert_eq!(raws("тенгри", Orthography::Cyrillic), ["т", "е", "нг", "р", "и"]);
        assert_eq!(raws("Алтын", Orthography::Cyrillic), ["А", "лт", "ы", "н"]);
    }

    #[test]
    fn test_script_isolation() {
        // Cyrillic letters are pass-through in Latin mode and vice versa.
        let tokens: Vec<_> = RuneTable::global()
            .tokenize("ш", Orthography::Latin)
            .collect();
        assert_eq!(tokens, [Token { raw: "ш", rune: None }]);
        let tokens: Vec<_> = RuneTable::global()
            .tokenize("s", Orthography::Cyrillic)
            .collect();
        assert_eq!(tokens, [Token { raw: "s", rune: None }]);
    }

    #[test]
    fn test_restartable_clone() {
        let mut tokens = RuneTable::global().tokenize("shch", Orthography::Latin);
        let restart = tokens.clone();
        assert_eq!(tokens.next().map(|t| t.raw), Some("sh"));
        assert_eq!(restart.map(|t| t.raw).collect::<Vec<_>>(), ["sh", "ch"]);
    }

    #[test]
    fn test_reverse_tokens() {
        let tokens: Vec<_> = RuneTable::global().reverse_tokens("𐰀 \u{10C0B}").collect();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].rune, Some('𐰀'));
        assert_eq!(tokens[1], Token { raw: " ", rune: None });
        // Front-vowel b is not in the reverse map.
        assert_eq!(tokens[2].rune, None);
    }
}
