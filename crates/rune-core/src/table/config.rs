use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use super::{Letter, RuneTable};
use crate::script::Orthography;
use crate::unicode::{is_folded, is_old_turkic};

#[derive(Deserialize)]
struct TableConfig {
    letters: Vec<RawLetter>,
}

#[derive(Deserialize)]
struct RawLetter {
    rune: String,
    latin: Vec<String>,
    cyrillic: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[[letters]] list is empty")]
    Empty,
    #[error("rune must be exactly one code point: {0:?}")]
    InvalidRune(String),
    #[error("not an Old Turkic rune: {0:?} (expected U+10C00..U+10C4F)")]
    NotARune(char),
    #[error("duplicate rune: {0}")]
    DuplicateRune(char),
    #[error("no {orthography} graphemes for rune {rune}")]
    MissingGraphemes { rune: char, orthography: Orthography },
    #[error("empty {orthography} grapheme for rune {rune}")]
    EmptyGrapheme { rune: char, orthography: Orthography },
    #[error("grapheme must be lowercase: {0:?}")]
    NotFolded(String),
    #[error("{orthography} grapheme {grapheme:?} maps to both {first} and {second}")]
    Conflict {
        orthography: Orthography,
        grapheme: String,
        first: char,
        second: char,
    },
    #[error("rune table already initialized")]
    AlreadyInitialized,
}

/// Parse and validate table TOML, building both directions of the mapping.
pub fn parse_table_toml(toml_str: &str) -> Result<RuneTable, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if config.letters.is_empty() {
        return Err(TableError::Empty);
    }

    let mut letters = Vec::with_capacity(config.letters.len());
    let mut seen_runes = HashSet::new();
    for raw in config.letters {
        let rune = single_char(&raw.rune).ok_or_else(|| TableError::InvalidRune(raw.rune.clone()))?;
        if !is_old_turkic(rune) {
            return Err(TableError::NotARune(rune));
        }
        if !seen_runes.insert(rune) {
            return Err(TableError::DuplicateRune(rune));
        }
        check_graphemes(rune, Orthography::Latin, &raw.latin)?;
        check_graphemes(rune, Orthography::Cyrillic, &raw.cyrillic)?;
        letters.push(Letter {
            rune,
            latin: raw.latin,
            cyrillic: raw.cyrillic,
        });
    }

    build(letters)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn check_graphemes(
    rune: char,
    orthography: Orthography,
    graphemes: &[String],
) -> Result<(), TableError> {
    if graphemes.is_empty() {
        return Err(TableError::MissingGraphemes { rune, orthography });
    }
    for g in graphemes {
        if g.is_empty() {
            return Err(TableError::EmptyGrapheme { rune, orthography });
        }
        if !is_folded(g) {
            return Err(TableError::NotFolded(g.clone()));
        }
    }
    Ok(())
}

fn build(letters: Vec<Letter>) -> Result<RuneTable, TableError> {
    let mut latin = HashMap::new();
    let mut cyrillic = HashMap::new();
    let mut reverse = HashMap::with_capacity(letters.len());
    let mut max_grapheme_chars = 1;

    for (idx, letter) in letters.iter().enumerate() {
        reverse.insert(letter.rune, idx);
        for orthography in Orthography::ALL {
            let forward: &mut HashMap<String, char> = match orthography {
                Orthography::Latin => &mut latin,
                Orthography::Cyrillic => &mut cyrillic,
            };
            for g in letter.graphemes(orthography) {
                if let Some(&first) = forward.get(g) {
                    // Repeating a grapheme within the same row is harmless.
                    if first != letter.rune {
                        return Err(TableError::Conflict {
                            orthography,
                            grapheme: g.clone(),
                            first,
                            second: letter.rune,
                        });
                    }
                }
                forward.insert(g.clone(), letter.rune);
                max_grapheme_chars = max_grapheme_chars.max(g.chars().count());
            }
        }
    }

    Ok(RuneTable {
        letters,
        latin,
        cyrillic,
        reverse,
        max_grapheme_chars,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[[letters]]
rune = "𐰀"
latin = ["a", "e"]
cyrillic = ["а"]

[[letters]]
rune = "𐱁"
latin = ["sh"]
cyrillic = ["ш"]
"#;
        let table = parse_table_toml(toml).unwrap();
        assert_eq!(table.letters().len(), 2);
        assert_eq!(table.max_grapheme_chars(), 2);
        assert_eq!(table.forward("e", Orthography::Latin), Some('𐰀'));
        assert_eq!(table.forward("sh", Orthography::Latin), Some('𐱁'));
        assert_eq!(table.canonical('𐰀', Orthography::Latin), Some("a"));
    }

    #[test]
    fn parse_default_toml() {
        let table = parse_table_toml(super::super::DEFAULT_TOML).unwrap();
        assert!(table.letters().len() >= 24);
        assert_eq!(table.max_grapheme_chars(), 2);
    }

    #[test]
    fn error_empty_letters() {
        let err = parse_table_toml("letters = []\n").unwrap_err();
        assert!(matches!(err, TableError::Empty));
    }

    #[test]
    fn error_multi_char_rune() {
        let toml = r#"
[[letters]]
rune = "𐰀𐰀"
latin = ["a"]
cyrillic = ["а"]
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::InvalidRune(_)));
    }

    #[test]
    fn error_rune_outside_block() {
        let toml = r#"
[[letters]]
rune = "ᚠ"
latin = ["f"]
cyrillic = ["ф"]
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::NotARune('ᚠ')));
    }

    #[test]
    fn error_duplicate_rune() {
        let toml = r#"
[[letters]]
rune = "𐰀"
latin = ["a"]
cyrillic = ["а"]

[[letters]]
rune = "𐰀"
latin = ["e"]
cyrillic = ["е"]
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::DuplicateRune('𐰀')));
    }

    #[test]
    fn error_missing_cyrillic() {
        let toml = r#"
[[letters]]
rune = "𐰀"
latin = ["a"]
cyrillic = []
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            TableError::MissingGraphemes {
                orthography: Orthography::Cyrillic,
                ..
            }
        ));
    }

    #[test]
    fn error_empty_grapheme() {
        let toml = r#"
[[letters]]
rune = "𐰀"
latin = ["a", ""]
cyrillic = ["а"]
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::EmptyGrapheme { .. }));
    }

    #[test]
    fn error_uppercase_grapheme() {
        let toml = r#"
[[letters]]
rune = "𐱁"
latin = ["Sh"]
cyrillic = ["ш"]
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::NotFolded(ref g) if g == "Sh"));
    }

    #[test]
    fn error_conflicting_grapheme() {
        let toml = r#"
[[letters]]
rune = "𐰚"
latin = ["k", "q"]
cyrillic = ["к"]

[[letters]]
rune = "𐰴"
latin = ["q"]
cyrillic = ["қ"]
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(err.to_string().contains("\"q\""));
        assert!(matches!(err, TableError::Conflict { .. }));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_table_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }
}
