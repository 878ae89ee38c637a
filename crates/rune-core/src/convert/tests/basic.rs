use super::*;
use crate::convert::{from_runic, to_runic};
use crate::script::Script;

// --- Forward ---

#[test]
fn test_salam() {
    assert_eq!(latin("salam"), runes_of(&["s", "a", "l", "a", "m"], Orthography::Latin));
    assert_eq!(latin("salam"), "𐰽𐰀𐰞𐰀𐰢");
}

#[test]
fn test_chocha_uses_digraphs() {
    let greedy = runes_of(&["ch", "o", "ch", "a"], Orthography::Latin);
    let per_char = runes_of(&["c", "h", "o", "c", "h", "a"], Orthography::Latin);
    assert_eq!(latin("chocha"), greedy);
    assert_ne!(latin("chocha"), per_char);
}

#[test]
fn test_ogchz_takes_ch_as_one() {
    let per_char = runes_of(&["o", "g", "c", "h", "z"], Orthography::Latin);
    assert_eq!(latin("ogchz"), "𐰆𐰏𐰲𐰔");
    assert_ne!(latin("ogchz"), per_char);
}

#[test]
fn test_empty() {
    assert_eq!(to_runic("", Orthography::Latin), "");
    assert_eq!(to_runic("", Orthography::Cyrillic), "");
    assert_eq!(from_runic("", Orthography::Latin), "");
    assert_eq!(from_runic("", Orthography::Cyrillic), "");
}

#[test]
fn test_case_insensitive() {
    assert_eq!(latin("TENGRI"), latin("tengri"));
    assert_eq!(latin("Tengri"), "𐱃𐰀𐰭𐰺𐰃");
    assert_eq!(cyrillic("ТЕНГРИ"), cyrillic("тенгри"));
}

#[test]
fn test_pass_through_keeps_position() {
    assert_eq!(latin("1 a, 2!"), "1 𐰀, 2!");
    assert_eq!(cyrillic("7-а 🙂"), "7-𐰀 🙂");
    assert_eq!(
        from_runic("1 𐰀, 2!", Orthography::Latin),
        "1 a, 2!"
    );
}

#[test]
fn test_other_script_passes_through() {
    assert_eq!(latin("ab бв"), "𐰀𐰉 бв");
    assert_eq!(cyrillic("аб ab"), "𐰀𐰉 ab");
}

#[test]
fn test_every_grapheme_is_covered() {
    let table = RuneTable::global();
    for o in Orthography::ALL {
        for g in table.alphabet(Script::from(o)) {
            let tokens: Vec<_> = table.tokenize(&g, o).collect();
            assert_eq!(tokens.len(), 1, "{g:?} split into {tokens:?}");
            assert!(tokens[0].is_matched(), "{g:?} not matched");

            let out = table.to_runic(&g, o);
            assert_eq!(out.chars().count(), 1, "{g:?} -> {out:?}");
            assert_eq!(table.to_runic(&g.to_uppercase(), o), out, "{g:?} uppercase");
        }
    }
}

// --- Reverse ---

#[test]
fn test_k_q_collapse() {
    assert_eq!(latin("kol"), latin("qol"));
    // Canonical spellings: 𐰚 → k, 𐰆 → u.
    assert_eq!(from_runic(&latin("qol"), Orthography::Latin), "kul");
    assert_eq!(from_runic(&latin("kol"), Orthography::Latin), "kul");
    assert_eq!(cyrillic("кол"), cyrillic("қол"));
    assert_eq!(from_runic(&cyrillic("қол"), Orthography::Cyrillic), "кул");
}

#[test]
fn test_reverse_uses_canonical_spelling() {
    let table = RuneTable::global();
    for letter in table.letters() {
        let rune = letter.rune.to_string();
        for o in Orthography::ALL {
            assert_eq!(table.from_runic(&rune, o), letter.canonical(o));
        }
    }
}

#[test]
fn test_reverse_across_orthographies() {
    let runes = latin("Tengri");
    assert_eq!(from_runic(&runes, Orthography::Latin), "taŋgri");
    assert_eq!(from_runic(&runes, Orthography::Cyrillic), "таңри");
}

#[test]
fn test_unknown_rune_passes_through() {
    // ORKHON AEB and ORKHON BASH have no reverse entry.
    assert_eq!(
        from_runic("𐰀\u{10C0B}\u{10C48}", Orthography::Latin),
        "a\u{10C0B}\u{10C48}"
    );
}

#[test]
fn test_latin_letters_in_runic_input_pass_through() {
    assert_eq!(from_runic("abc", Orthography::Cyrillic), "abc");
}

#[test]
fn test_normalize_uzbek_apostrophes() {
    let table = RuneTable::global();
    assert_eq!(table.normalize("Qo‘shiq", Orthography::Latin), "köshik");
    assert_eq!(table.normalize("o'g'il", Orthography::Latin), "öğil");
}

#[test]
fn test_cyrillic_digraph_roundtrip() {
    assert_eq!(cyrillic("Күлтегин"), "𐰚𐰇𐰡𐰀𐰏𐰃𐰣");
    assert_eq!(
        from_runic(&cyrillic("Күлтегин"), Orthography::Cyrillic),
        "көлтагин"
    );
}
