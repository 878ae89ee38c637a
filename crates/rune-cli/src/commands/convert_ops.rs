use std::io::{self, BufRead, Write};

use serde::Serialize;

use rune_engine::{from_runic, to_runic, Orthography, RuneTable, Script};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToRunic,
    FromRunic,
}

impl Direction {
    pub fn apply(self, text: &str, orthography: Orthography) -> String {
        match self {
            Direction::ToRunic => to_runic(text, orthography),
            Direction::FromRunic => from_runic(text, orthography),
        }
    }
}

/// Convert `text`, or every stdin line when `text` is `None`.
pub fn convert_cmd(direction: Direction, orthography: Orthography, text: Option<&str>) {
    match text {
        Some(t) => println!("{}", direction.apply(t, orthography)),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            die!(
                convert_lines(stdin.lock(), stdout.lock(), direction, orthography),
                "Error converting stdin: {}"
            );
        }
    }
}

/// Line-by-line conversion; returns the number of lines written.
pub fn convert_lines<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    direction: Direction,
    orthography: Orthography,
) -> io::Result<usize> {
    let mut count = 0;
    for line in reader.lines() {
        writeln!(writer, "{}", direction.apply(&line?, orthography))?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TokenRow {
    pub raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rune: Option<String>,
}

pub fn token_rows(text: &str, orthography: Orthography) -> Vec<TokenRow> {
    RuneTable::global()
        .tokenize(text, orthography)
        .map(|t| TokenRow {
            raw: t.raw.to_string(),
            rune: t.rune.map(String::from),
        })
        .collect()
}

/// `ch=𐰲 o=𐰆 [,]`: matched graphemes with their rune, pass-through in brackets.
pub fn format_tokens(rows: &[TokenRow]) -> String {
    rows.iter()
        .map(|r| match &r.rune {
            Some(rune) => format!("{}={}", r.raw, rune),
            None => format!("[{}]", r.raw),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn tokens_cmd(orthography: Orthography, text: &str, json: bool) {
    let rows = token_rows(text, orthography);
    if json {
        let out = die!(serde_json::to_string_pretty(&rows), "JSON error: {}");
        println!("{out}");
    } else {
        println!("{}", format_tokens(&rows));
    }
}

pub fn alphabet_cmd(script: Script, json: bool) {
    let letters = RuneTable::global().alphabet(script);
    if json {
        let out = die!(serde_json::to_string(&letters), "JSON error: {}");
        println!("{out}");
    } else {
        println!("{}", letters.join(" "));
    }
}
