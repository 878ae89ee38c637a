use std::fs;

use rune_engine::settings::{self, Settings};
use rune_engine::table::{self, parse_table_toml};
use rune_engine::{RuneTable, Script};

/// Install custom table/settings files before anything touches the globals.
pub fn load_overrides(table_file: Option<&str>, settings_file: Option<&str>) {
    if let Some(file) = table_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(RuneTable::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(content), "Error in {file}: {}");
    }
}

pub fn table_export() {
    print!("{}", table::default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let parsed = die!(parse_table_toml(&content), "Error: {}");
    println!("{}", table_summary(&parsed));
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!("{}", settings_summary(&s));
}

pub fn table_summary(table: &RuneTable) -> String {
    format!(
        "OK: {} letters, {} latin graphemes, {} cyrillic graphemes, longest grapheme {} chars",
        table.letters().len(),
        table.alphabet(Script::Latin).len(),
        table.alphabet(Script::Cyrillic).len(),
        table.max_grapheme_chars()
    )
}

pub fn settings_summary(s: &Settings) -> String {
    format!(
        "OK: session.initial_script={}, gate.timeout_secs={}, gate.pass_ttl_secs={}, gate.expected_action={}",
        s.session.initial_script,
        s.gate.timeout_secs,
        s.gate.pass_ttl_secs,
        s.gate.expected_action().unwrap_or("(none)")
    )
}
