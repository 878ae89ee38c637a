const SETTINGS: &str = "src/default_settings.toml";
const TABLE: &str = "src/table/default_table.toml";

fn main() {
    println!("cargo:rerun-if-changed={SETTINGS}");
    println!("cargo:rerun-if-changed={TABLE}");

    let settings = parse(SETTINGS, include_str!("src/default_settings.toml"));
    for section in ["session", "gate"] {
        if !settings.get(section).is_some_and(toml::Value::is_table) {
            panic!("{SETTINGS} is missing the [{section}] table");
        }
    }

    let table = parse(TABLE, include_str!("src/table/default_table.toml"));
    let rows = table
        .get("letters")
        .and_then(toml::Value::as_array)
        .map_or(0, Vec::len);
    if rows == 0 {
        panic!("{TABLE} has no [[letters]] rows");
    }
}

fn parse(path: &str, content: &str) -> toml::Table {
    match content.parse::<toml::Table>() {
        Ok(t) => t,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    }
}
