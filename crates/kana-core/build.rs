//! Rejects a broken embedded table or settings file before the crate compiles,
//! so the `expect` in the lazy singletons can never fire on the defaults.

fn main() {
    println!("cargo:rerun-if-changed=src/default_settings.toml");
    println!("cargo:rerun-if-changed=src/romaji/default_romaji.toml");

    parse("src/default_settings.toml", include_str!("src/default_settings.toml"));

    let table = parse(
        "src/romaji/default_romaji.toml",
        include_str!("src/romaji/default_romaji.toml"),
    );
    let Some(mappings) = table.get("mappings").and_then(|m| m.as_table()) else {
        panic!("default_romaji.toml has no [mappings] table");
    };
    for (romaji, kana) in mappings {
        if !romaji.is_ascii() || romaji.is_empty() || romaji.len() > 3 {
            panic!("default_romaji.toml: bad romaji key {romaji:?}");
        }
        if kana.as_str().map_or(true, str::is_empty) {
            panic!("default_romaji.toml: empty kana for {romaji:?}");
        }
    }
}

fn parse(path: &str, content: &str) -> toml::Table {
    match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    }
}
