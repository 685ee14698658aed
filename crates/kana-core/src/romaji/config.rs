use std::collections::BTreeMap;

use serde::Deserialize;

/// Longest romaji key a table may define.
pub const MAX_ROMAJI_LEN: usize = 3;

#[derive(Deserialize)]
struct RomajiConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("non-ASCII key: {0}")]
    NonAsciiKey(String),
    #[error("key longer than 3 characters: {0}")]
    KeyTooLong(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("romaji table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<romaji, kana>`.
pub fn parse_romaji_toml(toml_str: &str) -> Result<BTreeMap<String, String>, RomajiConfigError> {
    let config: RomajiConfig =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(RomajiConfigError::Empty);
    }

    for (key, value) in &config.mappings {
        if !key.is_ascii() {
            return Err(RomajiConfigError::NonAsciiKey(key.clone()));
        }
        if key.len() > MAX_ROMAJI_LEN {
            return Err(RomajiConfigError::KeyTooLong(key.clone()));
        }
        if value.is_empty() {
            return Err(RomajiConfigError::EmptyValue(key.clone()));
        }
    }

    Ok(config.mappings)
}
