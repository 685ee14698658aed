//! Global settings loaded from TOML, following the same OnceLock pattern as the romaji table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! Missing sections or keys fall back to the same defaults as the embedded file.

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub input: InputSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    pub fold_uppercase: bool,
    pub script: KanaScript,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            fold_uppercase: true,
            script: KanaScript::Hiragana,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub pending: PendingStyle,
}

/// Script used for committed kana.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KanaScript {
    #[default]
    Hiragana,
    Katakana,
}

/// Rendering of the pending buffer inside the display text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PendingStyle {
    /// Raw keystrokes, e.g. "ky".
    #[default]
    Romaji,
    /// Forced conversion preview, e.g. "n" shown as "ん".
    Kana,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s, Settings::default());
        assert!(s.input.fold_uppercase);
        assert_eq!(s.input.script, KanaScript::Hiragana);
        assert_eq!(s.display.pending, PendingStyle::Romaji);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let s = parse_settings_toml("[display]\npending = \"kana\"\n").unwrap();
        assert_eq!(s.display.pending, PendingStyle::Kana);
        assert_eq!(s.input, InputSettings::default());
    }

    #[test]
    fn katakana_script() {
        let s = parse_settings_toml("[input]\nscript = \"katakana\"\n").unwrap();
        assert_eq!(s.input.script, KanaScript::Katakana);
        assert!(s.input.fold_uppercase);
    }

    #[test]
    fn error_unknown_variant() {
        let err = parse_settings_toml("[display]\npending = \"underline\"\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_wrong_type() {
        let err = parse_settings_toml("[input]\nfold_uppercase = \"yes\"\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn global_settings_are_default() {
        assert_eq!(settings(), &Settings::default());
        assert_eq!(default_toml(), DEFAULT_SETTINGS_TOML);
    }
}
