//! Romaji-to-kana transliteration.
//!
//! A trie built from a TOML table answers "is this exact, a prefix, both, or
//! nothing?" for the pending romaji, and [`convert_romaji`] turns the pending
//! buffer into committed units, handling sokuon (っ), the lone-n hatsuon (ん)
//! and verbatim passthrough of anything the table does not know.

mod config;
mod convert;
mod table;
mod trie;

pub use config::{parse_romaji_toml, RomajiConfigError, MAX_ROMAJI_LEN};
pub use convert::{convert_romaji, KanaUnit, RomajiConvertResult};
pub use table::DEFAULT_TOML;
pub use trie::{RomajiTrie, TrieLookupResult};
