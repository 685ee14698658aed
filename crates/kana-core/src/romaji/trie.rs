use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};

use super::config::{parse_romaji_toml, RomajiConfigError};
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieLookupResult {
    None,
    Prefix,
    Exact(String),
    ExactAndPrefix(String),
}

#[derive(Debug, Default)]
struct Node {
    children: HashMap<u8, Node>,
    kana: Option<String>,
}

/// Byte trie over romaji keys. Immutable once built.
#[derive(Debug)]
pub struct RomajiTrie {
    root: Node,
    max_key_len: usize,
}

impl RomajiTrie {
    /// Set custom TOML before the first `global()`/`shared()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        // Validate eagerly
        parse_romaji_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    fn instance() -> &'static Arc<RomajiTrie> {
        static INSTANCE: OnceLock<Arc<RomajiTrie>> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let map = parse_romaji_toml(toml_str).expect("romaji TOML must be valid");
            tracing::debug!(rules = map.len(), custom = CUSTOM_TOML.get().is_some(), "romaji table loaded");
            Arc::new(RomajiTrie::from_mappings(&map))
        })
    }

    /// Get or initialize the process-wide table.
    pub fn global() -> &'static RomajiTrie {
        Self::instance()
    }

    /// Shared handle to the process-wide table, for owners that outlive a borrow.
    pub fn shared() -> Arc<RomajiTrie> {
        Arc::clone(Self::instance())
    }

    /// Build a standalone table from TOML text, bypassing the global.
    pub fn from_toml(toml_str: &str) -> Result<Self, RomajiConfigError> {
        let map = parse_romaji_toml(toml_str)?;
        Ok(Self::from_mappings(&map))
    }

    pub fn from_mappings(map: &BTreeMap<String, String>) -> Self {
        let mut trie = RomajiTrie {
            root: Node::default(),
            max_key_len: 0,
        };
        for (romaji, kana) in map {
            trie.insert(romaji, kana);
        }
        trie
    }

    /// Length in bytes of the longest key.
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    pub fn lookup(&self, romaji: &str) -> TrieLookupResult {
        let mut node = &self.root;
        for &b in romaji.as_bytes() {
            match node.children.get(&b) {
                Some(child) => node = child,
                None => return TrieLookupResult::None,
            }
        }
        let has_children = !node.children.is_empty();
        match (&node.kana, has_children) {
            (None, false) => TrieLookupResult::None,
            (None, true) => TrieLookupResult::Prefix,
            (Some(kana), false) => TrieLookupResult::Exact(kana.clone()),
            (Some(kana), true) => TrieLookupResult::ExactAndPrefix(kana.clone()),
        }
    }

    fn insert(&mut self, romaji: &str, kana: &str) {
        let mut node = &mut self.root;
        for &b in romaji.as_bytes() {
            node = node.children.entry(b).or_default();
        }
        node.kana = Some(kana.to_string());
        self.max_key_len = self.max_key_len.max(romaji.len());
    }
}
