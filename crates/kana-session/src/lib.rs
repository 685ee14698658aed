//! Stateful kana input engine for a software keyboard.
//!
//! `KanaInputEngine` consumes key events one at a time, keeps the pending
//! romaji buffer and the committed kana, and hands the delegate a fresh
//! (processed, display) snapshot after every event.

mod composing;
mod key_handlers;
mod response;
pub(crate) mod types;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use kana_core::romaji::RomajiTrie;
use kana_core::settings::{self, Settings};

pub use types::{keystrokes, EngineDelegate, KeyEvent};

use types::Composition;

/// Romaji-to-kana composition engine bound to a single delegate.
pub struct KanaInputEngine<D> {
    trie: Arc<RomajiTrie>,
    settings: Settings,
    delegate: D,
    composition: Composition,
}

impl<D: EngineDelegate> KanaInputEngine<D> {
    /// Engine over the process-wide romaji table and global settings.
    pub fn new(delegate: D) -> Self {
        Self::with_settings(delegate, settings::settings().clone())
    }

    pub fn with_settings(delegate: D, settings: Settings) -> Self {
        Self::with_table(delegate, RomajiTrie::shared(), settings)
    }

    pub fn with_table(delegate: D, trie: Arc<RomajiTrie>, settings: Settings) -> Self {
        Self {
            trie,
            settings,
            delegate,
            composition: Composition::default(),
        }
    }

    /// Committed text, without the pending buffer.
    pub fn text(&self) -> &str {
        &self.composition.committed
    }

    /// Pending romaji not yet resolved.
    pub fn pending(&self) -> &str {
        &self.composition.pending
    }

    pub fn is_composing(&self) -> bool {
        !self.composition.pending.is_empty()
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// End the session, handing back the delegate.
    pub fn into_delegate(self) -> D {
        self.delegate
    }
}
