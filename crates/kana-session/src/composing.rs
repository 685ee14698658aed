use tracing::debug;

use kana_core::romaji::convert_romaji;

use super::{EngineDelegate, KanaInputEngine};

impl<D: EngineDelegate> KanaInputEngine<D> {
    /// Append `ch` to the pending buffer and resolve whatever became unambiguous.
    pub fn handle_character_input(&mut self, ch: char) {
        let ch = if self.settings.input.fold_uppercase {
            ch.to_ascii_lowercase()
        } else {
            ch
        };
        self.composition.pending.push(ch);
        self.drain_pending(false);
        self.notify();
    }

    /// Resolve the pending buffer completely (Return key).
    pub fn commit_composition(&mut self) {
        self.drain_pending(true);
        self.notify();
    }

    /// Resolve the pending buffer, then commit `candidate` as a single unit.
    pub fn accept_candidate(&mut self, candidate: &str) {
        self.drain_pending(true);
        self.composition.push_unit(candidate, String::new());
        self.notify();
    }

    /// Convert pending romaji into committed units. If `force`, flush incomplete sequences.
    fn drain_pending(&mut self, force: bool) {
        if self.composition.pending.is_empty() {
            return;
        }
        let result = convert_romaji(&self.trie, &self.composition.pending, force);
        for unit in result.units {
            let text = self.apply_script(unit.kana);
            debug!(romaji = %unit.romaji, text = %text, "commit unit");
            self.composition.push_unit(&text, unit.romaji);
        }
        self.composition.pending = result.pending_romaji;
    }
}
