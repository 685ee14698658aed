use kana_core::romaji::convert_romaji;
use kana_core::settings::{KanaScript, PendingStyle};
use kana_core::unicode::hiragana_to_katakana;

use super::{EngineDelegate, KanaInputEngine};

impl<D: EngineDelegate> KanaInputEngine<D> {
    /// Committed text followed by the rendered pending buffer.
    pub fn display(&self) -> String {
        format!("{}{}", self.composition.committed, self.render_pending())
    }

    fn render_pending(&self) -> String {
        let pending = &self.composition.pending;
        match self.settings.display.pending {
            PendingStyle::Romaji => pending.clone(),
            PendingStyle::Kana => {
                let preview = convert_romaji(&self.trie, pending, true).composed_kana();
                self.apply_script(preview)
            }
        }
    }

    pub(super) fn apply_script(&self, kana: String) -> String {
        match self.settings.input.script {
            KanaScript::Hiragana => kana,
            KanaScript::Katakana => hiragana_to_katakana(&kana),
        }
    }

    /// Push the current snapshot to the delegate. Exactly once per handled event.
    pub(super) fn notify(&mut self) {
        let display = self.display();
        self.delegate
            .on_processed(&self.composition.committed, &display);
    }
}
