mod basic;

use kana_core::settings::Settings;

use super::{EngineDelegate, KanaInputEngine};

/// Delegate that keeps every notification it receives.
#[derive(Debug, Default)]
pub(super) struct Recorder {
    pub(super) calls: Vec<(String, String)>,
}

impl EngineDelegate for Recorder {
    fn on_processed(&mut self, processed: &str, display: &str) {
        self.calls.push((processed.to_string(), display.to_string()));
    }
}

impl Recorder {
    pub(super) fn last(&self) -> (&str, &str) {
        let (p, d) = self.calls.last().expect("no notification recorded");
        (p.as_str(), d.as_str())
    }
}

pub(super) fn make_engine() -> KanaInputEngine<Recorder> {
    make_engine_with(Settings::default())
}

pub(super) fn make_engine_with(settings: Settings) -> KanaInputEngine<Recorder> {
    KanaInputEngine::with_settings(Recorder::default(), settings)
}

// Helper: simulate typing a string one character at a time
pub(super) fn type_string(engine: &mut KanaInputEngine<Recorder>, s: &str) {
    for ch in s.chars() {
        engine.handle_character_input(ch);
    }
}
