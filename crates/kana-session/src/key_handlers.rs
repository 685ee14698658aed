use tracing::{debug, debug_span};

use super::types::KeyEvent;
use super::{EngineDelegate, KanaInputEngine};

impl<D: EngineDelegate> KanaInputEngine<D> {
    /// Process one event and notify the delegate.
    pub fn handle_event(&mut self, event: KeyEvent) {
        let _span = debug_span!("handle_event", ?event).entered();

        match event {
            KeyEvent::Char(ch) => self.handle_character_input(ch),
            KeyEvent::Backspace => self.backspace(),
            KeyEvent::Return => self.commit_composition(),
            KeyEvent::AcceptCandidate(text) => self.accept_candidate(&text),
        }
    }

    /// Handle every event `source` yields, in order, until it ends.
    ///
    /// A `std::sync::mpsc::Receiver` blocks between events, so a keyboard
    /// thread can feed an engine owned by another thread. Returns the number
    /// of events handled.
    pub fn run<I>(&mut self, source: I) -> usize
    where
        I: IntoIterator<Item = KeyEvent>,
    {
        let mut handled = 0;
        for event in source {
            self.handle_event(event);
            handled += 1;
        }
        debug!(handled, "input source ended");
        handled
    }

    /// Delete one pending character, or failing that one committed unit.
    ///
    /// Dropping a unit puts its romaji, minus the final keystroke, back into
    /// the buffer: "ka" then backspace leaves "k" pending. No-op when empty.
    pub fn backspace(&mut self) {
        let c = &mut self.composition;
        if c.pending.pop().is_none() {
            if let Some(unit) = c.pop_unit() {
                let mut romaji = unit.romaji;
                romaji.pop();
                c.pending = romaji;
            }
        }
        self.notify();
    }
}
