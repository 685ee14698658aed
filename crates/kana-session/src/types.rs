/// A single event from the keyboard surface, delivered in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// A typed character: romaji letters, punctuation, digits, anything else.
    Char(char),
    Backspace,
    /// Return key: resolve whatever is pending.
    Return,
    /// The host accepted a candidate string; it is committed as one unit.
    AcceptCandidate(String),
}

impl From<char> for KeyEvent {
    fn from(ch: char) -> Self {
        KeyEvent::Char(ch)
    }
}

/// One `KeyEvent::Char` per character of `s`.
pub fn keystrokes(s: &str) -> impl Iterator<Item = KeyEvent> + '_ {
    s.chars().map(KeyEvent::Char)
}

/// The single listener of a [`KanaInputEngine`](crate::KanaInputEngine).
///
/// Called synchronously after every handled event with the full current
/// snapshot, never with a diff.
pub trait EngineDelegate {
    fn on_processed(&mut self, processed: &str, display: &str);
}

impl<F> EngineDelegate for F
where
    F: FnMut(&str, &str),
{
    fn on_processed(&mut self, processed: &str, display: &str) {
        self(processed, display)
    }
}

/// A committed resolution and the romaji that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CommittedUnit {
    /// Byte length of this unit's text at the tail of `Composition::committed`.
    pub(crate) len: usize,
    pub(crate) romaji: String,
}

#[derive(Debug, Default)]
pub(crate) struct Composition {
    pub(crate) pending: String,
    pub(crate) committed: String,
    pub(crate) units: Vec<CommittedUnit>,
}

impl Composition {
    pub(crate) fn push_unit(&mut self, text: &str, romaji: String) {
        if text.is_empty() {
            return;
        }
        self.committed.push_str(text);
        self.units.push(CommittedUnit {
            len: text.len(),
            romaji,
        });
    }

    /// Remove the last committed unit and its text.
    pub(crate) fn pop_unit(&mut self) -> Option<CommittedUnit> {
        let unit = self.units.pop()?;
        let new_len = self.committed.len() - unit.len;
        self.committed.truncate(new_len);
        Some(unit)
    }
}
