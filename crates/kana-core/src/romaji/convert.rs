use tracing::trace;

use super::trie::{RomajiTrie, TrieLookupResult};

const SOKUON: &str = "っ";
const HATSUON: &str = "ん";

/// One resolution: the text to commit and the romaji keystrokes it consumed.
///
/// Passthrough units carry the same character in both fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanaUnit {
    pub kana: String,
    pub romaji: String,
}

impl KanaUnit {
    fn new(kana: impl Into<String>, romaji: impl Into<String>) -> Self {
        Self {
            kana: kana.into(),
            romaji: romaji.into(),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RomajiConvertResult {
    pub units: Vec<KanaUnit>,
    pub pending_romaji: String,
}

impl RomajiConvertResult {
    /// Concatenated kana of all resolved units.
    pub fn composed_kana(&self) -> String {
        self.units.iter().map(|u| u.kana.as_str()).collect()
    }
}

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// A letter whose doubling marks a geminate: any lowercase ASCII consonant but `n`.
fn is_sokuon_consonant(ch: char) -> bool {
    ch.is_ascii_lowercase() && !is_vowel(ch) && ch != 'n'
}

fn starts_with_double_consonant(s: &str) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(a), Some(b)) if a == b && is_sokuon_consonant(a))
}

/// Table lookup extended with sokuon: when the table has nothing for `s` and it
/// starts with a doubled consonant, `s` behaves like っ + lookup(s[1..]).
/// Only one level deep, so "ttt" is not a prefix of anything.
fn lookup(trie: &RomajiTrie, s: &str) -> TrieLookupResult {
    match trie.lookup(s) {
        TrieLookupResult::None if starts_with_double_consonant(s) => match trie.lookup(&s[1..]) {
            TrieLookupResult::Exact(kana) => TrieLookupResult::Exact(format!("{SOKUON}{kana}")),
            TrieLookupResult::ExactAndPrefix(kana) => {
                TrieLookupResult::ExactAndPrefix(format!("{SOKUON}{kana}"))
            }
            other => other,
        },
        other => other,
    }
}

/// Resolve as much of `pending_romaji` as the table allows.
///
/// Without `force`, sequences that can still grow into a longer rule stay
/// pending (e.g. "ky", "tt", a lone "n"). With `force` the buffer is always
/// drained: deferred matches commit, "n" becomes ん, and leftovers pass through
/// verbatim.
pub fn convert_romaji(trie: &RomajiTrie, pending_romaji: &str, force: bool) -> RomajiConvertResult {
    let mut units = Vec::new();
    let mut pending = pending_romaji.to_string();

    while !pending.is_empty() {
        let progressed = match lookup(trie, &pending) {
            TrieLookupResult::Exact(kana) => {
                units.push(KanaUnit::new(kana, std::mem::take(&mut pending)));
                true
            }
            TrieLookupResult::ExactAndPrefix(kana) => {
                if force {
                    units.push(KanaUnit::new(kana, std::mem::take(&mut pending)));
                }
                force
            }
            TrieLookupResult::Prefix => {
                force && resolve_dead_end(trie, &mut units, &mut pending, force)
            }
            TrieLookupResult::None => resolve_dead_end(trie, &mut units, &mut pending, force),
        };
        if !progressed {
            break;
        }
    }

    trace!(input = pending_romaji, force, resolved = units.len(), pending = %pending, "convert_romaji");
    RomajiConvertResult {
        units,
        pending_romaji: pending,
    }
}

/// `pending` cannot grow into a rule (or must be drained): peel one unit off
/// its head. Always makes progress.
fn resolve_dead_end(
    trie: &RomajiTrie,
    units: &mut Vec<KanaUnit>,
    pending: &mut String,
    force: bool,
) -> bool {
    let mut chars = pending.chars();
    let first = chars.next().unwrap_or_default();
    let second = chars.next();

    // Hatsuon: "n" is only ん once nothing that could make na/nya/nn follows.
    if first == 'n' {
        let nasal = match second {
            Some(c) => force || !(is_vowel(c) || c == 'y' || c == 'n'),
            None => force,
        };
        if nasal {
            units.push(KanaUnit::new(HATSUON, "n"));
            pending.remove(0);
            return true;
        }
    }

    // Longest complete rule at the head of the buffer.
    let boundaries: Vec<usize> = pending.char_indices().map(|(i, _)| i).skip(1).collect();
    for &len in boundaries.iter().rev() {
        let head = &pending[..len];
        if let TrieLookupResult::Exact(kana) | TrieLookupResult::ExactAndPrefix(kana) =
            lookup(trie, head)
        {
            units.push(KanaUnit::new(kana, head));
            pending.drain(..len);
            return true;
        }
    }

    // Sokuon whose tail went nowhere ("ttx"): keep the っ, retry from the second letter.
    if second == Some(first) && is_sokuon_consonant(first) {
        units.push(KanaUnit::new(SOKUON, first.to_string()));
        pending.remove(0);
        return true;
    }

    let passthrough = pending.remove(0);
    units.push(KanaUnit::new(passthrough.to_string(), passthrough.to_string()));
    true
}
