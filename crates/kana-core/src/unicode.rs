//! Character-level Unicode classification for Japanese text.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes ー (U+30FC).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Hiragana letters that have a katakana counterpart 0x60 code points above.
/// The iteration marks ゝゞ and the digraph ゟ sit outside that range.
fn has_katakana_pair(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c)
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, punctuation) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if has_katakana_pair(c) {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hiragana_to_katakana() {
        assert_eq!(hiragana_to_katakana("きょうは"), "キョウハ");
        assert_eq!(hiragana_to_katakana("らーめん"), "ラーメン");
        assert_eq!(hiragana_to_katakana("った"), "ッタ");
        assert_eq!(hiragana_to_katakana("ゔぁ"), "ヴァ");
        assert_eq!(hiragana_to_katakana(""), "");
        assert_eq!(hiragana_to_katakana("abc。"), "abc。");
        assert_eq!(hiragana_to_katakana("カタカナ"), "カタカナ");
    }

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ア'));
        assert!(is_katakana('ー'));
        assert!(!is_katakana('あ'));
        assert!(is_latin('a'));
        assert!(!is_latin('あ'));
    }
}
