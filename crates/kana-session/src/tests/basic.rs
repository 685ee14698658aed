use kana_core::settings::{KanaScript, PendingStyle, Settings};

use super::*;

// --- Basic romaji input ---

#[test]
fn test_romaji_input_ka() {
    let mut engine = make_engine();

    engine.handle_character_input('k');
    assert_eq!(engine.delegate().last(), ("", "k"));
    assert!(engine.is_composing());

    engine.handle_character_input('a');
    assert_eq!(engine.delegate().last(), ("か", "か"));
    assert_eq!(engine.text(), "か");
    assert!(!engine.is_composing());
}

#[test]
fn test_digraph_kya() {
    let mut engine = make_engine();

    type_string(&mut engine, "ky");
    assert_eq!(engine.text(), "");
    assert_eq!(engine.pending(), "ky");

    engine.handle_character_input('a');
    assert_eq!(engine.text(), "きゃ");
    assert_eq!(engine.pending(), "");
}

#[test]
fn test_sokuon_tta() {
    let mut engine = make_engine();

    type_string(&mut engine, "tt");
    assert_eq!(engine.delegate().last(), ("", "tt"));

    engine.handle_character_input('a');
    assert_eq!(engine.text(), "った");
}

#[test]
fn test_sokuon_mid_word() {
    let mut engine = make_engine();
    type_string(&mut engine, "kitte");
    assert_eq!(engine.text(), "きって");

    let mut engine = make_engine();
    type_string(&mut engine, "zasshi");
    assert_eq!(engine.text(), "ざっし");
}

#[test]
fn test_nasal_before_consonant() {
    let mut engine = make_engine();

    engine.handle_character_input('n');
    assert_eq!(engine.delegate().last(), ("", "n"));

    engine.handle_character_input('k');
    assert_eq!(engine.delegate().last(), ("ん", "んk"));
    assert_eq!(engine.pending(), "k");
}

#[test]
fn test_nasal_resolves_to_na() {
    let mut engine = make_engine();
    type_string(&mut engine, "na");
    assert_eq!(engine.text(), "な");
}

#[test]
fn test_nasal_spellings() {
    for romaji in ["nn", "n'"] {
        let mut engine = make_engine();
        type_string(&mut engine, romaji);
        assert_eq!(engine.text(), "ん", "{romaji}");
        assert_eq!(engine.pending(), "");
    }
}

#[test]
fn test_konnichiha() {
    let mut engine = make_engine();
    type_string(&mut engine, "konnnichiha");
    assert_eq!(engine.text(), "こんにちは");
}

#[test]
fn test_sentence_with_punctuation() {
    let mut engine = make_engine();
    type_string(&mut engine, "kyouhaiitenkidesune.");
    assert_eq!(engine.text(), "きょうはいいてんきですね。");
    assert_eq!(engine.display(), engine.text());
}

#[test]
fn test_trailing_n_stays_pending() {
    let mut engine = make_engine();
    type_string(&mut engine, "shinbun");
    assert_eq!(engine.text(), "しんぶ");
    assert_eq!(engine.delegate().last(), ("しんぶ", "しんぶn"));
}

#[test]
fn test_passthrough() {
    let mut engine = make_engine();
    type_string(&mut engine, "1 あ");
    assert_eq!(engine.text(), "1 あ");

    // "kx" can never become a rule: "k" passes through, "x" waits for "xa" etc.
    let mut engine = make_engine();
    type_string(&mut engine, "kx");
    assert_eq!(engine.text(), "k");
    assert_eq!(engine.pending(), "x");
}

#[test]
fn test_uppercase_folded() {
    let mut engine = make_engine();
    type_string(&mut engine, "KyO");
    assert_eq!(engine.text(), "きょ");
}

#[test]
fn test_uppercase_passthrough_when_not_folded() {
    let mut settings = Settings::default();
    settings.input.fold_uppercase = false;
    let mut engine = make_engine_with(settings);
    type_string(&mut engine, "KA");
    assert_eq!(engine.text(), "KA");
}

#[test]
fn test_katakana_script() {
    let mut settings = Settings::default();
    settings.input.script = KanaScript::Katakana;
    let mut engine = make_engine_with(settings);

    type_string(&mut engine, "ra-men");
    assert_eq!(engine.delegate().last(), ("ラーメ", "ラーメn"));
    engine.commit_composition();
    assert_eq!(engine.text(), "ラーメン");
}

#[test]
fn test_kana_pending_preview() {
    let mut settings = Settings::default();
    settings.display.pending = PendingStyle::Kana;
    let mut engine = make_engine_with(settings);

    type_string(&mut engine, "kan");
    assert_eq!(engine.delegate().last(), ("か", "かん"));
    assert_eq!(engine.pending(), "n");

    let mut settings = Settings::default();
    settings.display.pending = PendingStyle::Kana;
    let mut engine = make_engine_with(settings);
    type_string(&mut engine, "kitt");
    assert_eq!(engine.delegate().last(), ("き", "きっt"));
}

#[test]
fn test_one_notification_per_event() {
    let mut engine = make_engine();
    type_string(&mut engine, "kyouha");
    engine.backspace();
    engine.commit_composition();
    assert_eq!(engine.delegate().calls.len(), 8);
    assert_eq!(engine.delegate().last().0, engine.text());
}

#[test]
fn test_display_is_text_plus_pending() {
    let mut engine = make_engine();
    for ch in "shakkinnnoxtsuzh".chars() {
        engine.handle_character_input(ch);
        let (processed, display) = engine.delegate().last();
        assert_eq!(display, format!("{}{}", processed, engine.pending()));
    }
}
