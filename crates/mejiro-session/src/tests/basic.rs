use mejiro_core::stroke::PANIC_STROKE;

use super::{body, session};
use crate::Rule;

#[test]
fn literal_two_hand_stroke() {
    let mut s = session();
    let t = s.translate("KA-TA").unwrap();
    assert_eq!(t.body, "かた");
    assert_eq!(t.text, "{^かた^}");
    assert_eq!(t.rule, Rule::Literal);
}

#[test]
fn hash_marker_doubles_literal_output() {
    let mut s = session();
    assert_eq!(body(&mut s, "SA#SA"), "ささささ");
}

#[test]
fn vowel_carries_across_strokes() {
    let mut s = session();
    assert_eq!(body(&mut s, "KI-"), "き");
    // Empty vowel group reuses the I from the previous stroke.
    assert_eq!(body(&mut s, "S-"), "し");
    assert_eq!(body(&mut s, "SAU-"), "そ");
    assert_eq!(body(&mut s, "T-"), "と");
}

#[test]
fn right_vowel_wins_the_carry() {
    let mut s = session();
    body(&mut s, "KI-TAU");
    assert_eq!(body(&mut s, "S-"), "そ");
}

#[test]
fn empty_stroke_is_empty_literal() {
    let mut s = session();
    let t = s.translate("-").unwrap();
    assert_eq!(t.text, "{^^}");
    assert_eq!(t.rule, Rule::Literal);
}

#[test]
fn user_dictionary_needs_asterisk() {
    let mut s = session();
    let t = s.translate("SU-TKAU*").unwrap();
    assert_eq!(t.body, "すまほ");
    assert_eq!(t.rule, Rule::UserDict);

    // Without the modifier the same chord is literal kana.
    let t = s.translate("SU-TKAU").unwrap();
    assert_eq!(t.rule, Rule::Literal);
}

#[test]
fn panic_stroke_cancels_output() {
    let mut s = session();
    let t = s.translate(PANIC_STROKE).unwrap();
    assert_eq!(t.text, "{^^}");
    assert_eq!(t.rule, Rule::Cancel);
}

#[test]
fn mode_toggles_emit_nothing() {
    let mut s = session();
    assert!(!s.typing_mode());

    let t = s.translate("#n").unwrap();
    assert_eq!(t.rule, Rule::ModeToggle);
    assert_eq!(t.text, "{^^}");
    assert!(s.typing_mode());

    let t = s.translate("n#").unwrap();
    assert_eq!(t.rule, Rule::ModeToggle);
    assert!(!s.typing_mode());
}

#[test]
fn mode_toggle_is_idempotent() {
    let mut s = session();
    s.translate("#n").unwrap();
    s.translate("#n").unwrap();
    assert!(s.typing_mode());
    s.translate("n#").unwrap();
    s.translate("n#").unwrap();
    assert!(!s.typing_mode());
}

#[test]
fn reverse_lookup_finds_literal_entries_only() {
    let s = session();
    assert_eq!(s.reverse_lookup("すまほ"), vec!["SU-TKAU".to_string()]);

    let strokes = s.reverse_lookup("しごと");
    assert!(strokes.contains(&"SI-KNAUt".to_string()));
    assert!(strokes.contains(&"SI-KNAU".to_string()));
    assert!(strokes.contains(&"STN-SI".to_string()));

    // Synthesized kana is not inverted.
    assert!(s.reverse_lookup("かた").is_empty());
}
