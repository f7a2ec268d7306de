//! Property-based tests over random well-formed strokes.
//!
//! Strokes are built group by group from a bitmask, so every generated
//! chord matches the positional grammar by construction.

use proptest::prelude::*;

use mejiro_core::stroke::{Stroke, PANIC_STROKE};

use super::session;
use crate::Rule;

fn build_stroke(bits: u32) -> String {
    const KEYS: &str = "STKNYIAUntk";
    let mut out = String::new();
    for (i, c) in KEYS.chars().enumerate() {
        if bits & (1 << i) != 0 {
            out.push(c);
        }
    }
    if bits & (1 << 11) != 0 {
        out.push('-');
    }
    if bits & (1 << 12) != 0 {
        out.push('#');
    }
    for (i, c) in KEYS.chars().enumerate() {
        if bits & (1 << (13 + i)) != 0 {
            out.push(c);
        }
    }
    if bits & (1 << 24) != 0 {
        out.push('*');
    }
    out
}

fn arb_stroke() -> impl Strategy<Value = String> {
    any::<u32>().prop_map(|bits| build_stroke(bits & 0x1ff_ffff))
}

proptest! {
    #[test]
    fn every_stroke_translates(strokes in prop::collection::vec(arb_stroke(), 1..40)) {
        let mut s = session();
        for raw in &strokes {
            let t = s.translate(raw).unwrap();
            let glue_prefix = t.text.starts_with("{^");
            let glue_suffix = t.text.ends_with("^}");
            prop_assert!(glue_prefix);
            prop_assert!(glue_suffix);
            prop_assert_eq!(t.text.len(), t.body.len() + 4);
        }
    }

    #[test]
    fn decomposition_reassembles(raw in arb_stroke()) {
        // The grammar is positional, so the groups concatenate back to
        // the raw chord.
        let s = Stroke::decompose(&raw);
        let mut rebuilt = format!("{}{}{}", s.left_conso, s.left_vowel, s.left_particle);
        if raw.contains('-') {
            rebuilt.push('-');
        }
        if s.doubled || raw.contains('#') {
            rebuilt.push('#');
        }
        rebuilt.push_str(&s.right_conso);
        rebuilt.push_str(&s.right_vowel);
        rebuilt.push_str(&s.right_particle);
        if s.asterisk {
            rebuilt.push('*');
        }
        prop_assert_eq!(rebuilt, raw);
    }

    #[test]
    fn carry_follows_last_vowel_group(strokes in prop::collection::vec(arb_stroke(), 1..30)) {
        let mut s = session();
        let mut expected = "A".to_string();
        for raw in &strokes {
            if raw == "n#" || raw == "#n" {
                continue;
            }
            let stroke = Stroke::decompose(raw);
            s.translate(raw).unwrap();
            if !stroke.right_vowel.is_empty() {
                expected = stroke.right_vowel.clone();
            } else if !stroke.left_vowel.is_empty() {
                expected = stroke.left_vowel.clone();
            }
            prop_assert_eq!(s.carry.last(), expected.as_str());
        }
    }

    #[test]
    fn typing_mode_round_trips(strokes in prop::collection::vec(arb_stroke(), 0..20)) {
        let mut s = session();
        s.translate("#n").unwrap();
        prop_assert!(s.typing_mode());
        for raw in &strokes {
            if raw != "n#" && raw != "#n" {
                s.translate(raw).unwrap();
                prop_assert!(s.typing_mode());
            }
        }
        s.translate("n#").unwrap();
        prop_assert!(!s.typing_mode());
    }

    #[test]
    fn panic_always_cancels(prefix in prop::collection::vec(arb_stroke(), 0..10)) {
        let mut s = session();
        for raw in &prefix {
            s.translate(raw).unwrap();
        }
        let t = s.translate(PANIC_STROKE).unwrap();
        prop_assert_eq!(t.rule, Rule::Cancel);
        prop_assert_eq!(t.text.as_str(), "{^^}");
    }
}
