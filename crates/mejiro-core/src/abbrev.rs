//! Abbreviation lookup over kana-stroke fragments.
//!
//! Two tiers: an exact compound table keyed by the whole `"L-R"` kana
//! stroke, then independent left/right partial tables whose hits are
//! concatenated. A miss is not an error; the dispatcher simply tries the
//! next candidate rule.

/// Exact compound abbreviations.
const COMPOUND: &[(&str, &str)] = &[
    ("A-STIA", "あれ"),
    ("KAU-STIA", "これ"),
    ("SAU-STIA", "それ"),
    ("TNAU-STIA", "どれ"),
    ("TNA-STIA", "だれ"),
    ("A-TNA", "あれだけ"),
    ("KAU-TNA", "これだけ"),
    ("SAU-TNA", "それだけ"),
    ("TNAU-TNA", "どれだけ"),
    ("TNA-TNA", "だれだけ"),
    ("A-IU", "ああいう"),
    ("KAU-IU", "こういう"),
    ("SAU-IU", "そういう"),
    ("TNAU-IU", "どういう"),
    ("NA-IU", "なんていう"),
    ("TAU-IU", "という"),
    ("TAU-KAU", "ところ"),
    ("KAU-TAU", "こと"),
    ("TKI-TAU", "ひと"),
    ("TAU-KI", "とき"),
    ("SKNAU-NAU", "もの"),
    ("TKNIA-TIA", "すべて"),
    ("NA-KNA", "ながら"),
    ("AU-KA", "おかげ"),
    ("SI-KNAU", "しごと"),
];

/// Left-hand partials, combinable with any right-hand partial.
const LEFT: &[(&str, &str)] = &[
    ("STN", ""),
    ("IAU", "あの"),
    ("KIAU", "この"),
    ("SIAU", "その"),
    ("TIAU", "との"),
    ("TNIAU", "どの"),
    ("NIAU", "なんの"),
    ("IU", "いう"),
    ("YIU", "ああいう"),
    ("KIU", "こういう"),
    ("SIU", "そういう"),
    ("TIU", "という"),
    ("TNIU", "どういう"),
    ("NIU", "なんていう"),
];

/// Right-hand partials.
const RIGHT: &[(&str, &str)] = &[
    ("STN", ""),
    ("KAU", "こと"),
    ("STAU", "ころ"),
    ("KI", "とき"),
    ("TAU", "ところ"),
    ("TKI", "ひと"),
    ("TKA", "はなし"),
    ("TKIAU", "ほう"),
    ("SKNAU", "もの"),
    ("KNAU", "ものごと"),
    ("SI", "しごと"),
];

fn find(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Resolve a kana-stroke pair to abbreviation text, or `None` on miss.
pub fn resolve(left_kana_stroke: &str, right_kana_stroke: &str) -> Option<String> {
    let compound = format!("{left_kana_stroke}-{right_kana_stroke}");
    if let Some(text) = find(COMPOUND, &compound) {
        return Some(text.to_string());
    }
    match (find(LEFT, left_kana_stroke), find(RIGHT, right_kana_stroke)) {
        // Two silent partials combine to nothing; that is a miss, not an
        // empty abbreviation.
        (Some(l), Some(r)) if !(l.is_empty() && r.is_empty()) => Some(format!("{l}{r}")),
        _ => None,
    }
}

/// All stroke pairs producing `text`, for reverse lookup. Only literal
/// table entries are searched; synthesized kana is not inverted.
pub fn strokes_for(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut out: Vec<String> = COMPOUND
        .iter()
        .filter(|(_, v)| *v == text)
        .map(|(k, _)| k.to_string())
        .collect();
    for (lk, lv) in LEFT {
        for (rk, rv) in RIGHT {
            if format!("{lv}{rv}") == text {
                out.push(format!("{lk}-{rk}"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_hit() {
        assert_eq!(resolve("KAU", "TAU").unwrap(), "こと");
    }

    #[test]
    fn compound_beats_partials() {
        // SI-KNAU is a compound; KNAU alone is also a right partial.
        assert_eq!(resolve("SI", "KNAU").unwrap(), "しごと");
    }

    #[test]
    fn partial_combination() {
        assert_eq!(resolve("KIAU", "TKIAU").unwrap(), "このほう");
    }

    #[test]
    fn silent_partials_combine_to_counterpart() {
        assert_eq!(resolve("STN", "TKA").unwrap(), "はなし");
        assert_eq!(resolve("KIAU", "STN").unwrap(), "この");
    }

    #[test]
    fn one_sided_miss_is_none() {
        assert!(resolve("KIAU", "ZZZ").is_none());
        assert!(resolve("", "").is_none());
    }

    #[test]
    fn two_silent_partials_are_a_miss() {
        assert!(resolve("STN", "STN").is_none());
        assert!(strokes_for("").is_empty());
    }

    #[test]
    fn reverse_finds_compounds_and_combinations() {
        let strokes = strokes_for("こと");
        assert!(strokes.contains(&"KAU-TAU".to_string()));
        assert!(strokes.contains(&"STN-KAU".to_string()));
    }
}
