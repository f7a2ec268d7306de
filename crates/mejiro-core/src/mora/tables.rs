//! Phonology tables: stroke-to-romaji codes, the kana grid, diphthongs,
//! and literal exception kana.
//!
//! The consonant and vowel lists are priority-ordered sequences, not maps:
//! the first structural match wins, and for vowels the position doubles as
//! the column index into the kana grid.

/// Consonant stroke → romaji row symbol.
pub const CONSONANTS: &[(&str, &str)] = &[
    ("", ""),
    ("S", "s"),
    ("T", "t"),
    ("K", "k"),
    ("N", "n"),
    ("ST", "r"),
    ("SK", "w"),
    ("TK", "h"),
    ("SN", "z"),
    ("TN", "d"),
    ("KN", "g"),
    ("TKN", "b"),
    ("STK", "p"),
    ("STN", "l"),
    ("SKN", "m"),
    ("STKN", "f"),
];

/// Vowel stroke → romaji column symbol; list position = grid column.
pub const VOWELS: &[(&str, &str)] = &[
    ("A", "a"),
    ("I", "i"),
    ("U", "u"),
    ("IA", "e"),
    ("AU", "o"),
    ("YA", "ya"),
    ("YU", "yu"),
    ("YAU", "yo"),
];

/// Kana grid row for a romaji row symbol, columns a/i/u/e/o/ya/yu/yo.
pub fn kana_row(roma: &str) -> Option<&'static [&'static str; 8]> {
    let row: &[&str; 8] = match roma {
        "" => &["あ", "い", "う", "え", "お", "や", "ゆ", "よ"],
        "k" => &["か", "き", "く", "け", "こ", "きゃ", "きゅ", "きょ"],
        "s" => &["さ", "し", "す", "せ", "そ", "しゃ", "しゅ", "しょ"],
        "t" => &["た", "ち", "つ", "て", "と", "ちゃ", "ちゅ", "ちょ"],
        "n" => &["な", "に", "ぬ", "ね", "の", "にゃ", "にゅ", "にょ"],
        "h" => &["は", "ひ", "ふ", "へ", "ほ", "ひゃ", "ひゅ", "ひょ"],
        "m" => &["ま", "み", "む", "め", "も", "みゃ", "みゅ", "みょ"],
        "r" => &["ら", "り", "る", "れ", "ろ", "りゃ", "りゅ", "りょ"],
        "w" => &["わ", "うぃ", "ゔ", "うぇ", "うぉ", "わ", "ゔゅ", "を"],
        "g" => &["が", "ぎ", "ぐ", "げ", "ご", "ぎゃ", "ぎゅ", "ぎょ"],
        "z" => &["ざ", "じ", "ず", "ぜ", "ぞ", "じゃ", "じゅ", "じょ"],
        "d" => &["だ", "ぢ", "づ", "で", "ど", "ぢゃ", "ぢゅ", "ぢょ"],
        "b" => &["ば", "び", "ぶ", "べ", "ぼ", "びゃ", "びゅ", "びょ"],
        "p" => &["ぱ", "ぴ", "ぷ", "ぺ", "ぽ", "ぴゃ", "ぴゅ", "ぴょ"],
        "f" => &["ふぁ", "ふぃ", "ふゅ", "ふぇ", "ふぉ", "ふゃ", "ふゅ", "ふょ"],
        "l" => &["ぁ", "ぃ", "ぅ", "ぇ", "ぉ", "ゃ", "ゅ", "ょ"],
        _ => return None,
    };
    Some(row)
}

/// Diphthong vowel strokes: (stroke, first-vowel column symbol, long mark).
pub const DIPHTHONGS: &[(&str, &str, &str)] = &[
    ("Y", "a", "い"),
    ("YI", "yo", "う"),
    ("YIA", "e", "い"),
    ("YIU", "yu", "う"),
    ("YIAU", "u", "う"),
    ("IU", "u", "い"),
    ("IAU", "o", "う"),
];

/// Loanword diphthongs keyed by vowel+particle composite. Firing one of
/// these suppresses the particle extra sound and palatalizes ち/ぢ.
pub const COMPLEX_DIPHTHONGS: &[(&str, &str, &str)] = &[
    ("IAUn", "a", "うん"),
    ("YIn", "i", "んぐ"),
    ("YIUn", "ya", "る"),
    ("YIAUn", "a", "る"),
    ("IAUtk", "a", "う"),
    ("YItk", "i", "ずむ"),
    ("YIUtk", "i", "すと"),
    ("Ytk", "a", "いざ－"),
    ("YIAtk", "e", "んす"),
    ("YIAUtk", "u", "る"),
    ("IAUntk", "a", "ぶる"),
    ("YIntk", "i", "かる"),
    ("YIUntk", "i", "てぃ－"),
    ("YIAUntk", "o", "じ－"),
];

/// Literal kana overrides keyed by conso+vowel stroke, bypassing the grid.
pub const EXCEPTION_KANA: &[(&str, &str)] = &[
    ("TNYI", "どぅ"),
    ("TNYIU", "とぅ"),
    ("TNYA", "てぃ"),
    ("TNYAU", "でぃ"),
    ("TNYU", "でゅ"),
    ("TNIU", "ちぇ"),
    ("TNYIAU", "てゅ"),
    ("SKYI", "ゐ"),
    ("SKYIU", "ゑ"),
    ("SKYA", "いぇ"),
    ("SKYAU", "を"),
    ("SKYU", "ゔゅ"),
    ("SKIU", "ゆい"),
    ("SKIAU", "ゎ"),
    ("SKYIAU", "うぁ"),
    ("STKNYI", "ゔぉ"),
    ("STKNYIU", "ゔぇ"),
    ("STKNYA", "しぇ"),
    ("STKNYAU", "じぇ"),
    ("STKNYU", "ゔぃ"),
    ("STKNIU", "ゔぁ"),
    ("STNIU", "つぃ"),
    ("STNIAU", "つぉ"),
    ("STNYIAU", "てゃ"),
    ("STNY", "つぁ"),
    ("STNYIA", "つぇ"),
];

pub fn consonant_roma(stroke: &str) -> Option<&'static str> {
    CONSONANTS.iter().find(|(s, _)| *s == stroke).map(|(_, r)| *r)
}

/// Column index of a romaji vowel symbol.
pub fn vowel_column(roma: &str) -> Option<usize> {
    VOWELS.iter().position(|(_, r)| *r == roma)
}

/// Column index and romaji symbol of a plain vowel stroke.
pub fn plain_vowel(stroke: &str) -> Option<(usize, &'static str)> {
    VOWELS
        .iter()
        .enumerate()
        .find(|(_, (s, _))| *s == stroke)
        .map(|(i, (_, r))| (i, *r))
}

pub fn diphthong(stroke: &str) -> Option<(&'static str, &'static str)> {
    DIPHTHONGS
        .iter()
        .find(|(s, _, _)| *s == stroke)
        .map(|(_, v, m)| (*v, *m))
}

pub fn complex_diphthong(vowel_particle: &str) -> Option<(&'static str, &'static str)> {
    COMPLEX_DIPHTHONGS
        .iter()
        .find(|(s, _, _)| *s == vowel_particle)
        .map(|(_, v, m)| (*v, *m))
}

pub fn exception_kana(conso_vowel: &str) -> Option<&'static str> {
    EXCEPTION_KANA
        .iter()
        .find(|(s, _)| *s == conso_vowel)
        .map(|(_, k)| *k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_consonant_code_has_a_grid_row() {
        for (stroke, roma) in CONSONANTS {
            assert!(
                kana_row(roma).is_some(),
                "no grid row for {stroke:?} → {roma:?}"
            );
        }
    }

    #[test]
    fn every_stkn_subset_is_a_consonant_code() {
        // All 16 order-preserving subsets of STKN must resolve, so that
        // decomposed strokes can never fail consonant lookup.
        for bits in 0u8..16 {
            let mut code = String::new();
            for (i, c) in "STKN".chars().enumerate() {
                if bits & (1 << i) != 0 {
                    code.push(c);
                }
            }
            assert!(consonant_roma(&code).is_some(), "missing code {code:?}");
        }
    }

    #[test]
    fn every_yiau_subset_is_plain_or_diphthong() {
        for bits in 1u8..16 {
            let mut code = String::new();
            for (i, c) in "YIAU".chars().enumerate() {
                if bits & (1 << i) != 0 {
                    code.push(c);
                }
            }
            assert!(
                plain_vowel(&code).is_some() || diphthong(&code).is_some(),
                "missing vowel code {code:?}"
            );
        }
    }

    #[test]
    fn diphthong_first_vowels_have_columns() {
        for (_, v, _) in DIPHTHONGS {
            assert!(vowel_column(v).is_some());
        }
        for (_, v, _) in COMPLEX_DIPHTHONGS {
            assert!(vowel_column(v).is_some());
        }
    }
}
