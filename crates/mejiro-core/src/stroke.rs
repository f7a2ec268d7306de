//! Stroke decomposition.
//!
//! A raw chord string is split into eight positional fields by a fixed
//! grammar: left consonant (`S T K N`), left vowel (`Y I A U`), left
//! particle (`n t k`), divider/duplication marker (`-` `#`), then the same
//! three groups for the right hand, then the `*` modifier. Every group is
//! an optional order-preserving subset of its letter set, so decomposition
//! never fails; unknown trailing characters are ignored.

/// Pressing every key at once cancels the stroke: the dispatcher forces
/// empty output no matter what the fields would otherwise produce.
pub const PANIC_STROKE: &str = "STKNYIAUntk#STKNYIAUntk*";

/// Reserved stroke: switch typing-mode rendering off.
pub const TYPING_MODE_OFF: &str = "n#";
/// Reserved stroke: switch typing-mode rendering on.
pub const TYPING_MODE_ON: &str = "#n";

const CONSONANT_KEYS: &[char] = &['S', 'T', 'K', 'N'];
const VOWEL_KEYS: &[char] = &['Y', 'I', 'A', 'U'];
const PARTICLE_KEYS: &[char] = &['n', 't', 'k'];

/// One decomposed chord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stroke {
    pub raw: String,
    pub left_conso: String,
    pub left_vowel: String,
    pub left_particle: String,
    pub right_conso: String,
    pub right_vowel: String,
    pub right_particle: String,
    /// True when the marker group is exactly `#`: the literal output is
    /// emitted twice.
    pub doubled: bool,
    /// True when the trailing `*` modifier was pressed.
    pub asterisk: bool,
}

/// Consume a prefix of `chars` that is an order-preserving subset of
/// `keys`, at most one of each.
fn take_group(chars: &[char], pos: &mut usize, keys: &[char]) -> String {
    let mut out = String::new();
    let mut next_key = 0;
    while *pos < chars.len() && next_key < keys.len() {
        match keys[next_key..].iter().position(|&k| k == chars[*pos]) {
            Some(offset) => {
                out.push(chars[*pos]);
                *pos += 1;
                next_key += offset + 1;
            }
            None => break,
        }
    }
    out
}

impl Stroke {
    /// Decompose a raw chord string. Total: all groups are optional.
    pub fn decompose(raw: &str) -> Stroke {
        let chars: Vec<char> = raw.chars().collect();
        let mut pos = 0;

        let left_conso = take_group(&chars, &mut pos, CONSONANT_KEYS);
        let left_vowel = take_group(&chars, &mut pos, VOWEL_KEYS);
        let left_particle = take_group(&chars, &mut pos, PARTICLE_KEYS);

        let mut marker = String::new();
        if pos < chars.len() && chars[pos] == '-' {
            marker.push('-');
            pos += 1;
        }
        if pos < chars.len() && chars[pos] == '#' {
            marker.push('#');
            pos += 1;
        }

        let right_conso = take_group(&chars, &mut pos, CONSONANT_KEYS);
        let right_vowel = take_group(&chars, &mut pos, VOWEL_KEYS);
        let right_particle = take_group(&chars, &mut pos, PARTICLE_KEYS);
        let asterisk = pos < chars.len() && chars[pos] == '*';

        Stroke {
            raw: raw.to_string(),
            left_conso,
            left_vowel,
            left_particle,
            right_conso,
            right_vowel,
            right_particle,
            doubled: marker == "#",
            asterisk,
        }
    }

    /// Left conso+vowel, without the particle group.
    pub fn left_kana_stroke(&self) -> String {
        format!("{}{}", self.left_conso, self.left_vowel)
    }

    /// Right conso+vowel, without the particle group.
    pub fn right_kana_stroke(&self) -> String {
        format!("{}{}", self.right_conso, self.right_vowel)
    }

    /// `"L-R"` over the kana groups only, the key format of the
    /// abbreviation and verb dictionaries.
    pub fn kana_stroke(&self) -> String {
        format!("{}-{}", self.left_kana_stroke(), self.right_kana_stroke())
    }

    /// `"L-R"` including particles (but not `#`/`*`), the key format of
    /// the user dictionary.
    pub fn main_stroke(&self) -> String {
        format!(
            "{}{}{}-{}{}{}",
            self.left_conso,
            self.left_vowel,
            self.left_particle,
            self.right_conso,
            self.right_vowel,
            self.right_particle
        )
    }

    /// `"left-right"` over the particle groups, the key format of the
    /// particle-phrase override table.
    pub fn particle_stroke(&self) -> String {
        format!("{}-{}", self.left_particle, self.right_particle)
    }

    /// All left-hand groups empty.
    pub fn left_is_empty(&self) -> bool {
        self.left_conso.is_empty() && self.left_vowel.is_empty() && self.left_particle.is_empty()
    }

    pub fn is_panic(&self) -> bool {
        self.raw == PANIC_STROKE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_stroke() {
        let s = Stroke::decompose("KAn-TAntk*");
        assert_eq!(s.left_conso, "K");
        assert_eq!(s.left_vowel, "A");
        assert_eq!(s.left_particle, "n");
        assert_eq!(s.right_conso, "T");
        assert_eq!(s.right_vowel, "A");
        assert_eq!(s.right_particle, "ntk");
        assert!(s.asterisk);
        assert!(!s.doubled);
    }

    #[test]
    fn left_only() {
        let s = Stroke::decompose("STKNYIAU");
        assert_eq!(s.left_conso, "STKN");
        assert_eq!(s.left_vowel, "YIAU");
        assert!(s.right_conso.is_empty());
        assert!(!s.asterisk);
    }

    #[test]
    fn hyphen_splits_hands() {
        let s = Stroke::decompose("-TA");
        assert!(s.left_is_empty());
        assert_eq!(s.right_conso, "T");
        assert_eq!(s.right_vowel, "A");
    }

    #[test]
    fn hash_marker_sets_doubled() {
        let s = Stroke::decompose("TA#TA");
        assert!(s.doubled);
        assert_eq!(s.left_kana_stroke(), "TA");
        assert_eq!(s.right_kana_stroke(), "TA");
    }

    #[test]
    fn hyphen_hash_is_not_doubled() {
        // Only the bare `#` marker doubles; `-#` is a plain divider.
        let s = Stroke::decompose("TA-#TA");
        assert!(!s.doubled);
    }

    #[test]
    fn ambiguous_n_goes_to_consonant_first() {
        // Capital N is a consonant key, lowercase n a particle key.
        let s = Stroke::decompose("Nn-");
        assert_eq!(s.left_conso, "N");
        assert_eq!(s.left_particle, "n");
    }

    #[test]
    fn empty_stroke() {
        let s = Stroke::decompose("");
        assert!(s.left_is_empty());
        assert_eq!(s.kana_stroke(), "-");
        assert_eq!(s.main_stroke(), "-");
    }

    #[test]
    fn panic_stroke_decomposes_and_flags() {
        let s = Stroke::decompose(PANIC_STROKE);
        assert!(s.is_panic());
        assert_eq!(s.left_conso, "STKN");
        assert_eq!(s.left_vowel, "YIAU");
        assert_eq!(s.left_particle, "ntk");
        assert_eq!(s.right_particle, "ntk");
        assert!(s.asterisk);
        assert!(s.doubled);
    }

    #[test]
    fn mode_toggle_strokes_decompose() {
        let off = Stroke::decompose(TYPING_MODE_OFF);
        assert_eq!(off.left_particle, "n");
        assert!(off.doubled);

        let on = Stroke::decompose(TYPING_MODE_ON);
        assert!(on.left_particle.is_empty());
        assert_eq!(on.right_particle, "n");
    }

    #[test]
    fn group_order_is_enforced() {
        // "AY" cannot match the left vowel group beyond "A": Y precedes A
        // in the key order, so it starts the right-hand vowel group.
        let s = Stroke::decompose("AY");
        assert_eq!(s.left_vowel, "A");
        assert!(s.right_conso.is_empty());
        assert_eq!(s.right_vowel, "Y");
    }
}
