//! Typing-mode rendering: kana output rewritten into the keystrokes of a
//! host typing layout.
//!
//! The transliterator is stateful across calls for one reason only: a
//! trailing sokuon cannot be rendered until the next syllable's consonant
//! is known, so it is held back and prepended to the next call's input.

pub mod table;

/// Host typing layout for typing mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypingLayout {
    #[default]
    Romaji,
    JisKana,
}

#[derive(Debug, Clone, Default)]
pub struct Transliterator {
    pending_sokuon: bool,
}

impl Transliterator {
    /// Render one translation's kana into layout keystrokes. Characters
    /// outside the tables pass through unchanged.
    pub fn transliterate(&mut self, kana: &str, layout: TypingLayout) -> String {
        let mut working = String::new();
        if self.pending_sokuon {
            working.push('っ');
        }
        self.pending_sokuon = false;
        working.push_str(kana);

        if let Some(rest) = working.strip_suffix('っ') {
            self.pending_sokuon = true;
            working = rest.to_string();
            if working.is_empty() {
                return String::new();
            }
        }

        match layout {
            TypingLayout::Romaji => romaji(&working),
            TypingLayout::JisKana => jis(&working),
        }
    }

    /// Drop any held-back sokuon.
    pub fn reset(&mut self) {
        self.pending_sokuon = false;
    }

    pub fn has_pending_sokuon(&self) -> bool {
        self.pending_sokuon
    }
}

fn romaji(kana: &str) -> String {
    let chars: Vec<char> = kana.chars().collect();
    let mut raw = String::new();
    let mut i = 0;
    while i < chars.len() {
        // Digraph clusters first.
        if i + 1 < chars.len() {
            let cluster: String = chars[i..i + 2].iter().collect();
            if let Some(roma) = table::roma_digraph(&cluster) {
                raw.push_str(roma);
                i += 2;
                continue;
            }
        }
        match table::roma_single(chars[i]) {
            Some(roma) => raw.push_str(roma),
            None => raw.push(chars[i]),
        }
        i += 1;
    }
    euphonic(&raw)
}

const GEMINATE_NEXT: &str = "bcdfghjklmnpqrstvwxyz";
const NASAL_NEXT: &str = "bcdfghjklmpqrstvwxzQ";

/// Rewrite the `N`/`Q` intermediates: a sokuon doubles the following
/// consonant, the nasal becomes `n` before a consonant and `nn` elsewhere,
/// and leftovers at word end fall back to literal spellings.
fn euphonic(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();

    let mut doubled = String::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == 'Q' && i + 1 < chars.len() && GEMINATE_NEXT.contains(chars[i + 1]) {
            doubled.push(chars[i + 1]);
            doubled.push(chars[i + 1]);
            i += 2;
        } else {
            doubled.push(chars[i]);
            i += 1;
        }
    }

    let chars: Vec<char> = doubled.chars().collect();
    let mut out = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if c == 'N' && i + 1 < chars.len() && NASAL_NEXT.contains(chars[i + 1]) {
            out.push('n');
        } else {
            out.push(c);
        }
    }

    out.replace('N', "nn").replace('Q', "ltsu")
}

fn jis(kana: &str) -> String {
    let mut out = String::new();
    for c in kana.chars() {
        match table::jis_kana(c) {
            Some(keys) => out.push_str(keys),
            None => out.push(c),
        }
    }
    out
}
