//! Particle (joshi) resolution.
//!
//! Each thumb-cluster code owns one record: the word fragment it produces
//! on the left hand, the fragment on the right hand, and the extra sound
//! appended after a syllable. A handful of whole particle-pair strokes
//! bypass assembly entirely via [`phrase_override`].

use crate::error::LookupError;

pub const COMMA: &str = "、";

/// One thumb-cluster particle code and everything it can contribute.
#[derive(Debug, Clone, Copy)]
pub struct ParticleEntry {
    pub code: &'static str,
    /// Fragment when the code appears on the left hand of a particle pair.
    pub left: &'static str,
    /// Fragment when the code appears on the right hand.
    pub right: &'static str,
    /// Trailing mora appended after a synthesized syllable.
    pub extra_sound: &'static str,
}

pub const PARTICLES: &[ParticleEntry] = &[
    ParticleEntry { code: "", left: "", right: "", extra_sound: "" },
    ParticleEntry { code: "n", left: "、", right: "、", extra_sound: "ん" },
    ParticleEntry { code: "t", left: "に", right: "は", extra_sound: "つ" },
    ParticleEntry { code: "k", left: "の", right: "が", extra_sound: "く" },
    ParticleEntry { code: "tk", left: "で", right: "も", extra_sound: "っ" },
    ParticleEntry { code: "nt", left: "と", right: "は、", extra_sound: "ち" },
    ParticleEntry { code: "nk", left: "を", right: "が、", extra_sound: "き" },
    ParticleEntry { code: "ntk", left: "へ", right: "も、", extra_sound: "ー" },
];

/// Literal overrides for whole particle-pair strokes. These carry host key
/// tokens (space, return, …) rather than particle text; the abbreviation
/// branch of the dispatcher rewrites them into sentence-final copula forms.
const PHRASE_OVERRIDES: &[(&str, &str)] = &[
    ("n-", "}{#Space}{"),
    ("-n", "}{#Return}{"),
    ("n-n", "}{#Tab}{"),
    ("-ntk", "}{#F7}{"),
    ("n-ntk", "}{#F8}{"),
];

pub fn entry(code: &str) -> Result<&'static ParticleEntry, LookupError> {
    PARTICLES
        .iter()
        .find(|e| e.code == code)
        .ok_or_else(|| LookupError::UnknownParticle(code.to_string()))
}

/// Extra sound for a particle code (empty for the empty code).
pub fn extra_sound(code: &str) -> Result<&'static str, LookupError> {
    entry(code).map(|e| e.extra_sound)
}

pub fn phrase_override(left_code: &str, right_code: &str) -> Option<&'static str> {
    let key = format!("{left_code}-{right_code}");
    PHRASE_OVERRIDES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// Combine a left and right particle code into particle text.
///
/// Rules, in order:
/// - whole-pair override table wins;
/// - a leading nasal `n` is stripped from the right code before indexing
///   and remembered as a trailing `、`;
/// - bare-`n` left: only the right fragment, always followed by `、`;
/// - topic codes `k`/`nk` on the right invert the pair into a genitive
///   `の` + left fragment, unless the left code is empty, `k`, or `ntk`;
/// - otherwise left fragment + right fragment.
pub fn resolve(left_code: &str, right_code: &str) -> Result<String, LookupError> {
    if let Some(text) = phrase_override(left_code, right_code) {
        return Ok(text.to_string());
    }

    let has_nasal = right_code.contains('n');
    let right_stripped: String = right_code.chars().filter(|&c| c != 'n').collect();

    let left = entry(left_code)?;
    let right = entry(&right_stripped)?;

    if left_code == "n" {
        return Ok(format!("{}{}", right.right, COMMA));
    }

    let mut out = if (right_code == "k" || right_code == "nk")
        && !matches!(left_code, "" | "k" | "ntk")
    {
        format!("の{}", left.left)
    } else {
        format!("{}{}", left.left, right.right)
    };
    if has_nasal {
        out.push_str(COMMA);
    }
    Ok(out)
}
