//! Mora synthesis: one hand-side of a stroke → one kana syllable plus an
//! optional trailing extra sound.
//!
//! The vowel group may be omitted on the keyboard to mean "same vowel as
//! the previous syllable"; [`VowelCarry`] is the single slot of state that
//! makes this work. It is read on entry and written only after the whole
//! syllable resolved, so a failed lookup never corrupts the carry.

pub mod tables;

use crate::error::LookupError;
use crate::particle;

/// Last non-empty vowel stroke seen by any prior synthesis call.
#[derive(Debug, Clone)]
pub struct VowelCarry {
    last: String,
}

impl Default for VowelCarry {
    fn default() -> Self {
        VowelCarry { last: "A".to_string() }
    }
}

impl VowelCarry {
    pub fn last(&self) -> &str {
        &self.last
    }

    fn update(&mut self, vowel: &str) {
        self.last.clear();
        self.last.push_str(vowel);
    }
}

/// One synthesized mora.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mora {
    /// The kana syllable (base kana plus any diphthong long mark).
    pub syllable: String,
    /// Trailing mora selected by the particle code (ん, っ, ー, …).
    pub extra_sound: String,
    /// Romaji row symbol the syllable came from; empty for literal
    /// exception kana and the degenerate branches.
    pub conso_roma: String,
    /// Romaji column symbol; empty as above.
    pub vowel_roma: String,
}

impl Mora {
    /// Syllable plus extra sound, the literal base form of this hand-side.
    pub fn base(&self) -> String {
        format!("{}{}", self.syllable, self.extra_sound)
    }
}

/// Synthesize one hand-side. The carry is consulted when `vowel` is empty
/// and updated (post-success) when it is not.
pub fn synthesize(
    carry: &mut VowelCarry,
    conso: &str,
    vowel: &str,
    particle_code: &str,
    asterisk: bool,
) -> Result<Mora, LookupError> {
    let current_vowel = if vowel.is_empty() {
        carry.last().to_string()
    } else {
        vowel.to_string()
    };

    let mora = resolve(&current_vowel, conso, vowel, particle_code, asterisk)?;
    if !vowel.is_empty() {
        carry.update(vowel);
    }
    Ok(mora)
}

fn resolve(
    current_vowel: &str,
    conso: &str,
    vowel: &str,
    particle_code: &str,
    asterisk: bool,
) -> Result<Mora, LookupError> {
    if conso.is_empty() && vowel.is_empty() && particle_code.is_empty() {
        return Ok(Mora::default());
    }

    let conso_vowel = format!("{conso}{vowel}");

    // Extra-sound-only: no kana keys at all, or the silent STN row.
    if conso_vowel.is_empty() || conso_vowel == "STN" {
        return Ok(Mora {
            extra_sound: particle::extra_sound(particle_code)?.to_string(),
            ..Mora::default()
        });
    }

    // Literal exception kana, unless the modifier is held or the carried
    // vowel+particle combination forms a loanword diphthong.
    let vowel_particle = format!("{current_vowel}{particle_code}");
    if !asterisk && tables::complex_diphthong(&vowel_particle).is_none() {
        if let Some(kana) = tables::exception_kana(&conso_vowel) {
            return Ok(Mora {
                syllable: kana.to_string(),
                extra_sound: particle::extra_sound(particle_code)?.to_string(),
                ..Mora::default()
            });
        }
    }

    let conso_roma = tables::consonant_roma(conso)
        .ok_or_else(|| LookupError::UnknownConsonant(conso.to_string()))?;

    // Vowel resolution: loanword diphthong → diphthong → plain column.
    let (column, vowel_roma, long_mark, extra_sound, loanword) = if !asterisk {
        match tables::complex_diphthong(&vowel_particle) {
            Some((v, mark)) => {
                let column = tables::vowel_column(v)
                    .ok_or_else(|| LookupError::UnknownVowel(v.to_string()))?;
                (column, v, mark, "", true)
            }
            None => plain_or_diphthong(current_vowel, particle_code)?,
        }
    } else {
        plain_or_diphthong(current_vowel, particle_code)?
    };

    let row = tables::kana_row(conso_roma).ok_or_else(|| LookupError::KanaCellOutOfRange {
        row: conso_roma.to_string(),
        column,
    })?;
    let base = row
        .get(column)
        .ok_or_else(|| LookupError::KanaCellOutOfRange {
            row: conso_roma.to_string(),
            column,
        })?;

    // Loanword syllables palatalize the t/d i-column.
    let base = if loanword {
        match *base {
            "ち" => "てぃ",
            "ぢ" => "でぃ",
            other => other,
        }
    } else {
        base
    };

    Ok(Mora {
        syllable: format!("{base}{long_mark}"),
        extra_sound: extra_sound.to_string(),
        conso_roma: conso_roma.to_string(),
        vowel_roma: vowel_roma.to_string(),
    })
}

fn plain_or_diphthong(
    current_vowel: &str,
    particle_code: &str,
) -> Result<(usize, &'static str, &'static str, &'static str, bool), LookupError> {
    if let Some((v, mark)) = tables::diphthong(current_vowel) {
        let column = tables::vowel_column(v)
            .ok_or_else(|| LookupError::UnknownVowel(v.to_string()))?;
        return Ok((column, v, mark, particle::extra_sound(particle_code)?, false));
    }
    let (column, roma) = tables::plain_vowel(current_vowel)
        .ok_or_else(|| LookupError::UnknownVowel(current_vowel.to_string()))?;
    Ok((column, roma, "", particle::extra_sound(particle_code)?, false))
}
