//! Verb conjugation: asterisk strokes whose kana stroke names a verb stem
//! and whose particle clusters select the conjugated form.
//!
//! Resolution tries the registered dictionaries first (godan, then kami,
//! then shimo), then the irregular stems, then the structural paradigms
//! read off the right-hand stroke shape, and finally a catch-all r-row
//! godan reading of the synthesized kana.

pub mod tables;

use crate::error::LookupError;
use crate::mora::Mora;
use crate::stroke::Stroke;

/// The ten conjugated forms, in conjugation-row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxForm {
    Negative = 0,
    Causative = 1,
    Passive = 2,
    Polite = 3,
    Dictionary = 4,
    TaTe = 5,
    Volitional = 6,
    Conditional = 7,
    Potential = 8,
    Imperative = 9,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbClass {
    Godan,
    Kami,
    Simo,
}

fn class_row(class: VerbClass, row: char) -> Result<&'static tables::ConjRow, LookupError> {
    let endings = match class {
        VerbClass::Godan => tables::godan_row(row),
        VerbClass::Kami => tables::kami_row(row),
        VerbClass::Simo => tables::simo_row(row),
    };
    endings.ok_or(LookupError::UnknownConjugationRow(row))
}

/// The conjugated form plus the auxiliary/suffix text appended after the
/// selected ending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuxDescriptor {
    pub form: AuxForm,
    pub suffix: String,
}

/// Resolve the particle clusters of a verb stroke into a form selector.
///
/// Whole-pair exceptions win; otherwise a left-hand auxiliary verb stem is
/// itself conjugated through its class row at the right-hand form, with
/// the right-hand auxiliary text appended; with no left code the right
/// entry is used alone.
pub fn aux_descriptor(
    left_particle: &str,
    right_particle: &str,
) -> Result<AuxDescriptor, LookupError> {
    let pair = format!("{left_particle}-{right_particle}");
    if let Some((_, form, suffix)) = tables::AUX_EXCEPTIONS.iter().find(|(k, _, _)| *k == pair) {
        return Ok(AuxDescriptor { form: *form, suffix: suffix.to_string() });
    }

    let (right_form, right_suffix) = tables::AUX_RIGHT
        .iter()
        .find(|(k, _, _)| *k == right_particle)
        .map(|(_, f, s)| (*f, *s))
        .ok_or_else(|| LookupError::UnknownParticle(right_particle.to_string()))?;

    if left_particle.is_empty() {
        return Ok(AuxDescriptor { form: right_form, suffix: right_suffix.to_string() });
    }

    let (form, stem, class, row) = tables::AUX_LEFT
        .iter()
        .find(|(k, _, _, _, _)| *k == left_particle)
        .map(|(_, f, stem, class, row)| (*f, *stem, *class, *row))
        .ok_or_else(|| LookupError::UnknownParticle(left_particle.to_string()))?;

    let endings = class_row(class, row)?;
    let suffix = format!("{stem}{}{right_suffix}", endings[right_form as usize]);
    Ok(AuxDescriptor { form, suffix })
}

/// Voicing assimilation for the ta/te form of g/n/b/m godan rows.
fn voice_ta_te(ending_and_suffix: String, form: AuxForm, row: char) -> String {
    if form != AuxForm::TaTe {
        return ending_and_suffix;
    }
    let (from, to) = match row {
        'g' => {
            if let Some(rest) = ending_and_suffix.strip_prefix("いて") {
                return format!("いで{rest}");
            }
            ("いた", "いだ")
        }
        'n' | 'b' | 'm' => {
            if let Some(rest) = ending_and_suffix.strip_prefix("んて") {
                return format!("んで{rest}");
            }
            ("んた", "んだ")
        }
        _ => return ending_and_suffix,
    };
    match ending_and_suffix.strip_prefix(from) {
        Some(rest) => format!("{to}{rest}"),
        None => ending_and_suffix,
    }
}

fn fixed_paradigm(kana_stroke: &str) -> Option<&'static tables::ConjRow> {
    match kana_stroke {
        "I-K" => Some(&tables::IKU),
        "A-" => Some(&tables::ARU),
        "KNAU-SNA" => Some(&tables::GOZARU),
        "K-" => Some(&tables::KAHEN),
        _ => None,
    }
}

/// Conjugate a verb stroke. Total over decomposed strokes: the final
/// branch reads the synthesized kana as an r-row godan stem.
pub fn resolve(stroke: &Stroke, left: &Mora, right: &Mora) -> Result<String, LookupError> {
    let kana_stroke = stroke.kana_stroke();
    let aux = aux_descriptor(&stroke.left_particle, &stroke.right_particle)?;
    let form = aux.form as usize;

    if let Some((stem, row)) = tables::registered(tables::REGISTERED_GODAN, &kana_stroke) {
        let endings = tables::godan_row(row).ok_or(LookupError::UnknownConjugationRow(row))?;
        let tail = voice_ta_te(format!("{}{}", endings[form], aux.suffix), aux.form, row);
        return Ok(format!("{stem}{tail}"));
    }
    if let Some((stem, row)) = tables::registered(tables::REGISTERED_KAMI, &kana_stroke) {
        let endings = tables::kami_row(row).ok_or(LookupError::UnknownConjugationRow(row))?;
        return Ok(format!("{stem}{}{}", endings[form], aux.suffix));
    }
    if let Some((stem, row)) = tables::registered(tables::REGISTERED_SIMO, &kana_stroke) {
        let endings = tables::simo_row(row).ok_or(LookupError::UnknownConjugationRow(row))?;
        return Ok(format!("{stem}{}{}", endings[form], aux.suffix));
    }

    if let Some(paradigm) = fixed_paradigm(&kana_stroke) {
        return Ok(format!("{}{}", paradigm[form], aux.suffix));
    }

    // Sahen: a bare left-hand noun plus する.
    if right.syllable.is_empty() {
        let out = format!(
            "{}{}{}{}",
            left.syllable,
            right.syllable,
            tables::SAHEN[form],
            aux.suffix
        );
        return Ok(out.replace("しず", "せず"));
    }

    // Copula: the right-hand TN consonant alone selects a です form.
    if stroke.right_conso == "TN" && stroke.right_vowel.is_empty() {
        let desu = tables::desu_form(&stroke.right_particle)
            .ok_or_else(|| LookupError::UnknownParticle(stroke.right_particle.clone()))?;
        return Ok(format!("{}{}{desu}", left.syllable, left.extra_sound));
    }

    let right_row = right.conso_roma.chars().next();

    // Structural godan: the right consonant names the conjugation row.
    if stroke.right_vowel.is_empty() {
        if let Some(row) = right_row {
            if let Some(endings) = tables::godan_row(row) {
                let tail = voice_ta_te(format!("{}{}", endings[form], aux.suffix), aux.form, row);
                return Ok(format!("{}{tail}", left.syllable));
            }
        }
    }

    // Structural kami: right vowel I, bare vowel reads as the w row.
    if stroke.right_vowel == "I" {
        let row = right_row.unwrap_or('w');
        if let Some(endings) = tables::kami_row(row) {
            return Ok(format!("{}{}{}", left.syllable, endings[form], aux.suffix));
        }
    }

    // Structural shimo: right vowel IA.
    if stroke.right_vowel == "IA" {
        let row = right_row.unwrap_or('w');
        if let Some(endings) = tables::simo_row(row) {
            return Ok(format!("{}{}{}", left.syllable, endings[form], aux.suffix));
        }
    }

    let endings = class_row(VerbClass::Godan, 'r')?;
    let out = format!(
        "{}{}{}{}",
        left.syllable, right.syllable, endings[form], aux.suffix
    );
    Ok(out.replace("ござり", "ござい"))
}
