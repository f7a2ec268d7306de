//! Precedence dispatch: one decomposed stroke and its synthesized morae
//! resolved into output text by exactly one rule.

use mejiro_core::mora::Mora;
use mejiro_core::stroke::Stroke;
use mejiro_core::user_dict::UserDict;
use mejiro_core::{abbrev, particle, verb, LookupError};

/// Which dispatch branch produced a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    UserDict,
    Particle,
    Abbreviation,
    Verb,
    LeftPlusParticle,
    RightOnly,
    Literal,
    ModeToggle,
    Cancel,
}

impl Rule {
    pub fn label(&self) -> &'static str {
        match self {
            Rule::UserDict => "user",
            Rule::Particle => "particle",
            Rule::Abbreviation => "abbreviation",
            Rule::Verb => "verb",
            Rule::LeftPlusParticle => "left+particle",
            Rule::RightOnly => "right-only",
            Rule::Literal => "literal",
            Rule::ModeToggle => "mode-toggle",
            Rule::Cancel => "cancel",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Sentence-final copula rewrites applied to particle text appended after
/// an abbreviation. The particle table emits host key tokens for these
/// pairs; in abbreviation position they read as copula forms instead.
const COPULA_REWRITES: &[(&str, &str)] = &[
    ("}{#Space}{", "である"),
    ("}{#Return}{", "だ"),
    ("}{#Tab}{", "だった"),
    ("}{#F8}{", "でした"),
    ("}{#F7}{", "です"),
];

fn rewrite_copula(particle_text: &str) -> String {
    let mut out = particle_text.to_string();
    for (token, copula) in COPULA_REWRITES {
        out = out.replace(token, copula);
    }
    out
}

fn literal(stroke: &Stroke, left: &Mora, right: &Mora) -> String {
    let base = format!("{}{}", left.base(), right.base());
    if stroke.doubled {
        format!("{base}{base}")
    } else {
        base
    }
}

/// Resolve one stroke. Exactly one branch fires, in fixed precedence:
/// user dictionary, particle pair, then under the modifier abbreviation /
/// verb / literal, then the one-sided forms, then literal output.
pub fn dispatch(
    stroke: &Stroke,
    left: &Mora,
    right: &Mora,
    users: &UserDict,
) -> Result<(String, Rule), LookupError> {
    let joshi = particle::resolve(&stroke.left_particle, &stroke.right_particle)?;

    if stroke.asterisk {
        if let Some(text) = users.get(&stroke.main_stroke()) {
            return Ok((text.to_string(), Rule::UserDict));
        }
    }

    if stroke.kana_stroke() == "-" && !joshi.is_empty() && !stroke.asterisk {
        return Ok((joshi, Rule::Particle));
    }

    if stroke.asterisk {
        if let Some(text) = abbrev::resolve(&stroke.left_kana_stroke(), &stroke.right_kana_stroke())
        {
            return Ok((format!("{text}{}", rewrite_copula(&joshi)), Rule::Abbreviation));
        }
        let conjugated = verb::resolve(stroke, left, right)?;
        if !conjugated.is_empty() {
            return Ok((conjugated, Rule::Verb));
        }
        return Ok((literal(stroke, left, right), Rule::Literal));
    }

    if !left.syllable.is_empty()
        && stroke.right_kana_stroke().is_empty()
        && stroke.particle_stroke() != "ntk-n"
        && !stroke.right_particle.is_empty()
    {
        return Ok((format!("{}{joshi}", left.syllable), Rule::LeftPlusParticle));
    }

    if stroke.left_is_empty() && !right.syllable.is_empty() && stroke.right_particle.is_empty() {
        return Ok((String::new(), Rule::RightOnly));
    }

    Ok((literal(stroke, left, right), Rule::Literal))
}
