//! Stateful translation session for the Mejiro steno layout.
//!
//! `TranslatorSession` owns everything that persists between strokes: the
//! carried vowel, the pending sokuon of the transliterator, the typing-mode
//! flag, and the user dictionary. Each call to [`TranslatorSession::translate`]
//! resolves exactly one stroke through the precedence dispatcher.

mod dispatch;
mod reverse;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use mejiro_core::mora::{synthesize, Mora, VowelCarry};
use mejiro_core::stroke::{Stroke, TYPING_MODE_OFF, TYPING_MODE_ON};
use mejiro_core::user_dict::UserDict;
use mejiro_core::{LookupError, Transliterator, TypingLayout};

pub use dispatch::Rule;

/// One translated stroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Output wrapped in the glue markers `{^` … `^}`.
    pub text: String,
    /// The unwrapped output.
    pub body: String,
    /// The dispatch branch that produced it.
    pub rule: Rule,
}

pub struct TranslatorSession {
    users: UserDict,
    carry: VowelCarry,
    translit: Transliterator,
    typing_mode: bool,
    layout: TypingLayout,
}

impl Default for TranslatorSession {
    fn default() -> Self {
        TranslatorSession::new(UserDict::default())
    }
}

impl TranslatorSession {
    pub fn new(users: UserDict) -> Self {
        TranslatorSession {
            users,
            carry: VowelCarry::default(),
            translit: Transliterator::default(),
            typing_mode: false,
            layout: TypingLayout::default(),
        }
    }

    pub fn set_layout(&mut self, layout: TypingLayout) {
        self.layout = layout;
    }

    pub fn set_typing_mode(&mut self, enabled: bool) {
        self.typing_mode = enabled;
    }

    pub fn typing_mode(&self) -> bool {
        self.typing_mode
    }

    /// Translate one raw stroke. On error the session state is unchanged.
    pub fn translate(&mut self, raw: &str) -> Result<Translation, LookupError> {
        let _span = debug_span!("translate", stroke = raw).entered();

        match raw {
            TYPING_MODE_OFF => {
                self.typing_mode = false;
                return Ok(wrap(String::new(), Rule::ModeToggle));
            }
            TYPING_MODE_ON => {
                self.typing_mode = true;
                return Ok(wrap(String::new(), Rule::ModeToggle));
            }
            _ => {}
        }

        let stroke = Stroke::decompose(raw);

        // The carry is committed only once the whole stroke resolved.
        let mut carry = self.carry.clone();
        let (left, right) = synthesize_pair(&mut carry, &stroke)?;

        let (mut body, mut rule) = dispatch::dispatch(&stroke, &left, &right, &self.users)?;

        if stroke.is_panic() {
            body.clear();
            rule = Rule::Cancel;
        } else if self.typing_mode {
            body = self.translit.transliterate(&body, self.layout);
        }

        self.carry = carry;
        debug!(%body, rule = %rule);
        Ok(wrap(body, rule))
    }

    /// Strokes producing `text`, from the user dictionary and the literal
    /// abbreviation tables. Synthesized kana is not inverted, so not every
    /// forward translation can be found here.
    pub fn reverse_lookup(&self, text: &str) -> Vec<String> {
        reverse::lookup(&self.users, text)
    }
}

fn synthesize_pair(
    carry: &mut VowelCarry,
    stroke: &Stroke,
) -> Result<(Mora, Mora), LookupError> {
    let left = synthesize(
        carry,
        &stroke.left_conso,
        &stroke.left_vowel,
        &stroke.left_particle,
        stroke.asterisk,
    )?;
    let right = synthesize(
        carry,
        &stroke.right_conso,
        &stroke.right_vowel,
        &stroke.right_particle,
        stroke.asterisk,
    )?;
    Ok((left, right))
}

fn wrap(body: String, rule: Rule) -> Translation {
    Translation {
        text: format!("{{^{body}^}}"),
        body,
        rule,
    }
}
