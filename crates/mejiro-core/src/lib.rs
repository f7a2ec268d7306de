//! Core translation primitives for the Mejiro steno layout.
//!
//! A stroke (one chord from the keyboard, e.g. `KAn-TAntk`) is decomposed
//! into positional fields, synthesized into kana morae, and resolved into
//! output text by the particle, abbreviation, and verb engines. Everything
//! here is deterministic and table-driven; the cross-call state (carried
//! vowel, pending sokuon) lives in small structs owned by the caller so
//! that each input stream gets its own isolated instance.

pub mod abbrev;
pub mod error;
pub mod mora;
pub mod particle;
pub mod render;
pub mod stroke;
pub mod user_dict;
pub mod verb;

pub use error::LookupError;
pub use mora::{Mora, VowelCarry};
pub use render::{Transliterator, TypingLayout};
pub use stroke::Stroke;
pub use user_dict::UserDict;
