//! Hard lookup failures.
//!
//! A `LookupError` aborts translation of the current stroke. It is distinct
//! from an ordinary miss (abbreviation not found, stroke not a verb), which
//! is reported as `None`/empty and lets the dispatcher fall through to the
//! next candidate rule.

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("unknown consonant stroke: {0:?}")]
    UnknownConsonant(String),
    #[error("unknown vowel stroke: {0:?}")]
    UnknownVowel(String),
    #[error("unknown particle stroke: {0:?}")]
    UnknownParticle(String),
    #[error("no kana at row {row:?} column {column}")]
    KanaCellOutOfRange { row: String, column: usize },
    #[error("no conjugation row {0:?}")]
    UnknownConjugationRow(char),
    #[error("user dictionary: {0}")]
    UserDictIo(#[from] std::io::Error),
    #[error("user dictionary: {0}")]
    UserDictFormat(#[from] serde_json::Error),
}
