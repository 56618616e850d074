// Error types for lexicon loading

/// Errors raised while reading lexicon entries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexiconError {
    #[error("unknown primary part of speech: {0}")]
    UnknownPrimaryPos(String),

    #[error("unknown secondary part of speech: {0}")]
    UnknownSecondaryPos(String),

    #[error("unknown lexeme attribute: {0}")]
    UnknownAttribute(String),

    #[error("empty lemma")]
    EmptyLemma,

    #[error("malformed lexicon line {line}: {reason}")]
    Malformed { line: usize, reason: &'static str },
}
