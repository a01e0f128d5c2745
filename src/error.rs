use thiserror::Error;

/// Errors produced while parsing formula text. Positions are character
/// offsets into the source.
///
/// Parsing is the engine's only fallible surface: the mutation and
/// serialization operations are total over well-formed trees, and identifier
/// misses are defined as no-ops rather than errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),

    #[error("unexpected end of formula")]
    UnexpectedEnd,

    #[error("expected {0} at position {1}")]
    Expected(&'static str, usize),

    #[error("unexpected trailing input at position {0}")]
    TrailingInput(usize),
}
