use thiserror::Error;

/// Errors produced by note parsing and input normalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// A spelled note name did not match `<letter><accidentals><octave>`.
    #[error("unknown note format: \"{0}\"")]
    Format(String),

    /// The input normalizer received a value it has no rule for.
    #[error("don't know how to parse these notes: {0}")]
    UnsupportedInput(String),
}
