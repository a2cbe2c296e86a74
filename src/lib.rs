//! notespell - Note Spelling and Pitch Library
//!
//! This library converts between integer semitone pitches and spelled note
//! names (letter, accidentals, octave), and applies pitch transforms
//! (transpose, augment, diminish) uniformly over single notes, chord-like
//! groupings and ordered sequences of collections.

pub mod container;
pub mod error;
pub mod input;
pub mod types;

// Re-export commonly used types
pub use container::NoteContainer;
pub use error::NoteError;
pub use input::NoteInput;
pub use input::normalize;
pub use types::grouping::NoteGrouping;
pub use types::note::Note;
pub use types::note::Rest;
pub use types::pitch::Letter;
pub use types::sequence::NotesSequence;

pub type Result<T> = std::result::Result<T, NoteError>;
