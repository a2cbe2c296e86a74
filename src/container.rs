use crate::types::note::Note;
use std::fmt;

/// Capability shared by everything that holds notes.
///
/// [`Note`], [`Rest`](crate::Rest), [`NoteGrouping`](crate::NoteGrouping)
/// and [`NotesSequence`](crate::NotesSequence) all expose a flattened view
/// of their notes plus an in-place broadcast transpose, so nested
/// structures can be treated interchangeably.
pub trait NoteContainer: fmt::Debug {
    /// Flattened view of the contained notes, as independent copies.
    fn get_notes(&self) -> Vec<Note>;

    /// Shift every contained note by `amount` semitones, in place.
    fn transpose(&mut self, amount: i32);

    /// Clone behind a trait object.
    fn clone_box(&self) -> Box<dyn NoteContainer>;
}

impl Clone for Box<dyn NoteContainer> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
