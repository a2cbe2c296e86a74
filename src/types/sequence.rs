use crate::container::NoteContainer;
use crate::types::note::Note;

/// An ordered run of note collections, such as a melodic line of chords.
///
/// Elements are kept verbatim: a chord stays a chord, a nested sequence
/// stays a sequence. The read view concatenates element views in append
/// order and never re-sorts across elements.
#[derive(Debug, Clone, Default)]
pub struct NotesSequence {
    elements: Vec<Box<dyn NoteContainer>>,
}

impl NotesSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one element; it keeps its own structure and identity.
    pub fn add(&mut self, element: impl NoteContainer + 'static) -> &mut Self {
        self.elements.push(Box::new(element));
        self
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The raw element list, structure preserved, in append order.
    pub fn get_notes_sequence(&self) -> &[Box<dyn NoteContainer>] {
        &self.elements
    }

    /// Shift every element by `amount` semitones, in place.
    pub fn transpose(&mut self, amount: i32) -> &mut Self {
        for element in &mut self.elements {
            element.transpose(amount);
        }
        self
    }
}

impl NoteContainer for NotesSequence {
    fn get_notes(&self) -> Vec<Note> {
        let mut notes = Vec::new();
        for element in &self.elements {
            notes.extend(element.get_notes());
        }
        notes
    }

    fn transpose(&mut self, amount: i32) {
        NotesSequence::transpose(self, amount);
    }

    fn clone_box(&self) -> Box<dyn NoteContainer> {
        Box::new(self.clone())
    }
}
