use crate::container::NoteContainer;
use crate::error::NoteError;
use crate::input::{NoteInput, normalize};
use crate::types::note::Note;

/// An unordered collection of simultaneous notes, such as a chord.
///
/// Notes are stored in insertion order but always read back sorted
/// ascending by absolute pitch; enharmonic equals keep their relative
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct NoteGrouping {
    notes: Vec<Note>,
}

impl NoteGrouping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grouping from any accepted input shape.
    pub fn from_input(input: impl Into<NoteInput>) -> Result<Self, NoteError> {
        let mut grouping = Self::new();
        grouping.add(input)?;
        Ok(grouping)
    }

    /// Normalize `input` and take the resulting notes.
    pub fn add(&mut self, input: impl Into<NoteInput>) -> Result<&mut Self, NoteError> {
        self.notes.extend(normalize(input)?);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// The `index`-th note of the pitch-sorted view.
    pub fn at(&self, index: usize) -> Option<Note> {
        self.get_notes().into_iter().nth(index)
    }

    /// Shift every contained note by `amount` semitones, in place.
    pub fn transpose(&mut self, amount: i32) -> &mut Self {
        for note in &mut self.notes {
            note.transpose(amount);
        }
        self
    }

    /// Raise every contained note by one accidental, in place.
    pub fn augment(&mut self) -> &mut Self {
        for note in &mut self.notes {
            note.augment();
        }
        self
    }

    /// Lower every contained note by one accidental, in place.
    pub fn diminish(&mut self) -> &mut Self {
        for note in &mut self.notes {
            note.diminish();
        }
        self
    }
}

impl NoteContainer for NoteGrouping {
    fn get_notes(&self) -> Vec<Note> {
        let mut notes = self.notes.clone();
        // Stable, so equal pitches keep insertion order.
        notes.sort_by_key(Note::to_pitch);
        notes
    }

    fn transpose(&mut self, amount: i32) {
        NoteGrouping::transpose(self, amount);
    }

    fn clone_box(&self) -> Box<dyn NoteContainer> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::note::Rest;
    use pretty_assertions::assert_eq;

    fn names(grouping: &NoteGrouping) -> Vec<String> {
        grouping.get_notes().iter().map(Note::to_string).collect()
    }

    #[test]
    fn test_sorted_view() {
        let grouping = NoteGrouping::from_input(vec!["C5", "C4", "E4"]).unwrap();
        assert_eq!(names(&grouping), vec!["C4", "E4", "C5"]);
    }

    #[test]
    fn test_sort_is_stable_for_enharmonics() {
        let grouping = NoteGrouping::from_input(vec!["Db4", "C#4", "C4"]).unwrap();
        assert_eq!(names(&grouping), vec!["C4", "Db4", "C#4"]);
    }

    #[test]
    fn test_indexed_read_uses_sorted_view() {
        let grouping = NoteGrouping::from_input(vec!["G4", "C4", "E4"]).unwrap();
        assert_eq!(grouping.at(0).unwrap().to_string(), "C4");
        assert_eq!(grouping.at(2).unwrap().to_string(), "G4");
        assert!(grouping.at(3).is_none());
    }

    #[test]
    fn test_add_chains_and_mixes_inputs() {
        let mut grouping = NoteGrouping::new();
        grouping.add("C4").unwrap().add(64).unwrap().add(None::<i32>).unwrap();
        assert_eq!(names(&grouping), vec!["C4", "E4"]);
        assert_eq!(grouping.len(), 2);
    }

    #[test]
    fn test_rests_occupy_no_slots() {
        let input: Vec<NoteInput> = vec!["C4".into(), Rest::new().into(), "E4".into()];
        let grouping = NoteGrouping::from_input(input).unwrap();
        assert_eq!(grouping.len(), 2);
    }

    #[test]
    fn test_nested_grouping_flattens_in() {
        let chord = NoteGrouping::from_input(vec!["E4", "C4"]).unwrap();
        let mut grouping = NoteGrouping::new();
        grouping.add(chord).unwrap().add("G4").unwrap();
        assert_eq!(names(&grouping), vec!["C4", "E4", "G4"]);
    }

    #[test]
    fn test_transpose_broadcasts() {
        let mut grouping = NoteGrouping::from_input(vec!["C4", "E4", "G4"]).unwrap();
        grouping.transpose(2);
        assert_eq!(names(&grouping), vec!["D4", "F#4", "A4"]);
        grouping.transpose(-12);
        assert_eq!(names(&grouping), vec!["D3", "F#3", "A3"]);
    }

    #[test]
    fn test_augment_diminish_broadcast() {
        let mut grouping = NoteGrouping::from_input(vec!["C4", "F4"]).unwrap();
        grouping.augment();
        assert_eq!(names(&grouping), vec!["C#4", "F#4"]);
        grouping.diminish().diminish();
        assert_eq!(names(&grouping), vec!["Cb4", "Fb4"]);
    }

    #[test]
    fn test_bad_input_is_rejected() {
        assert!(NoteGrouping::from_input("H4").is_err());
        let mut grouping = NoteGrouping::new();
        assert!(grouping.add(0.5_f64).is_err());
        assert!(grouping.is_empty());
    }
}
