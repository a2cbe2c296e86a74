use crate::container::NoteContainer;
use crate::error::NoteError;
use crate::types::grouping::NoteGrouping;
use crate::types::note::{Note, Rest};
use crate::types::sequence::NotesSequence;

/// Heterogeneous input accepted by container add paths.
///
/// Callers rarely build this directly: the `From` conversions let an
/// integer pitch, a spelled name, a nested `Vec`, an `Option` or any
/// [`NoteContainer`] be passed straight to [`normalize`] or to
/// [`NoteGrouping::add`](crate::NoteGrouping::add).
#[derive(Debug, Clone)]
pub enum NoteInput {
    /// Nothing at all; normalizes to no notes.
    Absent,
    /// An absolute pitch, spelled with sharps.
    Pitch(i32),
    /// A spelled note name such as `"Eb3"`.
    Name(String),
    /// A nested sequence, flattened in order.
    Sequence(Vec<NoteInput>),
    /// Anything that already holds notes.
    Collection(Box<dyn NoteContainer>),
    /// A value no rule covers, kept for the error message.
    Unsupported(String),
}

impl From<i32> for NoteInput {
    fn from(pitch: i32) -> Self {
        NoteInput::Pitch(pitch)
    }
}

impl From<&str> for NoteInput {
    fn from(name: &str) -> Self {
        NoteInput::Name(name.to_string())
    }
}

impl From<String> for NoteInput {
    fn from(name: String) -> Self {
        NoteInput::Name(name)
    }
}

impl From<Note> for NoteInput {
    fn from(note: Note) -> Self {
        NoteInput::Collection(Box::new(note))
    }
}

impl From<Rest> for NoteInput {
    fn from(rest: Rest) -> Self {
        NoteInput::Collection(Box::new(rest))
    }
}

impl From<NoteGrouping> for NoteInput {
    fn from(grouping: NoteGrouping) -> Self {
        NoteInput::Collection(Box::new(grouping))
    }
}

impl From<NotesSequence> for NoteInput {
    fn from(sequence: NotesSequence) -> Self {
        NoteInput::Collection(Box::new(sequence))
    }
}

impl From<Box<dyn NoteContainer>> for NoteInput {
    fn from(collection: Box<dyn NoteContainer>) -> Self {
        NoteInput::Collection(collection)
    }
}

impl<T: Into<NoteInput>> From<Vec<T>> for NoteInput {
    fn from(elements: Vec<T>) -> Self {
        NoteInput::Sequence(elements.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<NoteInput>> From<Option<T>> for NoteInput {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => NoteInput::Absent,
        }
    }
}

// Fractional pitches have no spelling; they only exist to be rejected.
impl From<f32> for NoteInput {
    fn from(value: f32) -> Self {
        NoteInput::Unsupported(value.to_string())
    }
}

impl From<f64> for NoteInput {
    fn from(value: f64) -> Self {
        NoteInput::Unsupported(value.to_string())
    }
}

/// Flatten any accepted input into a list of notes.
///
/// This is the single ingestion path used by every container add
/// operation, so storage only ever holds notes no matter how nested or
/// mixed the caller's input is. Collections are flattened through
/// [`NoteContainer::get_notes`], which yields owned copies, so a caller's
/// structure is never captured or aliased.
pub fn normalize(input: impl Into<NoteInput>) -> Result<Vec<Note>, NoteError> {
    match input.into() {
        NoteInput::Absent => Ok(Vec::new()),
        NoteInput::Pitch(pitch) => Ok(vec![Note::from_pitch(pitch)]),
        NoteInput::Name(name) => Ok(vec![name.parse()?]),
        NoteInput::Sequence(elements) => {
            let mut notes = Vec::new();
            for element in elements {
                notes.extend(normalize(element)?);
            }
            Ok(notes)
        }
        NoteInput::Collection(collection) => Ok(collection.get_notes()),
        NoteInput::Unsupported(value) => Err(NoteError::UnsupportedInput(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_pitch_and_name() {
        assert_eq!(normalize(61).unwrap(), vec![Note::from_pitch(61)]);
        assert_eq!(
            normalize("Db4").unwrap(),
            vec!["Db4".parse::<Note>().unwrap()]
        );
    }

    #[test]
    fn test_normalize_absent() {
        assert!(normalize(None::<i32>).unwrap().is_empty());
        assert!(normalize(NoteInput::Absent).unwrap().is_empty());
    }

    #[test]
    fn test_normalize_nested_sequences() {
        let input: Vec<NoteInput> = vec![
            "C4".into(),
            vec!["E4", "G4"].into(),
            vec![NoteInput::from(72), vec!["B4"].into()].into(),
        ];
        let notes = normalize(input).unwrap();
        let names: Vec<String> = notes.iter().map(Note::to_string).collect();
        assert_eq!(names, vec!["C4", "E4", "G4", "C5", "B4"]);
    }

    #[test]
    fn test_normalize_collections() {
        let note: Note = "C4".parse().unwrap();
        assert_eq!(normalize(note.clone()).unwrap(), vec![note]);
        assert!(normalize(Rest::new()).unwrap().is_empty());
    }

    #[test]
    fn test_normalize_bad_name() {
        assert_eq!(
            normalize("H4"),
            Err(NoteError::Format("H4".to_string()))
        );
    }

    #[test]
    fn test_normalize_unsupported() {
        assert_eq!(
            normalize(1.5_f64),
            Err(NoteError::UnsupportedInput("1.5".to_string()))
        );
        // A bad value nested in a sequence still surfaces.
        let input: Vec<NoteInput> = vec!["C4".into(), 0.25_f32.into()];
        assert!(matches!(
            normalize(input),
            Err(NoteError::UnsupportedInput(_))
        ));
    }
}
