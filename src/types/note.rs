use crate::container::NoteContainer;
use crate::error::NoteError;
use crate::types::pitch::{self, Letter};
use std::fmt;
use std::str::FromStr;

/// A single spelled note: letter, accidental count and octave.
///
/// Accidentals are a signed count: positive means that many sharps,
/// negative that many flats. The absolute pitch is always
/// `(octave + 1) * 12 + letter_offset + accidentals`, so a spelling is
/// just one of several names for the same semitone value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    letter: Letter,
    accidentals: i32,
    octave: i32,
}

impl Default for Note {
    /// A natural in octave 4.
    fn default() -> Self {
        Note {
            letter: Letter::A,
            accidentals: 0,
            octave: 4,
        }
    }
}

impl Note {
    pub fn new(letter: Letter, accidentals: i32, octave: i32) -> Self {
        Note {
            letter,
            accidentals,
            octave,
        }
    }

    /// Minimal sharp-preferring spelling of an absolute pitch.
    pub fn from_pitch(pitch: i32) -> Self {
        Self::spell(pitch, true)
    }

    /// Minimal spelling of an absolute pitch with the given preference.
    pub fn spell(pitch: i32, use_sharps: bool) -> Self {
        let (letter, accidentals, octave) = pitch::from_pitch(pitch, use_sharps);
        Note {
            letter,
            accidentals,
            octave,
        }
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn accidentals(&self) -> i32 {
        self.accidentals
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// Absolute semitone value.
    pub fn to_pitch(&self) -> i32 {
        pitch::to_pitch(self.letter, self.accidentals, self.octave)
    }

    /// Shift by `amount` semitones, in place.
    ///
    /// Accidentals the note already carries are held aside, the bare pitch
    /// is respelled at the target, then the held accidentals go back on
    /// top. Intervals landing on a natural or sharp pitch class
    /// (0, 2, 4, 5, 7, 9, 11 mod 12) spell with sharps, the rest with
    /// flats.
    pub fn transpose(&mut self, amount: i32) -> &mut Self {
        let held = self.accidentals;
        let use_sharps = matches!(amount.rem_euclid(12), 0 | 2 | 4 | 5 | 7 | 9 | 11);
        *self = Note::spell(self.to_pitch() - held + amount, use_sharps);
        self.accidentals += held;
        self
    }

    /// Raise by one accidental, in place.
    pub fn augment(&mut self) -> &mut Self {
        self.accidentals += 1;
        self
    }

    /// Lower by one accidental, in place.
    pub fn diminish(&mut self) -> &mut Self {
        self.accidentals -= 1;
        self
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        let symbol = if self.accidentals > 0 { '#' } else { 'b' };
        for _ in 0..self.accidentals.unsigned_abs() {
            write!(f, "{}", symbol)?;
        }
        write!(f, "{}", self.octave)
    }
}

impl FromStr for Note {
    type Err = NoteError;

    /// Parse a spelled name: `<letter A-G><zero or more # or b><digits>`.
    ///
    /// Octave digits may be absent, in which case the octave is 0. Sharps
    /// and flats may be mixed in one name and cancel each other out.
    fn from_str(s: &str) -> Result<Self, NoteError> {
        let mut chars = s.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| NoteError::Format(s.to_string()))?;

        let rest = chars.as_str();
        let symbols_end = rest.find(|c| c != '#' && c != 'b').unwrap_or(rest.len());
        let (symbols, digits) = rest.split_at(symbols_end);

        let accidentals = symbols
            .chars()
            .map(|c| if c == '#' { 1 } else { -1 })
            .sum();

        let octave = if digits.is_empty() {
            0
        } else if digits.bytes().all(|b| b.is_ascii_digit()) {
            digits
                .parse()
                .map_err(|_| NoteError::Format(s.to_string()))?
        } else {
            return Err(NoteError::Format(s.to_string()));
        };

        Ok(Note {
            letter,
            accidentals,
            octave,
        })
    }
}

impl NoteContainer for Note {
    fn get_notes(&self) -> Vec<Note> {
        vec![self.clone()]
    }

    fn transpose(&mut self, amount: i32) {
        Note::transpose(self, amount);
    }

    fn clone_box(&self) -> Box<dyn NoteContainer> {
        Box::new(self.clone())
    }
}

/// A silent placeholder note.
///
/// It carries the same spelled fields as [`Note`] and transposes like one,
/// but flattens to nothing, so it can occupy a slot in a grouping or
/// sequence without sounding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rest {
    pitch: Note,
}

impl Rest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pitch(pitch: i32) -> Self {
        Rest {
            pitch: Note::from_pitch(pitch),
        }
    }

    pub fn transpose(&mut self, amount: i32) -> &mut Self {
        self.pitch.transpose(amount);
        self
    }

    pub fn augment(&mut self) -> &mut Self {
        self.pitch.augment();
        self
    }

    pub fn diminish(&mut self) -> &mut Self {
        self.pitch.diminish();
        self
    }
}

impl From<Note> for Rest {
    fn from(pitch: Note) -> Self {
        Rest { pitch }
    }
}

impl FromStr for Rest {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, NoteError> {
        Ok(Rest { pitch: s.parse()? })
    }
}

impl NoteContainer for Rest {
    fn get_notes(&self) -> Vec<Note> {
        Vec::new()
    }

    fn transpose(&mut self, amount: i32) {
        Rest::transpose(self, amount);
    }

    fn clone_box(&self) -> Box<dyn NoteContainer> {
        Box::new(self.clone())
    }
}
