use std::fmt;

/// The seven natural pitch-class letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

/// Chromatic spelling table preferring sharps (pitch class 1 is C#).
const LOOKUP_SHARPS: [(Letter, i32); 12] = [
    (Letter::C, 0),
    (Letter::C, 1),
    (Letter::D, 0),
    (Letter::D, 1),
    (Letter::E, 0),
    (Letter::F, 0),
    (Letter::F, 1),
    (Letter::G, 0),
    (Letter::G, 1),
    (Letter::A, 0),
    (Letter::A, 1),
    (Letter::B, 0),
];

/// Chromatic spelling table preferring flats (pitch class 1 is Db).
const LOOKUP_FLATS: [(Letter, i32); 12] = [
    (Letter::C, 0),
    (Letter::D, -1),
    (Letter::D, 0),
    (Letter::E, -1),
    (Letter::E, 0),
    (Letter::F, 0),
    (Letter::G, -1),
    (Letter::G, 0),
    (Letter::A, -1),
    (Letter::A, 0),
    (Letter::B, -1),
    (Letter::B, 0),
];

impl Letter {
    /// Semitone offset of the natural letter within its octave (C = 0).
    pub fn offset(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Parse an uppercase letter A-G.
    pub fn from_char(c: char) -> Option<Letter> {
        match c {
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        })
    }
}

/// Absolute semitone value of a spelled note.
///
/// No range restriction: arbitrarily negative or large values are valid.
pub fn to_pitch(letter: Letter, accidentals: i32, octave: i32) -> i32 {
    (octave + 1) * 12 + letter.offset() + accidentals
}

/// Minimal spelling of an absolute pitch as `(letter, accidentals, octave)`.
///
/// The sharp table only ever yields a 0 or +1 accidental, the flat table
/// 0 or -1. Octaves use floor division so negative pitches spell correctly.
pub fn from_pitch(pitch: i32, use_sharps: bool) -> (Letter, i32, i32) {
    let octave = pitch.div_euclid(12) - 1;
    let offset = (pitch - (octave + 1) * 12) as usize;
    let lookup = if use_sharps {
        &LOOKUP_SHARPS
    } else {
        &LOOKUP_FLATS
    };
    let (letter, accidentals) = lookup[offset];
    (letter, accidentals, octave)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_offsets() {
        assert_eq!(Letter::C.offset(), 0);
        assert_eq!(Letter::D.offset(), 2);
        assert_eq!(Letter::E.offset(), 4);
        assert_eq!(Letter::F.offset(), 5);
        assert_eq!(Letter::G.offset(), 7);
        assert_eq!(Letter::A.offset(), 9);
        assert_eq!(Letter::B.offset(), 11);
    }

    #[test]
    fn test_from_pitch_sharps() {
        assert_eq!(from_pitch(60, true), (Letter::C, 0, 4));
        assert_eq!(from_pitch(61, true), (Letter::C, 1, 4));
        assert_eq!(from_pitch(63, true), (Letter::D, 1, 4));
        assert_eq!(from_pitch(71, true), (Letter::B, 0, 4));
        assert_eq!(from_pitch(72, true), (Letter::C, 0, 5));
    }

    #[test]
    fn test_from_pitch_flats() {
        assert_eq!(from_pitch(61, false), (Letter::D, -1, 4));
        assert_eq!(from_pitch(63, false), (Letter::E, -1, 4));
        assert_eq!(from_pitch(66, false), (Letter::G, -1, 4));
        assert_eq!(from_pitch(70, false), (Letter::B, -1, 4));
        assert_eq!(from_pitch(71, false), (Letter::B, 0, 4));
    }

    #[test]
    fn test_negative_pitch() {
        // Pitch -1 is the B just below octave -1's C.
        assert_eq!(from_pitch(-1, true), (Letter::B, 0, -2));
        assert_eq!(from_pitch(-13, false), (Letter::B, 0, -3));
        assert_eq!(to_pitch(Letter::B, 0, -2), -1);
    }

    #[test]
    fn test_round_trip() {
        for pitch in -36..=132 {
            let (letter, accidentals, octave) = from_pitch(pitch, true);
            assert_eq!(to_pitch(letter, accidentals, octave), pitch);
            let (letter, accidentals, octave) = from_pitch(pitch, false);
            assert_eq!(to_pitch(letter, accidentals, octave), pitch);
        }
    }
}
