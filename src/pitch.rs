//! # Pitch and Interval Primitives
//!
//! Chromatic pitch classes and octave-bound notes, plus semitone transposition.
//!
//! ## Note Tokens
//! A note is written as a pitch class followed by an octave number: `C4`, `F#3`,
//! `A#5`. Octave 4 contains middle C (MIDI 60). Sharps are always used for
//! spelling; flats are accepted when parsing (`Bb4` parses as `A#4`).
//!
//! ## Transposition
//! `Note::transpose` moves a note by any number of semitones in one step:
//! - the pitch class wraps modulo 12
//! - the octave moves by `floor((pitch_index + semitones) / 12)`
//!
//! ```rust
//! use chordcraft::{Note, PitchClass};
//!
//! let b3 = Note::new(PitchClass::B, 3);
//! assert_eq!(b3.transpose(1).to_string(), "C4");
//! assert_eq!(b3.transpose(-12).to_string(), "B2");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::TheoryError;

/// One of the 12 chromatic pitch classes, spelled with sharps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

/// All pitch classes in chromatic order starting at C.
pub const CHROMATIC: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::CSharp,
    PitchClass::D,
    PitchClass::DSharp,
    PitchClass::E,
    PitchClass::F,
    PitchClass::FSharp,
    PitchClass::G,
    PitchClass::GSharp,
    PitchClass::A,
    PitchClass::ASharp,
    PitchClass::B,
];

impl PitchClass {
    /// Semitone offset from C (0-11).
    pub fn index(self) -> i32 {
        match self {
            PitchClass::C => 0,
            PitchClass::CSharp => 1,
            PitchClass::D => 2,
            PitchClass::DSharp => 3,
            PitchClass::E => 4,
            PitchClass::F => 5,
            PitchClass::FSharp => 6,
            PitchClass::G => 7,
            PitchClass::GSharp => 8,
            PitchClass::A => 9,
            PitchClass::ASharp => 10,
            PitchClass::B => 11,
        }
    }

    /// Pitch class for any semitone count, wrapping modulo 12.
    pub fn from_index(semitone: i32) -> Self {
        CHROMATIC[semitone.rem_euclid(12) as usize]
    }

    /// Sharp spelling, e.g. `"F#"`.
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    /// Parse a letter with an optional `#` or `b`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let base = match chars.next() {
            Some('C') => 0,
            Some('D') => 2,
            Some('E') => 4,
            Some('F') => 5,
            Some('G') => 7,
            Some('A') => 9,
            Some('B') => 11,
            _ => return Err(TheoryError::InvalidNote(s.to_string())),
        };
        let accidental = match chars.as_str() {
            "" => 0,
            "#" => 1,
            "b" => -1,
            _ => return Err(TheoryError::InvalidNote(s.to_string())),
        };
        Ok(Self::from_index(base + accidental))
    }
}

/// A pitch class bound to an octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    pub pitch: PitchClass,
    pub octave: i32,
}

impl Note {
    pub fn new(pitch: PitchClass, octave: i32) -> Self {
        Self { pitch, octave }
    }

    /// Move the note by `semitones`, carrying into the octave as needed.
    pub fn transpose(self, semitones: i32) -> Self {
        let absolute = self.pitch.index() + semitones;
        Self {
            pitch: PitchClass::from_index(absolute),
            octave: self.octave + absolute.div_euclid(12),
        }
    }

    /// MIDI note number, C4 = 60.
    ///
    /// Notes outside the MIDI range are clamped to 0..=127.
    pub fn midi(self) -> u8 {
        let number = (self.octave + 1) * 12 + self.pitch.index();
        number.clamp(0, 127) as u8
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch, self.octave)
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s
            .find(|c: char| c.is_ascii_digit() || c == '-')
            .ok_or_else(|| TheoryError::InvalidNote(s.to_string()))?;
        let (name, octave) = s.split_at(split);
        let pitch = name
            .parse::<PitchClass>()
            .map_err(|_| TheoryError::InvalidNote(s.to_string()))?;
        let octave = octave
            .parse::<i32>()
            .map_err(|_| TheoryError::InvalidNote(s.to_string()))?;
        Ok(Self { pitch, octave })
    }
}

impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Transpose a note token such as `"G#3"`.
///
/// A token that cannot be parsed is a caller bug and is reported as
/// [`TheoryError::InvalidNote`] instead of being passed through unchanged.
///
/// ```rust
/// use chordcraft::transpose_token;
///
/// assert_eq!(transpose_token("A4", 3).unwrap().to_string(), "C5");
/// assert!(transpose_token("X4", 3).is_err());
/// ```
pub fn transpose_token(token: &str, semitones: i32) -> Result<Note, TheoryError> {
    Ok(token.parse::<Note>()?.transpose(semitones))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("C4".parse::<Note>().unwrap(), Note::new(PitchClass::C, 4));
        assert_eq!("F#3".parse::<Note>().unwrap(), Note::new(PitchClass::FSharp, 3));
        assert_eq!("Bb3".parse::<Note>().unwrap().to_string(), "A#3");
        assert_eq!("C-1".parse::<Note>().unwrap().octave, -1);
        assert_eq!(Note::new(PitchClass::GSharp, 5).to_string(), "G#5");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Note>().is_err());
        assert!("C".parse::<Note>().is_err());
        assert!("H4".parse::<Note>().is_err());
        assert!("C##4".parse::<Note>().is_err());
        assert!("4".parse::<Note>().is_err());
    }

    #[test]
    fn test_transpose_octave_carry() {
        let c4 = Note::new(PitchClass::C, 4);
        assert_eq!(c4.transpose(0), c4);
        assert_eq!(c4.transpose(11).to_string(), "B4");
        assert_eq!(c4.transpose(12).to_string(), "C5");
        assert_eq!(c4.transpose(-1).to_string(), "B3");
        assert_eq!(c4.transpose(-13).to_string(), "B2");
        assert_eq!(c4.transpose(30).to_string(), "F#6");

        let a4 = Note::new(PitchClass::A, 4);
        assert_eq!(a4.transpose(3).to_string(), "C5");
        assert_eq!(a4.transpose(-21).to_string(), "C3");
    }

    #[test]
    fn test_transpose_round_trip() {
        for pitch in CHROMATIC {
            for octave in [0, 3, 4, 7] {
                let note = Note::new(pitch, octave);
                for k in -40..=40 {
                    assert_eq!(note.transpose(k).transpose(-k), note, "{} by {}", note, k);
                }
            }
        }
    }

    #[test]
    fn test_midi_numbers() {
        assert_eq!(Note::new(PitchClass::C, 4).midi(), 60);
        assert_eq!(Note::new(PitchClass::A, 4).midi(), 69);
        assert_eq!(Note::new(PitchClass::G, 3).midi(), 55);
        assert_eq!(Note::new(PitchClass::C, -1).midi(), 0);
    }

    #[test]
    fn test_transpose_token() {
        assert_eq!(transpose_token("E4", 3).unwrap().to_string(), "G4");
        assert_eq!(transpose_token("Eb4", 4).unwrap().to_string(), "G4");
        assert!(matches!(
            transpose_token("E", 1),
            Err(TheoryError::InvalidNote(_))
        ));
    }
}
