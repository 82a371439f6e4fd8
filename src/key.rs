//! # Keys and Key Maps
//!
//! A [`Key`] is a tonic pitch class plus a [`Mode`]. A [`KeyMap`] resolves every
//! supported Roman-numeral symbol to concrete notes in that key.
//!
//! ## Building a Key Map
//! 1. The seven diatonic symbols of the mode are rooted on the mode's scale steps
//!    (major `[0,2,4,5,7,9,11]`, natural minor `[0,2,3,5,7,8,10]`).
//! 2. Every other symbol in the vocabulary is rooted on the major-scale degree of
//!    its numeral, minus a semitone for a `b` prefix (`bVII` in C is B♭).
//! 3. Each root is voiced by stacking its quality's intervals.
//!
//! Roots sit in octave 4 so every key shares one playable register. A slash
//! chord puts its bass note an octave below the degree it names.
//!
//! ```rust
//! use chordcraft::{Key, KeyMap, Mode, PitchClass};
//!
//! let map = KeyMap::build(Key::new(PitchClass::C, Mode::Major));
//! let notes: Vec<String> = map.notes("V7").iter().map(|n| n.to_string()).collect();
//! assert_eq!(notes, ["G4", "B4", "D5", "F5"]);
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::error::TheoryError;
use crate::pitch::{Note, PitchClass, CHROMATIC};
use crate::roman::{RomanSymbol, CHROMATIC_DEGREES};
use crate::vocabulary::{quality_for, ChordQuality, VOCABULARY};

/// Octave that chord roots are built from.
pub const ROOT_OCTAVE: i32 = 4;

const MAJOR_STEPS: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];
const MINOR_STEPS: [i32; 7] = [0, 2, 3, 5, 7, 8, 10];

const MAJOR_DIATONIC: [&str; 7] = ["I", "ii", "iii", "IV", "V", "vi", "vii°"];
const MINOR_DIATONIC: [&str; 7] = ["i", "ii°", "III", "iv", "v", "VI", "VII"];

/// Major-key tonics in the order the game enumerates them.
pub const MAJOR_TONICS: [PitchClass; 12] = CHROMATIC;

/// Minor-key tonics, enumerated from A.
pub const MINOR_TONICS: [PitchClass; 12] = [
    PitchClass::A,
    PitchClass::ASharp,
    PitchClass::B,
    PitchClass::C,
    PitchClass::CSharp,
    PitchClass::D,
    PitchClass::DSharp,
    PitchClass::E,
    PitchClass::F,
    PitchClass::FSharp,
    PitchClass::G,
    PitchClass::GSharp,
];

/// Harmonic mode a key map is built in.
///
/// Dorian and the other named styles are played over one of these two maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    pub fn scale_steps(self) -> &'static [i32; 7] {
        match self {
            Mode::Major => &MAJOR_STEPS,
            Mode::Minor => &MINOR_STEPS,
        }
    }

    pub fn diatonic_symbols(self) -> &'static [&'static str; 7] {
        match self {
            Mode::Major => &MAJOR_DIATONIC,
            Mode::Minor => &MINOR_DIATONIC,
        }
    }

    pub fn tonics(self) -> &'static [PitchClass; 12] {
        match self {
            Mode::Major => &MAJOR_TONICS,
            Mode::Minor => &MINOR_TONICS,
        }
    }

    /// C for major, A for minor.
    pub fn default_tonic(self) -> PitchClass {
        self.tonics()[0]
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Major => "Major",
            Mode::Minor => "Minor",
        }
    }
}

/// A tonic and a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub tonic: PitchClass,
    pub mode: Mode,
}

impl Key {
    pub fn new(tonic: PitchClass, mode: Mode) -> Self {
        Self { tonic, mode }
    }

    /// Parse a display label such as `"C Major"`, `"F# Minor"` or `"D Dorian (Coltrane)"`.
    ///
    /// The first word is the tonic and the second the mode: `Minor` and `Dorian` are
    /// minor, `Major` and `Mixolydian` major. A parenthetical suffix is ignored, so
    /// `"C Major (Minor iv)"` is C major. A bare tonic is major.
    ///
    /// ```rust
    /// use chordcraft::{Key, Mode, PitchClass};
    ///
    /// let key = Key::parse("Bb Major (Borrowed)").unwrap();
    /// assert_eq!(key.tonic, PitchClass::ASharp);
    /// assert_eq!(key.mode, Mode::Major);
    /// assert_eq!(Key::parse("E Dorian (Coltrane)").unwrap().mode, Mode::Minor);
    /// assert_eq!(Key::parse("C Major (Minor iv)").unwrap().mode, Mode::Major);
    /// ```
    pub fn parse(label: &str) -> Result<Self, TheoryError> {
        let invalid = || TheoryError::InvalidKey(label.to_string());
        let mut words = label.split_whitespace();
        let tonic = words
            .next()
            .ok_or_else(invalid)?
            .parse::<PitchClass>()
            .map_err(|_| invalid())?;
        let mode = match words.next() {
            None | Some("Major") | Some("Mixolydian") => Mode::Major,
            Some("Minor") | Some("Dorian") => Mode::Minor,
            Some(_) => return Err(invalid()),
        };
        Ok(Self { tonic, mode })
    }

    /// The tonic note chord roots are measured from.
    pub fn root_note(self) -> Note {
        Note::new(self.tonic, ROOT_OCTAVE)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.mode.name())
    }
}

/// Roman-numeral symbol to notes, for one key.
///
/// Built fresh per request; never mutated after [`KeyMap::build`] returns.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    key: Key,
    chords: HashMap<&'static str, Vec<Note>>,
}

impl KeyMap {
    pub fn build(key: Key) -> Self {
        let tonic = key.root_note();
        let mut chords = HashMap::new();

        let diatonic = key.mode.diatonic_symbols();
        for (symbol, step) in diatonic.iter().zip(key.mode.scale_steps()) {
            if let Some(quality) = quality_for(symbol) {
                chords.insert(*symbol, voice(tonic.transpose(*step), quality));
            }
        }

        for (symbol, quality) in VOCABULARY {
            if chords.contains_key(symbol) {
                continue;
            }
            let Some(parsed) = RomanSymbol::parse(symbol) else {
                log::debug!("skipping unparseable vocabulary symbol {}", symbol);
                continue;
            };
            let root = tonic.transpose(parsed.chromatic_offset());
            let notes: Vec<Note> = match parsed.bass {
                Some(bass_degree) => {
                    let upper = if parsed.upper_case {
                        ChordQuality::Major
                    } else {
                        ChordQuality::Minor
                    };
                    let bass = tonic.transpose(CHROMATIC_DEGREES[bass_degree] - 12);
                    std::iter::once(bass).chain(voice(root, upper)).collect()
                }
                None => voice(root, *quality),
            };
            chords.insert(*symbol, notes);
        }

        Self { key, chords }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    /// Notes for `symbol`, or `None` if the symbol is unavailable in this key.
    pub fn get(&self, symbol: &str) -> Option<&[Note]> {
        self.chords.get(symbol).map(Vec::as_slice)
    }

    /// Notes for `symbol`; empty when the symbol is unavailable.
    pub fn notes(&self, symbol: &str) -> Vec<Note> {
        self.get(symbol).map(<[Note]>::to_vec).unwrap_or_default()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.chords.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }
}

/// Stack a quality's intervals on `root`.
pub fn voice(root: Note, quality: ChordQuality) -> Vec<Note> {
    quality
        .intervals()
        .iter()
        .map(|interval| root.transpose(*interval))
        .collect()
}
