//! Generated progression types
//!
//! These are the values handed to the audio, UI and grading layers. They are
//! built once by the generator and only read afterwards.

use serde::Serialize;
use uuid::Uuid;

use crate::pitch::Note;

/// One chord of a progression.
///
/// # Fields
/// - `roman`: Roman-numeral symbol, e.g. `"V7"`; this is what answers are graded against
/// - `notes`: concrete voicing, lowest note first
/// - `display_name`: label for the UI; the opening chord carries the key, e.g. `"I (C Major)"`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chord {
    pub roman: String,
    pub notes: Vec<Note>,
    pub display_name: String,
}

/// A four-chord round.
///
/// # Fields
/// - `id`: unique per generated round
/// - `key`: human-readable key label, tonic plus style name (e.g. `"D Major (Jazz)"`)
/// - `chords`: exactly [`PROGRESSION_LENGTH`] chords
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub id: Uuid,
    pub key: String,
    pub chords: Vec<Chord>,
}

/// Number of chords in every progression.
pub const PROGRESSION_LENGTH: usize = 4;

impl Progression {
    /// Roman symbols in order, the answer key for grading.
    pub fn romans(&self) -> Vec<&str> {
        self.chords.iter().map(|c| c.roman.as_str()).collect()
    }

    /// Note voicings in order, what the audio layer plays.
    pub fn note_matrix(&self) -> Vec<Vec<Note>> {
        self.chords.iter().map(|c| c.notes.clone()).collect()
    }
}
