//! Playback data type definitions

use serde::Serialize;

use crate::pitch::Note;

/// How the instrument dies away after the last chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Release {
    /// Piano decays quickly.
    Piano,
    /// Pads and brass synths ring out.
    Synth,
}

impl Release {
    /// Seconds to wait after the last chord ends.
    pub fn tail_seconds(self) -> f64 {
        match self {
            Release::Piano => 1.5,
            Release::Synth => 2.5,
        }
    }
}

/// One chord of the schedule (all notes struck together).
///
/// # Fields
/// - `roman`: symbol of the chord, for highlighting the answer slot being played
/// - `notes`: note tokens in voicing order
/// - `midi_notes`: the same notes as MIDI numbers (C4 = 60)
/// - `start_time`: beats from the start of the progression
/// - `duration`: length in beats
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackChord {
    pub roman: String,
    pub notes: Vec<Note>,
    pub midi_notes: Vec<u8>,
    pub start_time: f64,
    pub duration: f64,
}

/// A full progression schedule.
///
/// # Fields
/// - `tempo`: beats per minute (beat = quarter note)
/// - `chords`: chords in playing order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackData {
    pub tempo: u16,
    pub chords: Vec<PlaybackChord>,
}

impl PlaybackData {
    pub fn seconds_per_beat(&self) -> f64 {
        60.0 / f64::from(self.tempo)
    }

    /// Length of the chords alone, in beats.
    pub fn total_beats(&self) -> f64 {
        self.chords
            .last()
            .map(|c| c.start_time + c.duration)
            .unwrap_or(0.0)
    }

    /// Wall-clock length including the release tail.
    pub fn total_seconds(&self, release: Release) -> f64 {
        self.total_beats() * self.seconds_per_beat() + release.tail_seconds()
    }

    /// Start of chord `index` in seconds, for UI highlighting.
    pub fn chord_start_seconds(&self, index: usize) -> Option<f64> {
        self.chords
            .get(index)
            .map(|c| c.start_time * self.seconds_per_beat())
    }
}
