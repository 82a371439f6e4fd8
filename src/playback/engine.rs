//! Playback schedule generation

use crate::error::TheoryError;
use crate::types::Progression;

use super::types::{PlaybackChord, PlaybackData};

/// Every chord is held for a half note.
pub const BEATS_PER_CHORD: f64 = 2.0;

/// Tempo of the game screen.
pub const GAME_TEMPO: u16 = 100;

/// Tempo used when the caller has no preference.
pub const DEFAULT_TEMPO: u16 = 80;

/// Lay the progression's chords end to end at `tempo` BPM.
///
/// # Errors
/// [`TheoryError::InvalidTempo`] for a tempo of zero.
pub fn schedule_progression(
    progression: &Progression,
    tempo: u16,
) -> Result<PlaybackData, TheoryError> {
    if tempo == 0 {
        return Err(TheoryError::InvalidTempo(tempo));
    }

    let chords = progression
        .chords
        .iter()
        .enumerate()
        .map(|(i, chord)| PlaybackChord {
            roman: chord.roman.clone(),
            notes: chord.notes.clone(),
            midi_notes: chord.notes.iter().map(|n| n.midi()).collect(),
            start_time: i as f64 * BEATS_PER_CHORD,
            duration: BEATS_PER_CHORD,
        })
        .collect();

    Ok(PlaybackData { tempo, chords })
}
