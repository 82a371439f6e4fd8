//! # Playback Module
//!
//! Turn a generated progression into a timed chord schedule for the audio layer.
//!
//! ## Purpose
//! The engine never makes sound. This module only computes what an external
//! synthesizer needs:
//! 1. **Pitches** - note tokens and MIDI numbers for every chord
//! 2. **Timing** - start and duration of each chord in beats
//! 3. **Tail** - how long to wait after the last chord before reporting completion
//!
//! ## Sub-modules
//! - `types` - PlaybackData, PlaybackChord, Release type definitions
//! - `engine` - Schedule generation
//!
//! ## Entry Point
//! [`schedule_progression()`] - Convert a progression to playback data
//!
//! ## Example
//! ```rust
//! use chordcraft::playback::{schedule_progression, Release};
//! use chordcraft::{Catalog, ProgressionGenerator, Style, PitchClass};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let catalog = Catalog::builtin();
//! let progression = ProgressionGenerator::new(&catalog)
//!     .generate_in_key(1, Style::Major, PitchClass::C, &mut StdRng::seed_from_u64(1))
//!     .unwrap();
//!
//! let data = schedule_progression(&progression, 100).unwrap();
//! assert_eq!(data.chords.len(), 4);
//! assert_eq!(data.chords[0].midi_notes, vec![60, 64, 67]); // C4 E4 G4
//! assert_eq!(data.chords[1].start_time, 2.0);
//! assert_eq!(data.total_seconds(Release::Piano), 4.8 + 1.5);
//! ```
//!
//! ## Timing
//! Every chord is a half note (2 beats). The game screen plays at
//! [`GAME_TEMPO`] BPM; [`DEFAULT_TEMPO`] is the audio service's fallback.

mod engine;
mod types;

#[cfg(test)]
mod tests;

pub use engine::{schedule_progression, BEATS_PER_CHORD, DEFAULT_TEMPO, GAME_TEMPO};
pub use types::{PlaybackChord, PlaybackData, Release};
