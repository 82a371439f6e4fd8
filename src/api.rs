//! # Public API
//!
//! The two entry points the game calls.
//!
//! - [`generate_progression()`] - a fresh four-chord round for a level and style
//! - [`get_chord_notes()`] - notes for one Roman symbol, e.g. to play a reference chord
//!
//! ## Typical Usage
//!
//! ```rust
//! use chordcraft::{generate_progression, get_chord_notes, Style};
//!
//! let progression = generate_progression(1, Style::Major)?;
//! assert_eq!(progression.chords.len(), 4);
//!
//! // Play the player's guess back in the same key.
//! let notes = get_chord_notes("V", Style::Major, Some(&progression.key));
//! assert_eq!(notes.len(), 3);
//! # Ok::<(), chordcraft::TheoryError>(())
//! ```
//!
//! ## Deterministic Usage
//!
//! Tests and replays pass their own random source:
//!
//! ```rust
//! use chordcraft::{generate_progression_with_rng, Style};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(2024);
//! let progression = generate_progression_with_rng(12, Style::CityPop, &mut rng)?;
//! assert!(progression.key.ends_with("Major (Tatsuro)"));
//! # Ok::<(), chordcraft::TheoryError>(())
//! ```

use rand::Rng;

use crate::{Catalog, Key, KeyMap, Note, Progression, ProgressionGenerator, Style, TheoryError};

/// Generate a progression from the built-in catalog using the thread-local RNG.
///
/// # Errors
/// Returns [`TheoryError::UnknownLevel`] if no level carries `style`.
pub fn generate_progression(level_id: u32, style: Style) -> Result<Progression, TheoryError> {
    generate_progression_with_rng(level_id, style, &mut rand::rng())
}

/// Generate a progression from the built-in catalog with an explicit random source.
pub fn generate_progression_with_rng<R: Rng + ?Sized>(
    level_id: u32,
    style: Style,
    rng: &mut R,
) -> Result<Progression, TheoryError> {
    let catalog = Catalog::builtin();
    ProgressionGenerator::new(&catalog).generate(level_id, style, rng)
}

/// Notes for `roman`.
///
/// With a key label (`"C Major"`, `"F# Minor"`, `"D Dorian (Coltrane)"`), the chord
/// is voiced in that key. Without one, it is voiced in the style's reference key:
/// A minor for minor-mode styles, C major for the rest.
///
/// Never fails: an unknown symbol or an unparseable key yields an empty vector.
///
/// ```rust
/// use chordcraft::{get_chord_notes, Style};
///
/// let notes: Vec<String> = get_chord_notes("bVII", Style::Mixolydian, Some("C Major"))
///     .iter()
///     .map(|n| n.to_string())
///     .collect();
/// assert_eq!(notes, ["A#4", "D5", "F5"]);
///
/// assert!(get_chord_notes("INVALID", Style::Major, Some("C Major")).is_empty());
/// ```
pub fn get_chord_notes(roman: &str, style: Style, key: Option<&str>) -> Vec<Note> {
    let key = match key {
        Some(label) => match Key::parse(label) {
            Ok(key) => key,
            Err(e) => {
                log::warn!("cannot voice {}: {}", roman, e);
                return Vec::new();
            }
        },
        None => {
            let mode = style.mode();
            Key::new(mode.default_tonic(), mode)
        }
    };
    KeyMap::build(key).notes(roman)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ALL_STYLES;
    use crate::pitch::PitchClass;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn names(notes: &[Note]) -> Vec<String> {
        notes.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_dominant_seventh_in_c() {
        let notes = get_chord_notes("V7", Style::Major, Some("C Major"));
        assert_eq!(names(&notes), ["G4", "B4", "D5", "F5"]);
    }

    #[test]
    fn test_minor_tonic_in_a() {
        let notes = get_chord_notes("i", Style::Minor, Some("A Minor"));
        assert_eq!(names(&notes), ["A4", "C5", "E5"]);
    }

    #[test]
    fn test_transposes_with_key() {
        let c = get_chord_notes("I", Style::Major, Some("C Major"));
        let g = get_chord_notes("I", Style::Major, Some("G Major"));
        assert_eq!(c[0].pitch, PitchClass::C);
        assert_eq!(g[0].pitch, PitchClass::G);
    }

    #[test]
    fn test_diminished() {
        let notes = get_chord_notes("vii°", Style::Major, Some("C Major"));
        assert_eq!(names(&notes), ["B4", "D5", "F5"]);
    }

    #[test]
    fn test_without_key_uses_reference_key() {
        assert_eq!(names(&get_chord_notes("I", Style::Major, None)), ["C4", "E4", "G4"]);
        assert_eq!(names(&get_chord_notes("i", Style::Dorian, None)), ["A4", "C5", "E5"]);
        assert_eq!(
            names(&get_chord_notes("IV/V", Style::CityPop, None)),
            ["G3", "F4", "A4", "C5"]
        );
        assert_eq!(
            names(&get_chord_notes("II7", Style::SecondaryDominant, None)),
            ["D4", "F#4", "A4", "C5"]
        );
    }

    #[test]
    fn test_never_fails() {
        assert!(get_chord_notes("INVALID", Style::Major, Some("C Major")).is_empty());
        assert!(get_chord_notes("I", Style::Major, Some("")).is_empty());
        assert!(get_chord_notes("I", Style::Major, Some("Z Major")).is_empty());
        assert!(get_chord_notes("", Style::Minor, None).is_empty());
    }

    #[test]
    fn test_generated_keys_round_trip_through_lookup() {
        // The label on a progression must voice its own chords identically.
        let mut rng = StdRng::seed_from_u64(17);
        for style in ALL_STYLES {
            for _ in 0..24 {
                let progression = generate_progression_with_rng(1, style, &mut rng).unwrap();
                for chord in &progression.chords {
                    let notes = get_chord_notes(&chord.roman, style, Some(&progression.key));
                    assert_eq!(notes, chord.notes, "{} in {}", chord.roman, progression.key);
                }
            }
        }
    }

    #[test]
    fn test_plagal_label_stays_major() {
        // "Minor iv" names the borrowed chord, not the key.
        let notes = get_chord_notes("III", Style::MinorPlagal, Some("C Major (Minor iv)"));
        assert_eq!(names(&notes), ["E4", "G#4", "B4"]);
        let iv = get_chord_notes("iv", Style::MinorPlagal, Some("C Major (Minor iv)"));
        assert_eq!(names(&iv), ["F4", "G#4", "C5"]);
    }
}
