use super::*;
use crate::catalog::{Catalog, Style};
use crate::error::TheoryError;
use crate::generator::ProgressionGenerator;
use crate::pitch::PitchClass;
use crate::types::Progression;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn c_major_progression() -> Progression {
    let catalog = Catalog::builtin();
    ProgressionGenerator::new(&catalog)
        .generate_in_key(1, Style::Major, PitchClass::C, &mut StdRng::seed_from_u64(42))
        .unwrap()
}

#[test]
fn test_playback_basic_timing() {
    let progression = c_major_progression();
    let data = schedule_progression(&progression, GAME_TEMPO).unwrap();

    assert_eq!(data.tempo, 100);
    assert_eq!(data.chords.len(), 4);

    // Each chord is a half note
    assert_eq!(data.chords[0].start_time, 0.0);
    assert_eq!(data.chords[0].duration, 2.0);
    assert_eq!(data.chords[1].start_time, 2.0);
    assert_eq!(data.chords[2].start_time, 4.0);
    assert_eq!(data.chords[3].start_time, 6.0);
    assert_eq!(data.total_beats(), 8.0);
}

#[test]
fn test_playback_midi_notes() {
    let progression = c_major_progression();
    let data = schedule_progression(&progression, GAME_TEMPO).unwrap();

    // I in C: C4=60, E4=64, G4=67
    assert_eq!(data.chords[0].roman, "I");
    assert_eq!(data.chords[0].midi_notes, vec![60, 64, 67]);
    for (chord, scheduled) in progression.chords.iter().zip(&data.chords) {
        assert_eq!(chord.notes, scheduled.notes);
        assert_eq!(scheduled.midi_notes.len(), scheduled.notes.len());
    }
}

#[test]
fn test_playback_seconds() {
    let progression = c_major_progression();

    let data = schedule_progression(&progression, 120).unwrap();
    assert_eq!(data.seconds_per_beat(), 0.5);
    assert_eq!(data.chord_start_seconds(0), Some(0.0));
    assert_eq!(data.chord_start_seconds(3), Some(3.0));
    assert_eq!(data.chord_start_seconds(4), None);
    assert_eq!(data.total_seconds(Release::Piano), 5.5);
    assert_eq!(data.total_seconds(Release::Synth), 6.5);

    let slow = schedule_progression(&progression, DEFAULT_TEMPO).unwrap();
    assert_eq!(slow.seconds_per_beat(), 0.75);
    assert_eq!(slow.total_seconds(Release::Piano), 7.5);
}

#[test]
fn test_playback_rejects_zero_tempo() {
    let progression = c_major_progression();
    assert!(matches!(
        schedule_progression(&progression, 0),
        Err(TheoryError::InvalidTempo(0))
    ));
}

#[test]
fn test_playback_serializes_camel_case() {
    let progression = c_major_progression();
    let data = schedule_progression(&progression, GAME_TEMPO).unwrap();
    let json = serde_json::to_value(&data).unwrap();

    assert_eq!(json["tempo"], 100);
    assert_eq!(json["chords"][0]["notes"][0], "C4");
    assert_eq!(json["chords"][0]["midiNotes"][0], 60);
    assert_eq!(json["chords"][1]["startTime"], 2.0);
}
