//! Real-song rounds
//!
//! Clips of recorded songs whose progressions the player identifies instead of a
//! synthesized one. The clip itself is played by the UI; here we only keep the
//! answer key and resolve it to notes so reference chords can be played back.

use serde::Serialize;

use crate::catalog::Style;
use crate::error::TheoryError;
use crate::key::{Key, KeyMap};
use crate::types::Chord;

/// A song clip and its progression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealSong {
    pub id: &'static str,
    pub title: &'static str,
    pub artist: &'static str,
    pub youtube_id: &'static str,
    /// Clip start, in seconds into the video.
    pub start_time: u32,
    pub end_time: u32,
    pub style: Style,
    pub key: &'static str,
    pub progression: [&'static str; 4],
}

pub const REAL_SONGS: [RealSong; 2] = [
    RealSong {
        id: "stand_by_me",
        title: "Stand By Me",
        artist: "Ben E. King",
        youtube_id: "hwZNL7QVJjE",
        start_time: 0,
        end_time: 18,
        style: Style::Major,
        key: "A Major",
        progression: ["I", "vi", "IV", "V"],
    },
    RealSong {
        id: "hello_adele",
        title: "Hello",
        artist: "Adele",
        youtube_id: "YQHsXMglC9A",
        start_time: 83,
        end_time: 96,
        style: Style::Minor,
        key: "F Minor",
        progression: ["i", "III", "VII", "VI"],
    },
];

pub fn find_song(id: &str) -> Option<&'static RealSong> {
    REAL_SONGS.iter().find(|song| song.id == id)
}

impl RealSong {
    pub fn clip_seconds(&self) -> u32 {
        self.end_time.saturating_sub(self.start_time)
    }

    /// Resolve the song's progression in its own key.
    pub fn chords(&self) -> Result<Vec<Chord>, TheoryError> {
        let key = Key::parse(self.key)?;
        let map = KeyMap::build(key);
        Ok(self
            .progression
            .iter()
            .map(|roman| Chord {
                roman: roman.to_string(),
                notes: map.notes(roman),
                display_name: roman.to_string(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_song() {
        assert_eq!(find_song("stand_by_me").unwrap().title, "Stand By Me");
        assert!(find_song("never_gonna").is_none());
    }

    #[test]
    fn test_stand_by_me_chords() {
        let chords = find_song("stand_by_me").unwrap().chords().unwrap();
        let roots: Vec<String> = chords.iter().map(|c| c.notes[0].to_string()).collect();
        // A, F#m, D, E
        assert_eq!(roots, ["A4", "F#5", "D5", "E5"]);
    }

    #[test]
    fn test_hello_chords() {
        let chords = find_song("hello_adele").unwrap().chords().unwrap();
        let roots: Vec<String> = chords.iter().map(|c| c.notes[0].pitch.to_string()).collect();
        // Fm, Ab, Eb, Db
        assert_eq!(roots, ["F", "G#", "D#", "C#"]);
    }

    #[test]
    fn test_every_song_resolves_and_matches_style() {
        for song in &REAL_SONGS {
            let key = Key::parse(song.key).unwrap();
            assert_eq!(key.mode, song.style.mode(), "{}", song.id);
            for chord in song.chords().unwrap() {
                assert_eq!(chord.notes.len(), 3, "{} {}", song.id, chord.roman);
            }
            assert!(song.clip_seconds() > 0);
        }
    }
}
