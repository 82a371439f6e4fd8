pub mod api;
pub mod catalog;
pub mod error;
pub mod generator;
pub mod grading;
pub mod key;
pub mod pitch;
pub mod playback;
pub mod roman;
pub mod songs;
pub mod types;
pub mod vocabulary;

pub use api::{generate_progression, generate_progression_with_rng, get_chord_notes};
pub use catalog::{Catalog, LevelConfig, Style, StyleProfile, ALL_STYLES};
pub use error::*;
pub use generator::{GeneratorSettings, ProgressionGenerator};
pub use grading::{grade, Grade, Scoreboard};
pub use key::{Key, KeyMap, Mode};
pub use pitch::{transpose_token, Note, PitchClass, CHROMATIC};
pub use songs::{find_song, RealSong, REAL_SONGS};
pub use types::*;
pub use vocabulary::{quality_for, ChordQuality, VOCABULARY};
