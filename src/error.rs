//! # Error Types
//!
//! This module defines all error types for the progression engine.
//!
//! Chord-resolution problems (a pool symbol missing from a key map) are handled
//! inside the generator by skipping the draw. Only structural problems reach the
//! caller:
//! - `InvalidNote` / `InvalidKey` - malformed note tokens or key labels
//! - `UnknownStyle` / `UnknownLevel` - catalog lookups that cannot be satisfied
//! - `Catalog` - a custom level catalog failed to load or validate
//! - `GenerationExhausted` - no playable chord could be drawn from a pool
//! - `InvalidTempo` - a playback schedule was requested at 0 BPM
//!
//! ## Usage
//! ```rust
//! use chordcraft::{generate_progression, Style, TheoryError};
//!
//! match generate_progression(1, Style::Major) {
//!     Ok(progression) => println!("{}", progression.key),
//!     Err(TheoryError::UnknownLevel { level_id, style }) => {
//!         eprintln!("no level {} for {}", level_id, style);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TheoryError {
    /// A note token could not be split into a pitch class and an octave.
    ///
    /// # Example
    /// ```
    /// # use chordcraft::TheoryError;
    /// let err = TheoryError::InvalidNote("H4".to_string());
    /// assert_eq!(err.to_string(), "Invalid note token: H4");
    /// ```
    #[error("Invalid note token: {0}")]
    InvalidNote(String),

    /// A key label such as `"C Major"` could not be parsed.
    ///
    /// # Example
    /// ```
    /// # use chordcraft::TheoryError;
    /// let err = TheoryError::InvalidKey("Q Major".to_string());
    /// assert_eq!(err.to_string(), "Invalid key: Q Major");
    /// ```
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// A style tag outside the closed set of styles.
    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    /// Neither the requested level nor any other level carries the style.
    ///
    /// # Example
    /// ```
    /// # use chordcraft::TheoryError;
    /// let err = TheoryError::UnknownLevel {
    ///     level_id: 42,
    ///     style: "CITY_POP".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "No level 42 configured for style CITY_POP");
    /// ```
    #[error("No level {level_id} configured for style {style}")]
    UnknownLevel { level_id: u32, style: String },

    /// A level catalog failed to load or validate.
    #[error("Invalid level catalog: {0}")]
    Catalog(String),

    /// Every draw from a chord pool was rejected.
    ///
    /// Only happens with a misconfigured pool; the generator gives up instead of looping.
    ///
    /// # Example
    /// ```
    /// # use chordcraft::TheoryError;
    /// let err = TheoryError::GenerationExhausted {
    ///     level_id: 3,
    ///     attempts: 1000,
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Level 3: no playable chord after 1000 draws"
    /// );
    /// ```
    #[error("Level {level_id}: no playable chord after {attempts} draws")]
    GenerationExhausted { level_id: u32, attempts: usize },

    /// Playback was requested at a tempo of zero.
    #[error("Invalid tempo: {0} BPM")]
    InvalidTempo(u16),
}
