//! # Progression Generator
//!
//! Turns a level and style into a fresh four-chord [`Progression`].
//!
//! ## Algorithm
//! 1. Resolve the level in the catalog and pick a random tonic for the style's mode.
//! 2. Build the key map for that tonic.
//! 3. If the style has templates, play one verbatim with `template_probability`.
//! 4. Otherwise open on the style's tonic chord and fill the remaining slots with
//!    uniform draws from the pool. Draws missing from the key map are skipped; a
//!    draw that repeats the previous chord is rejected with `repeat_rejection`.
//!
//! A pool that never yields a playable chord fails with
//! [`TheoryError::GenerationExhausted`] after `max_draws` attempts for one slot.
//!
//! ## Randomness
//! Every entry point takes the random source explicitly so tests can seed it:
//!
//! ```rust
//! use chordcraft::{Catalog, ProgressionGenerator, Style};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let catalog = Catalog::builtin();
//! let generator = ProgressionGenerator::new(&catalog);
//! let a = generator.generate(1, Style::Major, &mut StdRng::seed_from_u64(7)).unwrap();
//! let b = generator.generate(1, Style::Major, &mut StdRng::seed_from_u64(7)).unwrap();
//! assert_eq!(a, b);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::{Builder, Uuid};

use crate::catalog::{Catalog, LevelConfig, Style};
use crate::error::TheoryError;
use crate::key::{Key, KeyMap};
use crate::pitch::PitchClass;
use crate::types::{Chord, Progression, PROGRESSION_LENGTH};

/// Tuning knobs for the generator, loadable from the catalog YAML.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Chance that a style with templates plays one verbatim.
    pub template_probability: f64,
    /// Chance that a draw repeating the previous chord is thrown away.
    pub repeat_rejection: f64,
    /// Draws allowed per slot before giving up.
    pub max_draws: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            template_probability: 0.4,
            repeat_rejection: 0.7,
            max_draws: 1000,
        }
    }
}

impl GeneratorSettings {
    pub fn validate(&self) -> Result<(), TheoryError> {
        for (name, value) in [
            ("template_probability", self.template_probability),
            ("repeat_rejection", self.repeat_rejection),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(TheoryError::Catalog(format!(
                    "{} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }
        if self.max_draws == 0 {
            return Err(TheoryError::Catalog("max_draws must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Generates progressions for the levels of one catalog.
#[derive(Debug, Clone, Copy)]
pub struct ProgressionGenerator<'a> {
    catalog: &'a Catalog,
}

impl<'a> ProgressionGenerator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Generate a progression in a random key.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        level_id: u32,
        style: Style,
        rng: &mut R,
    ) -> Result<Progression, TheoryError> {
        let tonics = style.mode().tonics();
        let tonic = tonics[rng.random_range(0..tonics.len())];
        self.generate_in_key(level_id, style, tonic, rng)
    }

    /// Generate a progression with a fixed tonic.
    pub fn generate_in_key<R: Rng + ?Sized>(
        &self,
        level_id: u32,
        style: Style,
        tonic: PitchClass,
        rng: &mut R,
    ) -> Result<Progression, TheoryError> {
        let level = self.catalog.resolve(level_id, style)?;
        let profile = style.profile();
        let key = Key::new(tonic, profile.mode);
        let map = KeyMap::build(key);
        let label = style.key_label(key);
        let settings = self.catalog.settings();
        log::debug!("level {} ({}): generating in {}", level.id, style, label);

        if !profile.templates.is_empty() && chance(rng, settings.template_probability) {
            let template = profile.templates[rng.random_range(0..profile.templates.len())];
            log::debug!("playing template {:?}", template);
            let chords = template
                .iter()
                .map(|roman| Chord {
                    roman: roman.to_string(),
                    notes: map.notes(roman),
                    display_name: roman.to_string(),
                })
                .collect();
            return Ok(Progression {
                id: new_id(rng),
                key: label,
                chords,
            });
        }

        let mut chords = Vec::with_capacity(PROGRESSION_LENGTH);
        if let Some(notes) = map.get(profile.tonic_symbol) {
            chords.push(Chord {
                roman: profile.tonic_symbol.to_string(),
                notes: notes.to_vec(),
                display_name: format!("{} ({})", profile.tonic_symbol, label),
            });
        }

        while chords.len() < PROGRESSION_LENGTH {
            let chord = draw_chord(level, &map, chords.last(), settings, rng)?;
            chords.push(chord);
        }

        Ok(Progression {
            id: new_id(rng),
            key: label,
            chords,
        })
    }
}

/// Draw one pool chord that resolves in `map`, biased away from repeating `previous`.
fn draw_chord<R: Rng + ?Sized>(
    level: &LevelConfig,
    map: &KeyMap,
    previous: Option<&Chord>,
    settings: &GeneratorSettings,
    rng: &mut R,
) -> Result<Chord, TheoryError> {
    let exhausted = TheoryError::GenerationExhausted {
        level_id: level.id,
        attempts: settings.max_draws,
    };
    if level.pool.is_empty() {
        return Err(exhausted);
    }

    for _ in 0..settings.max_draws {
        let symbol = &level.pool[rng.random_range(0..level.pool.len())];
        let Some(notes) = map.get(symbol) else {
            log::trace!("{} unavailable in {}", symbol, map.key());
            continue;
        };
        let repeats = previous.is_some_and(|prev| prev.roman == *symbol);
        if repeats && chance(rng, settings.repeat_rejection) {
            log::trace!("rejected repeat of {}", symbol);
            continue;
        }
        return Ok(Chord {
            roman: symbol.clone(),
            notes: notes.to_vec(),
            display_name: symbol.clone(),
        });
    }
    Err(exhausted)
}

/// `true` with probability `p`; out-of-range values saturate.
fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.random::<f64>() < p
}

fn new_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.random()).into_uuid()
}
