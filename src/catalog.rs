//! # Level and Style Catalog
//!
//! Static configuration for every difficulty level.
//!
//! ## Styles
//! A [`Style`] is the closed set of harmonic flavours the game teaches. Each one
//! resolves, through an exhaustive `match`, to a [`StyleProfile`]: which mode the
//! key map is built in, how the key is labelled, which chord opens a random
//! progression, and any hand-written template progressions.
//!
//! ## Levels
//! A [`LevelConfig`] pairs a level id with a style and the pool of Roman symbols the
//! player chooses from. The built-in catalog holds 12 levels; a custom catalog can
//! be loaded from YAML:
//!
//! ```yaml
//! generator:
//!   template_probability: 0.4
//! levels:
//!   - id: 1
//!     style: MAJOR
//!     pool: [I, ii, iii, IV, V, vi]
//! ```
//!
//! ## Related Modules
//! - `generator` - consumes the catalog
//! - `key` - builds the key map a pool is resolved against

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::generator::GeneratorSettings;
use crate::key::{Key, KeyMap, Mode};
use crate::vocabulary::quality_for;

/// Harmonic style of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Style {
    Major,
    Minor,
    Mixolydian,
    ModalInterchange,
    SecondaryDominant,
    MinorPlagal,
    Chromatic,
    TritoneSub,
    Dorian,
    Oudou,
    CityPop,
}

pub const ALL_STYLES: [Style; 11] = [
    Style::Major,
    Style::Minor,
    Style::Mixolydian,
    Style::ModalInterchange,
    Style::SecondaryDominant,
    Style::MinorPlagal,
    Style::Chromatic,
    Style::TritoneSub,
    Style::Dorian,
    Style::Oudou,
    Style::CityPop,
];

/// Everything the generator needs to know about a style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleProfile {
    pub mode: Mode,
    /// Appended to the tonic in the key label.
    pub label: &'static str,
    /// First chord of a randomly drawn progression.
    pub tonic_symbol: &'static str,
    /// Recognisable real-world progressions, played verbatim some of the time.
    pub templates: &'static [[&'static str; 4]],
}

/// "Just the Two of Us", "Ride on Time" and friends.
const CITY_POP_TEMPLATES: [[&str; 4]; 4] = [
    ["IVM7", "III7", "vi7", "v7"],
    ["IVM7", "IV/V", "IM7", "v7"],
    ["IVM7", "III7", "vi7", "IV/V"],
    ["IM7", "v7", "IVM7", "IV/V"],
];

impl Style {
    pub fn profile(self) -> StyleProfile {
        match self {
            Style::Major => StyleProfile {
                mode: Mode::Major,
                label: "Major",
                tonic_symbol: "I",
                templates: &[],
            },
            Style::Minor => StyleProfile {
                mode: Mode::Minor,
                label: "Minor",
                tonic_symbol: "i",
                templates: &[],
            },
            Style::Mixolydian => StyleProfile {
                mode: Mode::Major,
                label: "Mixolydian",
                tonic_symbol: "I",
                templates: &[],
            },
            Style::ModalInterchange => StyleProfile {
                mode: Mode::Major,
                label: "Major (Borrowed)",
                tonic_symbol: "I",
                templates: &[],
            },
            Style::SecondaryDominant => StyleProfile {
                mode: Mode::Major,
                label: "Major (Sec. Dom)",
                tonic_symbol: "I",
                templates: &[],
            },
            Style::MinorPlagal => StyleProfile {
                mode: Mode::Major,
                label: "Major (Minor iv)",
                tonic_symbol: "I",
                templates: &[],
            },
            Style::Chromatic => StyleProfile {
                mode: Mode::Major,
                label: "Major (Chromatic)",
                tonic_symbol: "I",
                templates: &[],
            },
            Style::TritoneSub => StyleProfile {
                mode: Mode::Major,
                label: "Major (Jazz)",
                tonic_symbol: "IM7",
                templates: &[],
            },
            Style::Dorian => StyleProfile {
                mode: Mode::Minor,
                label: "Dorian (Coltrane)",
                tonic_symbol: "i",
                templates: &[],
            },
            Style::Oudou => StyleProfile {
                mode: Mode::Major,
                label: "Major (Royal Road)",
                tonic_symbol: "IVM7",
                templates: &[],
            },
            Style::CityPop => StyleProfile {
                mode: Mode::Major,
                label: "Major (Tatsuro)",
                tonic_symbol: "IVM7",
                templates: &CITY_POP_TEMPLATES,
            },
        }
    }

    pub fn mode(self) -> Mode {
        self.profile().mode
    }

    /// Tag used in YAML, JSON and on the command line.
    pub fn tag(self) -> &'static str {
        match self {
            Style::Major => "MAJOR",
            Style::Minor => "MINOR",
            Style::Mixolydian => "MIXOLYDIAN",
            Style::ModalInterchange => "MODAL_INTERCHANGE",
            Style::SecondaryDominant => "SECONDARY_DOMINANT",
            Style::MinorPlagal => "MINOR_PLAGAL",
            Style::Chromatic => "CHROMATIC",
            Style::TritoneSub => "TRITONE_SUB",
            Style::Dorian => "DORIAN",
            Style::Oudou => "OUDOU",
            Style::CityPop => "CITY_POP",
        }
    }

    /// Display label for a key in this style, e.g. `"D Major (Jazz)"`.
    pub fn key_label(self, key: Key) -> String {
        format!("{} {}", key.tonic, self.profile().label)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Style {
    type Err = TheoryError;

    /// Accepts the tag in any case, with `-` or `_` separators (`city-pop`, `CITY_POP`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        ALL_STYLES
            .iter()
            .copied()
            .find(|style| style.tag() == normalized)
            .ok_or_else(|| TheoryError::UnknownStyle(s.to_string()))
    }
}

/// One difficulty level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub id: u32,
    pub style: Style,
    pub pool: Vec<String>,
}

impl LevelConfig {
    pub fn new(id: u32, style: Style, pool: &[&str]) -> Self {
        Self {
            id,
            style,
            pool: pool.iter().map(|s| s.to_string()).collect(),
        }
    }
}

const BUILTIN_LEVELS: [(u32, Style, &[&str]); 12] = [
    (1, Style::Major, &["I", "ii", "iii", "IV", "V", "vi"]),
    (2, Style::Minor, &["i", "III", "iv", "v", "VI", "VII"]),
    (3, Style::Major, &["I", "IV", "V", "V7", "vi"]),
    (4, Style::Mixolydian, &["I", "IV", "V", "bVII", "vi"]),
    (5, Style::ModalInterchange, &["I", "IV", "V", "bIII", "bVI", "bVII"]),
    (6, Style::SecondaryDominant, &["I", "IV", "V", "II7", "III7", "VI7"]),
    (7, Style::MinorPlagal, &["I", "IV", "iv", "V", "vi"]),
    (8, Style::Chromatic, &["I", "V", "vi", "I+", "I7"]),
    (9, Style::TritoneSub, &["IM7", "ii7", "V7", "bII7", "vi7"]),
    (10, Style::Dorian, &["i", "IV", "ii", "bVII", "III"]),
    (11, Style::Oudou, &["IVM7", "V7", "iii7", "vi7", "IM7"]),
    (12, Style::CityPop, &["IM7", "IVM7", "III7", "vi7", "v7", "IV/V"]),
];

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    generator: GeneratorSettings,
    levels: Vec<LevelConfig>,
}

/// The set of levels plus generator tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    levels: Vec<LevelConfig>,
    settings: GeneratorSettings,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Build a catalog without validating it.
    pub fn new(levels: Vec<LevelConfig>, settings: GeneratorSettings) -> Self {
        Self { levels, settings }
    }

    /// The 12 levels the game ships with.
    pub fn builtin() -> Self {
        let levels = BUILTIN_LEVELS
            .iter()
            .map(|(id, style, pool)| LevelConfig::new(*id, *style, pool))
            .collect();
        Self::new(levels, GeneratorSettings::default())
    }

    /// Parse and validate a YAML catalog.
    pub fn from_yaml(content: &str) -> Result<Self, TheoryError> {
        let raw: RawCatalog =
            serde_yaml::from_str(content).map_err(|e| TheoryError::Catalog(e.to_string()))?;
        let catalog = Self::new(raw.levels, raw.generator);
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TheoryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| TheoryError::Catalog(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    pub fn levels(&self) -> &[LevelConfig] {
        &self.levels
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    pub fn level(&self, id: u32) -> Option<&LevelConfig> {
        self.levels.iter().find(|level| level.id == id)
    }

    /// Find the level to generate for.
    ///
    /// Prefers the level with this id and style; otherwise the first level of the
    /// style, so a style can be played from any level screen.
    pub fn resolve(&self, level_id: u32, style: Style) -> Result<&LevelConfig, TheoryError> {
        self.levels
            .iter()
            .find(|level| level.id == level_id && level.style == style)
            .or_else(|| self.levels.iter().find(|level| level.style == style))
            .ok_or_else(|| TheoryError::UnknownLevel {
                level_id,
                style: style.to_string(),
            })
    }

    /// Check the catalog can always produce a progression.
    ///
    /// Unknown pool symbols are tolerated (the generator skips them) but logged;
    /// a pool with no playable symbol at all, duplicate ids or out-of-range
    /// settings are errors.
    pub fn validate(&self) -> Result<(), TheoryError> {
        self.settings.validate()?;

        if self.levels.is_empty() {
            return Err(TheoryError::Catalog("no levels defined".to_string()));
        }

        for (i, level) in self.levels.iter().enumerate() {
            if self.levels[..i].iter().any(|other| other.id == level.id) {
                return Err(TheoryError::Catalog(format!(
                    "level {} defined more than once",
                    level.id
                )));
            }

            let mode = level.style.mode();
            let map = KeyMap::build(Key::new(mode.default_tonic(), mode));
            let mut playable = 0;
            for symbol in &level.pool {
                if quality_for(symbol).is_some() && map.contains(symbol) {
                    playable += 1;
                } else {
                    log::warn!("level {}: chord {:?} is not available", level.id, symbol);
                }
            }
            if playable == 0 {
                return Err(TheoryError::Catalog(format!(
                    "level {} has no playable chords",
                    level.id
                )));
            }
        }
        Ok(())
    }
}
