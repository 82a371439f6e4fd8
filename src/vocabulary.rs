//! # Chord Vocabulary
//!
//! Chord qualities with their interval sets, and the fixed table that assigns a
//! quality to every supported Roman-numeral symbol.
//!
//! ## Supported Symbols
//! - **Major-key diatonic**: `I ii iii IV V vi vii°`
//! - **Minor-key diatonic**: `i ii° III iv v VI VII`
//! - **Sevenths**: `V7 IM7 IVM7 ii7 iii7 vi7 v7 I7`
//! - **Secondary dominants / tritone sub**: `II7 III7 VI7 bII7`
//! - **Modal interchange**: `bIII bVI bVII` (and `iv` in a major key)
//! - **Chromatic**: `I+`
//! - **Slash chord**: `IV/V`
//!
//! Anything else has no mapping; callers treat that as "unavailable" rather than an error.

use serde::Serialize;

/// Chord quality: the interval pattern stacked on a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Dominant7,
    Major7,
    Minor7,
    Sus2,
    Sus4,
}

impl ChordQuality {
    /// Semitone offsets from the root, lowest first.
    ///
    /// ```rust
    /// use chordcraft::ChordQuality;
    ///
    /// assert_eq!(ChordQuality::Major.intervals(), &[0, 4, 7]);
    /// assert_eq!(ChordQuality::Dominant7.intervals(), &[0, 4, 7, 10]);
    /// ```
    pub fn intervals(self) -> &'static [i32] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::Dominant7 => &[0, 4, 7, 10],
            ChordQuality::Major7 => &[0, 4, 7, 11],
            ChordQuality::Minor7 => &[0, 3, 7, 10],
            ChordQuality::Sus2 => &[0, 2, 7],
            ChordQuality::Sus4 => &[0, 5, 7],
        }
    }

    pub fn is_seventh(self) -> bool {
        self.intervals().len() == 4
    }
}

/// Every symbol the engine can voice, with its quality.
///
/// The slash chord `IV/V` is listed as `Sus4`: a IV triad over the fifth degree
/// sounds as a suspended dominant. Its notes are still voiced as bass + upper triad.
pub const VOCABULARY: &[(&str, ChordQuality)] = &[
    ("I", ChordQuality::Major),
    ("ii", ChordQuality::Minor),
    ("iii", ChordQuality::Minor),
    ("IV", ChordQuality::Major),
    ("V", ChordQuality::Major),
    ("vi", ChordQuality::Minor),
    ("vii°", ChordQuality::Diminished),
    ("i", ChordQuality::Minor),
    ("ii°", ChordQuality::Diminished),
    ("III", ChordQuality::Major),
    ("iv", ChordQuality::Minor),
    ("v", ChordQuality::Minor),
    ("VI", ChordQuality::Major),
    ("VII", ChordQuality::Major),
    ("V7", ChordQuality::Dominant7),
    ("IM7", ChordQuality::Major7),
    ("IVM7", ChordQuality::Major7),
    ("ii7", ChordQuality::Minor7),
    ("iii7", ChordQuality::Minor7),
    ("vi7", ChordQuality::Minor7),
    ("v7", ChordQuality::Minor7),
    ("bII7", ChordQuality::Dominant7),
    ("II7", ChordQuality::Dominant7),
    ("III7", ChordQuality::Dominant7),
    ("VI7", ChordQuality::Dominant7),
    ("bIII", ChordQuality::Major),
    ("bVI", ChordQuality::Major),
    ("bVII", ChordQuality::Major),
    ("I+", ChordQuality::Augmented),
    ("I7", ChordQuality::Dominant7),
    ("IV/V", ChordQuality::Sus4),
];

/// Look up the quality for a Roman-numeral symbol.
///
/// ```rust
/// use chordcraft::{quality_for, ChordQuality};
///
/// assert_eq!(quality_for("bVII"), Some(ChordQuality::Major));
/// assert_eq!(quality_for("vii°"), Some(ChordQuality::Diminished));
/// assert_eq!(quality_for("INVALID"), None);
/// ```
pub fn quality_for(symbol: &str) -> Option<ChordQuality> {
    VOCABULARY
        .iter()
        .find(|(name, _)| *name == symbol)
        .map(|(_, quality)| *quality)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roman::{RomanSymbol, Suffix};

    #[test]
    fn test_vocabulary_has_no_duplicates() {
        for (i, (name, _)) in VOCABULARY.iter().enumerate() {
            assert!(
                VOCABULARY[i + 1..].iter().all(|(other, _)| other != name),
                "{} listed twice",
                name
            );
        }
    }

    #[test]
    fn test_every_symbol_parses() {
        for (name, _) in VOCABULARY {
            assert!(RomanSymbol::parse(name).is_some(), "{} does not parse", name);
        }
    }

    #[test]
    fn test_qualities_agree_with_spelling() {
        // Case and suffix of the numeral should imply the table's quality.
        for (name, quality) in VOCABULARY {
            let symbol = RomanSymbol::parse(name).unwrap();
            if symbol.bass.is_some() {
                continue;
            }
            let implied = match (symbol.suffix, symbol.upper_case) {
                (Suffix::Triad, true) => ChordQuality::Major,
                (Suffix::Triad, false) => ChordQuality::Minor,
                (Suffix::Diminished, _) => ChordQuality::Diminished,
                (Suffix::Augmented, _) => ChordQuality::Augmented,
                (Suffix::Seventh, true) => ChordQuality::Dominant7,
                (Suffix::Seventh, false) => ChordQuality::Minor7,
                (Suffix::MajorSeventh, _) => ChordQuality::Major7,
            };
            assert_eq!(implied, *quality, "{}", name);
        }
    }

    #[test]
    fn test_interval_sizes() {
        assert_eq!(ChordQuality::Sus2.intervals(), &[0, 2, 7]);
        assert_eq!(ChordQuality::Sus4.intervals(), &[0, 5, 7]);
        assert!(ChordQuality::Minor7.is_seventh());
        assert!(!ChordQuality::Augmented.is_seventh());
    }
}
