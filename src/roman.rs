//! Roman-numeral symbol parsing
//!
//! Splits a symbol such as `bVII`, `IVM7` or `IV/V` into its scale degree, flat
//! prefix, case, suffix and optional slash bass.
//!
//! # Grammar
//! ```text
//! symbol  := ["b"] numeral [suffix] ["/" numeral]
//! numeral := I | II | III | IV | V | VI | VII   (either all upper or all lower case)
//! suffix  := "°" | "+" | "7" | "M7"
//! ```

/// Uppercase numerals by scale degree.
const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Major-scale semitone offset of each degree. Non-diatonic symbols are rooted here.
pub const CHROMATIC_DEGREES: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// What follows the numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    Triad,
    Diminished,
    Augmented,
    Seventh,
    MajorSeventh,
}

/// A parsed Roman-numeral symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomanSymbol {
    /// Scale degree, 0 = I.
    pub degree: usize,
    pub flat: bool,
    pub upper_case: bool,
    pub suffix: Suffix,
    /// Degree of the slash bass, if any.
    pub bass: Option<usize>,
}

impl RomanSymbol {
    /// Parse a symbol, returning `None` for anything outside the grammar.
    ///
    /// ```rust
    /// use chordcraft::roman::{RomanSymbol, Suffix};
    ///
    /// let sym = RomanSymbol::parse("bVII").unwrap();
    /// assert_eq!(sym.degree, 6);
    /// assert!(sym.flat);
    ///
    /// let slash = RomanSymbol::parse("IV/V").unwrap();
    /// assert_eq!(slash.bass, Some(4));
    ///
    /// assert!(RomanSymbol::parse("Gm7").is_none());
    /// ```
    pub fn parse(symbol: &str) -> Option<Self> {
        let (upper, bass) = match symbol.split_once('/') {
            Some((upper, bass)) => {
                let (degree, _) = parse_numeral(bass)?;
                (upper, Some(degree))
            }
            None => (symbol, None),
        };

        let (flat, rest) = match upper.strip_prefix('b') {
            Some(rest) => (true, rest),
            None => (false, upper),
        };

        let numeral_len = rest
            .find(|c: char| !matches!(c, 'I' | 'V' | 'i' | 'v'))
            .unwrap_or(rest.len());
        let (numeral, suffix) = rest.split_at(numeral_len);
        let (degree, upper_case) = parse_numeral(numeral)?;

        let suffix = match suffix {
            "" => Suffix::Triad,
            "°" => Suffix::Diminished,
            "+" => Suffix::Augmented,
            "7" => Suffix::Seventh,
            "M7" => Suffix::MajorSeventh,
            _ => return None,
        };

        Some(Self {
            degree,
            flat,
            upper_case,
            suffix,
            bass,
        })
    }

    /// Root offset from the tonic when the degree is taken from the major scale.
    ///
    /// A `b` prefix lowers the degree by one semitone.
    pub fn chromatic_offset(&self) -> i32 {
        CHROMATIC_DEGREES[self.degree] - i32::from(self.flat)
    }
}

/// Returns (degree, is_upper_case).
fn parse_numeral(numeral: &str) -> Option<(usize, bool)> {
    let upper_case = numeral.chars().all(|c| c.is_ascii_uppercase());
    let lower_case = numeral.chars().all(|c| c.is_ascii_lowercase());
    if numeral.is_empty() || !(upper_case || lower_case) {
        return None;
    }
    let normalized = numeral.to_ascii_uppercase();
    let degree = NUMERALS.iter().position(|n| *n == normalized)?;
    Some((degree, upper_case))
}
