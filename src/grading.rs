//! Answer grading
//!
//! Compares the player's guessed symbols with the progression position by
//! position. Wording the feedback is left to the presentation layer; this module
//! only reports which slots are right and where the first mistake is.

use serde::Serialize;

/// Points for a correct generated round.
pub const ROUND_POINTS: u32 = 10;

/// Points for a correct real-song round.
pub const REAL_SONG_POINTS: u32 = 50;

/// Result of grading one round.
///
/// # Fields
/// - `slots`: one flag per correct chord, in order
/// - `first_mistake`: index of the first wrong slot, the one feedback should focus on
/// - `is_correct`: every slot right
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub slots: Vec<bool>,
    pub first_mistake: Option<usize>,
    pub is_correct: bool,
}

impl Grade {
    pub fn correct_count(&self) -> usize {
        self.slots.iter().filter(|ok| **ok).count()
    }
}

/// Grade `guess` against `correct`, slot by slot.
///
/// Missing or empty guesses count as wrong; extra guesses are ignored.
///
/// ```rust
/// use chordcraft::grading::grade;
///
/// let result = grade(&["I", "vi", "IV", "V"], &[Some("I"), Some("vi"), Some("ii"), None]);
/// assert_eq!(result.slots, [true, true, false, false]);
/// assert_eq!(result.first_mistake, Some(2));
/// assert!(!result.is_correct);
/// ```
pub fn grade<S: AsRef<str>>(correct: &[S], guess: &[Option<S>]) -> Grade {
    let slots: Vec<bool> = correct
        .iter()
        .enumerate()
        .map(|(i, answer)| {
            guess
                .get(i)
                .and_then(Option::as_ref)
                .is_some_and(|g| g.as_ref() == answer.as_ref())
        })
        .collect();
    let first_mistake = slots.iter().position(|ok| !ok);
    Grade {
        is_correct: first_mistake.is_none(),
        first_mistake,
        slots,
    }
}

/// Running score across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    pub score: u32,
    pub round: u32,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self { score: 0, round: 1 }
    }
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `points` if the round was answered correctly. Returns the points awarded.
    pub fn record(&mut self, grade: &Grade, points: u32) -> u32 {
        let awarded = if grade.is_correct { points } else { 0 };
        self.score += awarded;
        awarded
    }

    pub fn next_round(&mut self) {
        self.round += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_all_correct() {
        let result = grade(&["I", "IV", "V", "I"], &[Some("I"), Some("IV"), Some("V"), Some("I")]);
        assert!(result.is_correct);
        assert_eq!(result.first_mistake, None);
        assert_eq!(result.correct_count(), 4);
    }

    #[test]
    fn test_grade_is_position_wise() {
        // Right chords in the wrong order are wrong.
        let result = grade(&["I", "IV", "V", "I"], &[Some("IV"), Some("I"), Some("V"), Some("I")]);
        assert_eq!(result.slots, [false, false, true, true]);
        assert_eq!(result.first_mistake, Some(0));
        assert_eq!(result.correct_count(), 2);
    }

    #[test]
    fn test_grade_short_guess() {
        let result = grade(&["i", "VI"], &[Some("i")]);
        assert_eq!(result.slots, [true, false]);
        assert_eq!(result.first_mistake, Some(1));
    }

    #[test]
    fn test_grade_owned_strings() {
        let correct = vec!["V7".to_string(), "IM7".to_string()];
        let guess = vec![Some("V7".to_string()), Some("IM7".to_string())];
        assert!(grade(&correct, &guess).is_correct);
    }

    #[test]
    fn test_scoreboard() {
        let mut board = Scoreboard::new();
        assert_eq!(board.round, 1);

        let right = grade(&["I"], &[Some("I")]);
        let wrong = grade(&["I"], &[Some("V")]);

        assert_eq!(board.record(&right, ROUND_POINTS), 10);
        board.next_round();
        assert_eq!(board.record(&wrong, ROUND_POINTS), 0);
        board.next_round();
        assert_eq!(board.record(&right, REAL_SONG_POINTS), 50);

        assert_eq!(board.score, 60);
        assert_eq!(board.round, 3);

        board.reset();
        assert_eq!(board, Scoreboard { score: 0, round: 1 });
    }
}
