//! # Difficulty Curve
//!
//! Maps the 1-based question number to a difficulty level:
//!
//! ```text
//! level = ceil(ordinal / questions_to_win * 10)
//!
//! ordinal   1  2  3  4  5  6  7  8  9 10 11 12 13 14 15
//! level     1  2  2  3  4  4  5  6  6  7  8  8  9 10 10    (15 to win)
//! ```

use super::question::{MAX_DIFFICULTY, MIN_DIFFICULTY};

/// Correct answers needed to win.
pub const DEFAULT_QUESTIONS_TO_WIN: u32 = 15;

/// Difficulty for `ordinal` out of `questions_to_win`, clamped into the valid range.
pub fn level(ordinal: u32, questions_to_win: u32) -> u8 {
    let total = u64::from(questions_to_win.max(1));
    let scaled = (u64::from(ordinal) * u64::from(MAX_DIFFICULTY)).div_ceil(total);
    scaled.clamp(u64::from(MIN_DIFFICULTY), u64::from(MAX_DIFFICULTY)) as u8
}

/// A curve with its length fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyCurve {
    questions_to_win: u32,
}

impl DifficultyCurve {
    pub fn new(questions_to_win: u32) -> Self {
        Self {
            questions_to_win: questions_to_win.max(1),
        }
    }

    pub fn level(&self, ordinal: u32) -> u8 {
        level(ordinal, self.questions_to_win)
    }

    pub fn questions_to_win(&self) -> u32 {
        self.questions_to_win
    }
}

impl Default for DifficultyCurve {
    fn default() -> Self {
        Self::new(DEFAULT_QUESTIONS_TO_WIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_points() {
        assert_eq!(level(1, 15), 1);
        assert_eq!(level(2, 15), 2);
        assert_eq!(level(5, 15), 4);
        assert_eq!(level(8, 15), 6);
        assert_eq!(level(11, 15), 8);
        assert_eq!(level(15, 15), 10);
    }

    #[test]
    fn test_non_decreasing() {
        let levels: Vec<u8> = (1..=15).map(|n| level(n, 15)).collect();
        assert!(levels.windows(2).all(|w| w[0] <= w[1]), "{levels:?}");
    }

    #[test]
    fn test_stays_in_range() {
        assert_eq!(level(0, 15), MIN_DIFFICULTY);
        assert_eq!(level(40, 15), MAX_DIFFICULTY);
        assert_eq!(level(1, 0), MAX_DIFFICULTY);
    }

    #[test]
    fn test_ten_to_win_is_one_level_per_question() {
        for n in 1..=10 {
            assert_eq!(level(n, 10), n as u8);
        }
    }

    #[test]
    fn test_curve_uses_fixed_length() {
        let curve = DifficultyCurve::default();
        assert_eq!(curve.questions_to_win(), 15);
        assert_eq!(curve.level(8), 6);
        assert_eq!(DifficultyCurve::new(0).questions_to_win(), 1);
    }
}
