//! Final score report.

use std::fmt;

use crate::models::ScoreTracker;

/// Qualitative tier attached to a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Excellent,
    VeryGood,
    Good,
    NeedsPractice,
    ReviewMaterial,
}

impl Grade {
    /// Pick the tier for a percentage. Thresholds are inclusive lower bounds.
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Self::Excellent,
            75..=89 => Self::VeryGood,
            60..=74 => Self::Good,
            40..=59 => Self::NeedsPractice,
            _ => Self::ReviewMaterial,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::VeryGood => "very good",
            Self::Good => "good",
            Self::NeedsPractice => "needs practice",
            Self::ReviewMaterial => "review material",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub correct_count: usize,
    pub incorrect_count: usize,
    pub total_count: usize,
    /// Share of answered questions that were correct, rounded down, 0..=100.
    pub percentage: u32,
    pub message: Grade,
}

/// Compute the summary for a score over `total` questions.
///
/// Nothing answered (or no questions at all) yields 0%.
pub fn compute(score: &ScoreTracker, total: usize) -> Summary {
    let answered = score.answered();
    let percentage = if total == 0 || answered == 0 {
        0
    } else {
        // u128 holds correct * 100 for any usize count; correct <= answered.
        let percentage = score.correct() as u128 * 100 / answered as u128;
        u32::try_from(percentage).unwrap_or(100)
    };

    Summary {
        correct_count: score.correct(),
        incorrect_count: score.incorrect(),
        total_count: total,
        percentage,
        message: Grade::from_percentage(percentage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(correct: usize, incorrect: usize) -> ScoreTracker {
        let mut score = ScoreTracker::new();
        (0..correct).for_each(|_| score.record(true));
        (0..incorrect).for_each(|_| score.record(false));
        score
    }

    #[test]
    fn test_nothing_answered() {
        let summary = compute(&ScoreTracker::new(), 5);
        assert_eq!(summary.percentage, 0);
        assert_eq!(summary.message, Grade::ReviewMaterial);
        assert_eq!(summary.total_count, 5);

        assert_eq!(compute(&score(1, 0), 0).percentage, 0);
    }

    #[test]
    fn test_percentage_rounds_down() {
        assert_eq!(compute(&score(1, 2), 3).percentage, 33);
        assert_eq!(compute(&score(2, 1), 3).percentage, 66);
        assert_eq!(compute(&score(1, 1), 2).percentage, 50);
        assert_eq!(compute(&score(5, 0), 5).percentage, 100);
    }

    #[test]
    fn test_large_counts_do_not_overflow() {
        let summary = compute(&ScoreTracker::from_counts(42_949_673, 0), 42_949_673);
        assert_eq!(summary.percentage, 100);
        assert_eq!(summary.message, Grade::Excellent);

        let half = usize::MAX / 2;
        let summary = compute(&ScoreTracker::from_counts(half, half), usize::MAX);
        assert_eq!(summary.percentage, 50);
        assert_eq!(summary.correct_count, half);
        assert_eq!(summary.total_count, usize::MAX);
    }

    #[test]
    fn test_grade_boundaries() {
        let cases = [
            (100, Grade::Excellent),
            (90, Grade::Excellent),
            (89, Grade::VeryGood),
            (75, Grade::VeryGood),
            (74, Grade::Good),
            (60, Grade::Good),
            (59, Grade::NeedsPractice),
            (40, Grade::NeedsPractice),
            (39, Grade::ReviewMaterial),
            (0, Grade::ReviewMaterial),
        ];
        for (percentage, grade) in cases {
            assert_eq!(Grade::from_percentage(percentage), grade, "{percentage}%");
        }
    }

    #[test]
    fn test_counts_and_message() {
        let summary = compute(&score(3, 1), 4);
        assert_eq!(summary.correct_count, 3);
        assert_eq!(summary.incorrect_count, 1);
        assert_eq!(summary.percentage, 75);
        assert_eq!(summary.message.to_string(), "very good");
    }
}
