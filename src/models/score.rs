/// Running count of correct and incorrect answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    correct: usize,
    incorrect: usize,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a tracker from known counts.
    pub fn from_counts(correct: usize, incorrect: usize) -> Self {
        Self { correct, incorrect }
    }

    /// Count one answer.
    pub fn record(&mut self, is_correct: bool) {
        if is_correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn incorrect(&self) -> usize {
        self.incorrect
    }

    pub fn answered(&self) -> usize {
        self.correct.saturating_add(self.incorrect)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
