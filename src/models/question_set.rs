use std::slice;

use crate::error::QuizError;
use crate::models::{Question, RawQuestion};

/// Validated, immutable, non-empty ordered collection of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

// A constructed set is never empty.
#[allow(clippy::len_without_is_empty)]
impl QuestionSet {
    /// Build a question set from raw records.
    ///
    /// Construction is all-or-nothing: the first malformed record aborts it.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::MalformedQuestion` with the offending record's
    /// position, or `QuizError::EmptySet` when there are no records.
    pub fn build<I>(raw: I) -> Result<Self, QuizError>
    where
        I: IntoIterator<Item = RawQuestion>,
    {
        let questions = raw
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                Question::from_raw(record)
                    .map_err(|reason| QuizError::MalformedQuestion { index, reason })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if questions.is_empty() {
            return Err(QuizError::EmptySet);
        }

        Ok(Self { questions })
    }

    /// # Errors
    ///
    /// Returns `QuizError::IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&Question, QuizError> {
        self.questions.get(index).ok_or(QuizError::IndexOutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn iter(&self) -> slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedReason;

    fn raw(n: usize) -> Vec<RawQuestion> {
        (0..n)
            .map(|i| RawQuestion::new(format!("Q{i}"), ["a", "b", "c"], (i % 3) as i64))
            .collect()
    }

    #[test]
    fn test_build_keeps_order_and_length() {
        for n in 1..=6 {
            let set = QuestionSet::build(raw(n)).unwrap();
            assert_eq!(set.len(), n);
            for (i, question) in set.iter().enumerate() {
                assert_eq!(question.text(), format!("Q{i}"));
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            QuestionSet::build(Vec::<RawQuestion>::new()),
            Err(QuizError::EmptySet)
        ));
    }

    #[test]
    fn test_one_bad_record_rejects_all() {
        let mut records = raw(3);
        records[1].correct_index = Some(3);

        match QuestionSet::build(records) {
            Err(QuizError::MalformedQuestion { index, reason }) => {
                assert_eq!(index, 1);
                assert_eq!(
                    reason,
                    MalformedReason::CorrectIndexOutOfRange {
                        correct_index: 3,
                        options: 3,
                    }
                );
            }
            other => panic!("expected MalformedQuestion, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_correct_index() {
        let mut records = raw(2);
        records[0].correct_index = Some(-1);
        assert!(matches!(
            QuestionSet::build(records),
            Err(QuizError::MalformedQuestion { index: 0, .. })
        ));
    }

    #[test]
    fn test_get_out_of_range() {
        let set = QuestionSet::build(raw(2)).unwrap();
        assert_eq!(set.get(1).unwrap().text(), "Q1");
        assert!(matches!(
            set.get(2),
            Err(QuizError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }
}
