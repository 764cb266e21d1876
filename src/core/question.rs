//! # Question
//!
//! A single trivia question: prompt, four options, the correct option and a
//! difficulty level. Questions are immutable once built; the only way to get
//! one is through [`Question::new`], which rejects malformed definitions.
//!
//! There is deliberately no "answered" flag here. Whether a question has
//! been used is tracked by the pool (it is removed), not by the question.

use std::fmt;

/// Number of answer options every question carries.
pub const ANSWER_COUNT: usize = 4;
/// Easiest difficulty level.
pub const MIN_DIFFICULTY: u8 = 1;
/// Hardest difficulty level.
pub const MAX_DIFFICULTY: u8 = 10;

/// Unique identifier of a question within the bank.
pub type QuestionId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionError {
    /// Difficulty outside `MIN_DIFFICULTY..=MAX_DIFFICULTY`.
    DifficultyOutOfRange { id: QuestionId, difficulty: u8 },
    /// Correct option does not point at one of the four options.
    CorrectIndexOutOfRange { id: QuestionId, index: usize },
    /// Two bank entries share an id.
    DuplicateId(QuestionId),
}

impl fmt::Display for QuestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionError::DifficultyOutOfRange { id, difficulty } => write!(
                f,
                "question {id}: difficulty {difficulty} is outside {MIN_DIFFICULTY}..={MAX_DIFFICULTY}"
            ),
            QuestionError::CorrectIndexOutOfRange { id, index } => write!(
                f,
                "question {id}: correct option {index} is outside 0..{ANSWER_COUNT}"
            ),
            QuestionError::DuplicateId(id) => write!(f, "duplicate question id {id}"),
        }
    }
}

impl std::error::Error for QuestionError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: [String; ANSWER_COUNT],
    correct_index: usize,
    difficulty: u8,
}

impl Question {
    /// Build a question, validating difficulty and the correct option index.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: [String; ANSWER_COUNT],
        correct_index: usize,
        difficulty: u8,
    ) -> Result<Self, QuestionError> {
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(QuestionError::DifficultyOutOfRange { id, difficulty });
        }
        if correct_index >= ANSWER_COUNT {
            return Err(QuestionError::CorrectIndexOutOfRange {
                id,
                index: correct_index,
            });
        }
        Ok(Self {
            id,
            prompt: prompt.into(),
            options,
            correct_index,
            difficulty,
        })
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String; ANSWER_COUNT] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }
}
