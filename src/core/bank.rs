//! # Question Bank
//!
//! The full, read-only set of questions. Built once at startup and shared
//! behind an `Arc`; every pool resets from it.
//!
//! ```text
//! level  1 ██ ██ ██     3 questions per level,
//! level  2 ██ ██ ██     10 levels,
//!   ...                 30 questions total.
//! level 10 ██ ██ ██
//! ```

use std::collections::HashSet;

use super::question::{ANSWER_COUNT, Question, QuestionError, QuestionId};

type Entry = (QuestionId, &'static str, [&'static str; ANSWER_COUNT], usize, u8);

/// Compiled-in question data: (id, prompt, options, correct option, difficulty).
const STANDARD_ENTRIES: &[Entry] = &[
    // Level 1
    (1, "What is the capital of France?", ["London", "Paris", "Madrid", "Berlin"], 1, 1),
    (2, "How many continents are there?", ["5", "6", "7", "8"], 2, 1),
    (3, "What color is the sky on a clear day?", ["Green", "Blue", "Red", "Yellow"], 1, 1),
    // Level 2
    (4, "Which planet is known as the red planet?", ["Venus", "Mars", "Jupiter", "Saturn"], 1, 2),
    (5, "In what year did humans first land on the Moon?", ["1967", "1969", "1971", "1973"], 1, 2),
    (6, "How many legs does a spider have?", ["6", "8", "10", "12"], 1, 2),
    // Level 3
    (7, "Who painted the Mona Lisa?", ["Van Gogh", "Picasso", "Leonardo da Vinci", "Michelangelo"], 2, 3),
    (8, "Which is the largest ocean in the world?", ["Atlantic", "Indian", "Arctic", "Pacific"], 3, 3),
    (9, "In which country did the tango originate?", ["Brazil", "Argentina", "Spain", "Mexico"], 1, 3),
    // Level 4
    (10, "Which chemical element has the symbol 'Au'?", ["Silver", "Gold", "Iron", "Aluminium"], 1, 4),
    (11, "In which country is the Eiffel Tower?", ["Italy", "Spain", "France", "Germany"], 2, 4),
    (12, "What is the fastest land animal?", ["Lion", "Cheetah", "Antelope", "Horse"], 1, 4),
    // Level 5
    (13, "What is the longest river in the world?", ["Nile", "Amazon", "Yangtze", "Mississippi"], 1, 5),
    (14, "Who wrote 'Don Quixote'?", ["Lope de Vega", "Cervantes", "Shakespeare", "Góngora"], 1, 5),
    (15, "How many sides does a hexagon have?", ["4", "5", "6", "7"], 2, 5),
    // Level 6
    (16, "How many bones are in the adult human body?", ["196", "206", "216", "226"], 1, 6),
    (17, "In what year did World War II begin?", ["1937", "1939", "1941", "1943"], 1, 6),
    (18, "Which instrument measures earthquakes?", ["Barometer", "Seismograph", "Thermometer", "Anemometer"], 1, 6),
    // Level 7
    (19, "What is the highest mountain in the world?", ["K2", "Everest", "Kilimanjaro", "Aconcagua"], 1, 7),
    (20, "Which scientist developed the theory of relativity?", ["Newton", "Einstein", "Galileo", "Hawking"], 1, 7),
    (21, "What is the largest planet in the solar system?", ["Saturn", "Jupiter", "Neptune", "Uranus"], 1, 7),
    // Level 8
    (22, "What is the currency of Japan?", ["Won", "Yuan", "Yen", "Dong"], 2, 8),
    (23, "On which continent is Egypt?", ["Asia", "Africa", "Europe", "Oceania"], 1, 8),
    (24, "Who wrote 'Romeo and Juliet'?", ["Dickens", "Shakespeare", "Cervantes", "Molière"], 1, 8),
    // Level 9
    (25, "Which language has the most native speakers?", ["English", "Mandarin Chinese", "Spanish", "Hindi"], 1, 9),
    (26, "Which gas is essential for breathing?", ["Hydrogen", "Nitrogen", "Oxygen", "Carbon dioxide"], 2, 9),
    (27, "In what year did the Berlin Wall fall?", ["1987", "1989", "1991", "1993"], 1, 9),
    // Level 10
    (28, "What is the largest country by area?", ["Canada", "China", "United States", "Russia"], 3, 10),
    (29, "Who was the first president of the United States?", ["Jefferson", "Washington", "Lincoln", "Adams"], 1, 10),
    (30, "What is the most abundant metal in the Earth's crust?", ["Iron", "Aluminium", "Copper", "Gold"], 1, 10),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// The compiled-in bank. Fails only if the table above is malformed.
    pub fn standard() -> Result<Self, QuestionError> {
        let questions = STANDARD_ENTRIES
            .iter()
            .map(|(id, prompt, options, correct, difficulty)| {
                Question::new(*id, *prompt, options.map(String::from), *correct, *difficulty)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_questions(questions)
    }

    /// Build a bank from already-validated questions, rejecting duplicate ids.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, QuestionError> {
        let mut seen = HashSet::with_capacity(questions.len());
        for q in &questions {
            if !seen.insert(q.id()) {
                return Err(QuestionError::DuplicateId(q.id()));
            }
        }
        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.get(id).is_some()
    }

    pub fn at_difficulty(&self, level: u8) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.difficulty() == level)
    }

    pub(crate) fn questions(&self) -> &[Question] {
        &self.questions
    }
}
