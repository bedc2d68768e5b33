pub mod fixtures {
    use crate::models::domain::{quiz::Difficulty, Question, QuestionKind, Quiz};

    /// Creates an active, non-collaborative quiz owned by `owner_id`
    pub fn test_quiz(owner_id: &str) -> Quiz {
        Quiz::new(owner_id, "General Knowledge", Difficulty::Medium, false)
    }

    /// Creates an approved multiple-choice question
    pub fn mcq_question(quiz_id: &str, points: i32, options: &[&str], correct: &str) -> Question {
        Question::new(
            quiz_id,
            "host-1",
            "Pick the correct option",
            points,
            QuestionKind::Mcq {
                options: options.iter().map(|opt| opt.to_string()).collect(),
                correct_answer: correct.to_string(),
            },
            true,
        )
    }

    /// Creates an approved enumeration question
    pub fn enum_question(quiz_id: &str, points: i32, correct: &str) -> Question {
        Question::new(
            quiz_id,
            "host-1",
            "Name the expected item",
            points,
            QuestionKind::Enumeration {
                correct_answer: correct.to_string(),
            },
            true,
        )
    }

    /// Creates an approved identification question
    pub fn identification_question(quiz_id: &str, points: i32, correct: &str) -> Question {
        Question::new(
            quiz_id,
            "host-1",
            "Identify the term being described",
            points,
            QuestionKind::Identification {
                correct_answer: correct.to_string(),
            },
            true,
        )
    }

    /// Creates a question whose stored type tag this build does not know
    pub fn unknown_question(quiz_id: &str, points: i32) -> Question {
        Question::new(
            quiz_id,
            "host-1",
            "Legacy question",
            points,
            QuestionKind::Unknown,
            true,
        )
    }
}
