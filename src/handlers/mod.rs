pub mod attempt_handler;
pub mod quiz_handler;
pub mod rating_handler;

pub use attempt_handler::{attempt_result, host_test, start_attempt, submit_attempt, user_attempts};
pub use quiz_handler::{
    get_quiz, health_check, list_questions, popular_quizzes, question_statistics, quiz_statistics,
};
pub use rating_handler::{rate_quiz, rating_summary};
