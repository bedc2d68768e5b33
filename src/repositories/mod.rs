pub mod answer_repository;
pub mod attempt_repository;
pub mod question_repository;
pub mod quiz_repository;
pub mod rating_repository;
pub mod user_repository;

pub use answer_repository::{AnswerRepository, MongoAnswerRepository};
pub use attempt_repository::{AttemptRepository, MongoAttemptRepository};
pub use question_repository::{MongoQuestionRepository, QuestionRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use rating_repository::{MongoRatingRepository, RatingRepository};
pub use user_repository::{MongoUserRepository, UserRepository};
