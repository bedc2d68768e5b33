pub mod answer;
pub mod attempt;
pub mod question;
pub mod quiz;
pub mod rating;
pub mod user;

pub use answer::Answer;
pub use attempt::Attempt;
pub use question::{Question, QuestionKind};
pub use quiz::{Difficulty, Quiz};
pub use rating::Rating;
pub use user::User;
