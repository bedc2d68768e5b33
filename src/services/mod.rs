pub mod attempt_service;
pub mod grading;
pub mod question_catalog;
pub mod quiz_service;
pub mod rating_service;
pub mod statistics_service;

pub use attempt_service::AttemptService;
pub use question_catalog::QuestionCatalogService;
pub use quiz_service::QuizService;
pub use rating_service::RatingService;
pub use statistics_service::StatisticsService;

/// Round half away from zero to 2 decimal places, the precision every
/// reported average and percentage uses.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
