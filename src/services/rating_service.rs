use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{
        rating::{MAX_RATING, MIN_RATING},
        Rating,
    },
    repositories::{AttemptRepository, QuizRepository, RatingRepository},
    services::round2,
};

/// Ratings are tied to completed attempts: one rating per (user, quiz,
/// attempt), so repeat players can re-rate after each new attempt but never
/// twice for the same one.
pub struct RatingService {
    quizzes: Arc<dyn QuizRepository>,
    attempts: Arc<dyn AttemptRepository>,
    ratings: Arc<dyn RatingRepository>,
}

impl RatingService {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        attempts: Arc<dyn AttemptRepository>,
        ratings: Arc<dyn RatingRepository>,
    ) -> Self {
        Self {
            quizzes,
            attempts,
            ratings,
        }
    }

    /// Upsert the user's rating for one completed attempt, then refresh the
    /// quiz's cached average. Resubmitting replaces the previous value.
    pub async fn rate(
        &self,
        quiz_id: &str,
        user_id: &str,
        attempt_id: &str,
        value: i32,
    ) -> AppResult<Rating> {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(AppError::ValidationError(format!(
                "Rating must be between {} and {}, got {}",
                MIN_RATING, MAX_RATING, value
            )));
        }

        self.quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))?;

        let attempt = self
            .attempts
            .find_by_id(attempt_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Attempt with id '{}' not found", attempt_id))
            })?;

        if attempt.user_id != user_id {
            return Err(AppError::Unauthorized(
                "Only the attempt's owner may rate it".to_string(),
            ));
        }
        if attempt.quiz_id != quiz_id {
            return Err(AppError::ValidationError(format!(
                "Attempt '{}' does not belong to quiz '{}'",
                attempt_id, quiz_id
            )));
        }
        if !attempt.is_complete() {
            return Err(AppError::StateError(
                "Quizzes can only be rated after the attempt is finalized".to_string(),
            ));
        }

        let rating = self
            .ratings
            .upsert(Rating::new(quiz_id, user_id, attempt_id, value))
            .await?;

        // Not atomic with the upsert; concurrent raters converge because
        // every recomputation reads the full rating set.
        let average = self.average_rating(quiz_id).await?;
        self.quizzes.set_average_rating(quiz_id, average).await?;

        Ok(rating)
    }

    /// Mean over all ratings for the quiz, rounded to 2 decimals. `None`
    /// when the quiz has never been rated — never 0, so "no data" stays
    /// distinguishable from a low score.
    pub async fn average_rating(&self, quiz_id: &str) -> AppResult<Option<f64>> {
        let ratings = self.ratings.find_by_quiz(quiz_id).await?;
        if ratings.is_empty() {
            return Ok(None);
        }

        let sum: i64 = ratings.iter().map(|rating| i64::from(rating.value)).sum();
        Ok(Some(round2(sum as f64 / ratings.len() as f64)))
    }

    pub async fn rating_count(&self, quiz_id: &str) -> AppResult<u64> {
        self.ratings.count_by_quiz(quiz_id).await
    }
}
