use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::Quiz, dto::response::QuestionDto},
    repositories::QuizRepository,
    services::question_catalog::QuestionCatalogService,
};

pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    catalog: Arc<QuestionCatalogService>,
}

impl QuizService {
    pub fn new(quizzes: Arc<dyn QuizRepository>, catalog: Arc<QuestionCatalogService>) -> Self {
        Self { quizzes, catalog }
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        let quiz = self
            .quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;

        Ok(quiz)
    }

    /// Catalog listing through participant-safe DTOs. Pending questions are
    /// only visible to the quiz owner.
    pub async fn questions(
        &self,
        quiz_id: &str,
        include_pending: bool,
        requesting_user_id: Option<&str>,
    ) -> AppResult<Vec<QuestionDto>> {
        let quiz = self.get_quiz(quiz_id).await?;

        if include_pending {
            let is_owner = requesting_user_id
                .map(|user_id| quiz.is_owned_by(user_id))
                .unwrap_or(false);
            if !is_owner {
                return Err(AppError::Unauthorized(
                    "Only the quiz owner may view pending questions".to_string(),
                ));
            }
        }

        let questions = self
            .catalog
            .questions_for(quiz_id, !include_pending)
            .await?;

        Ok(questions.into_iter().map(QuestionDto::from).collect())
    }
}
