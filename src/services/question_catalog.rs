use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::domain::Question,
    repositories::QuestionRepository,
};

/// Read-only view of a quiz's question set. The playable set is the approved
/// questions in creation order; that order defines question numbering and is
/// stable across calls within one attempt.
pub struct QuestionCatalogService {
    questions: Arc<dyn QuestionRepository>,
}

impl QuestionCatalogService {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// With `approved_only = false` (host management view) pending questions
    /// are included; they carry `is_approved = false` and never count toward
    /// the playable set or point totals.
    pub async fn questions_for(
        &self,
        quiz_id: &str,
        approved_only: bool,
    ) -> AppResult<Vec<Question>> {
        self.questions.find_by_quiz(quiz_id, approved_only).await
    }

    pub async fn question_by_id(&self, question_id: &str) -> AppResult<Option<Question>> {
        self.questions.find_by_id(question_id).await
    }

    /// Sum of points over approved questions only.
    pub async fn total_points(&self, quiz_id: &str) -> AppResult<i32> {
        let questions = self.questions.find_by_quiz(quiz_id, true).await?;
        Ok(questions.iter().map(|q| q.points).sum())
    }
}
