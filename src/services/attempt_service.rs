use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Answer, Attempt, Question, Quiz},
        dto::{
            request::AnswerInput,
            response::{AnswerBreakdownDto, AttemptResultDto, EphemeralResultDto},
        },
    },
    repositories::{AnswerRepository, AttemptRepository, QuizRepository, UserRepository},
    services::{grading, question_catalog::QuestionCatalogService, round2},
};

/// Attempt lifecycle per (quiz, user): no attempt, then one open attempt,
/// then a completed one. A completed attempt is terminal; starting again
/// opens a fresh row.
pub struct AttemptService {
    quizzes: Arc<dyn QuizRepository>,
    users: Arc<dyn UserRepository>,
    attempts: Arc<dyn AttemptRepository>,
    answers: Arc<dyn AnswerRepository>,
    catalog: Arc<QuestionCatalogService>,
}

impl AttemptService {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        users: Arc<dyn UserRepository>,
        attempts: Arc<dyn AttemptRepository>,
        answers: Arc<dyn AnswerRepository>,
        catalog: Arc<QuestionCatalogService>,
    ) -> Self {
        Self {
            quizzes,
            users,
            attempts,
            answers,
            catalog,
        }
    }

    /// Resume the open attempt for this (quiz, user) pair, or open a new one
    /// with the point total snapshotted from the current approved catalog.
    pub async fn resolve_or_start(&self, quiz_id: &str, user_id: &str) -> AppResult<Attempt> {
        self.require_active_quiz(quiz_id).await?;

        if let Some(open) = self.attempts.find_open(quiz_id, user_id).await? {
            return Ok(open);
        }

        let total_possible_points = self.catalog.total_points(quiz_id).await?;
        let attempt = Attempt::new(quiz_id, user_id, total_possible_points);

        match self.attempts.create(attempt).await {
            Ok(created) => Ok(created),
            Err(err) => {
                // A concurrent start for the same pair may have won the
                // insert; resume that attempt instead of surfacing the
                // duplicate.
                if let Some(open) = self.attempts.find_open(quiz_id, user_id).await? {
                    log::warn!(
                        "concurrent attempt start for quiz {} user {}, resuming {}",
                        quiz_id,
                        user_id,
                        open.id
                    );
                    Ok(open)
                } else {
                    Err(err)
                }
            }
        }
    }

    /// Grade one submitted answer and persist it. Repeat calls for the same
    /// question insert additional rows.
    pub async fn record_answer(
        &self,
        attempt_id: &str,
        question_id: &str,
        submitted_text: &str,
    ) -> AppResult<Answer> {
        let attempt = self.require_attempt(attempt_id).await?;
        if attempt.is_complete() {
            return Err(AppError::StateError(format!(
                "Attempt '{}' is already finalized",
                attempt_id
            )));
        }

        let question = self
            .catalog
            .question_by_id(question_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Question with id '{}' not found", question_id))
            })?;

        if question.quiz_id != attempt.quiz_id {
            return Err(AppError::ValidationError(format!(
                "Question '{}' does not belong to quiz '{}'",
                question_id, attempt.quiz_id
            )));
        }

        let is_correct = grading::grade(&question, submitted_text);
        self.answers
            .create(Answer::new(attempt_id, question_id, submitted_text, is_correct))
            .await
    }

    /// Close the attempt with its final score. Terminal; a second finalize is
    /// a state error.
    pub async fn finalize(&self, attempt_id: &str, score: i32) -> AppResult<Attempt> {
        let mut attempt = self.require_attempt(attempt_id).await?;
        if attempt.is_complete() {
            return Err(AppError::StateError(format!(
                "Attempt '{}' is already finalized",
                attempt_id
            )));
        }

        attempt.score = Some(score);
        attempt.completed_at = Some(Utc::now());
        self.attempts.update(attempt).await
    }

    /// One-shot participant flow: resolve the attempt, grade the full
    /// catalog, persist every answer, finalize, and report the breakdown.
    /// Questions without a submitted answer are graded against empty text.
    pub async fn submit(
        &self,
        quiz_id: &str,
        user_id: &str,
        inputs: &[AnswerInput],
    ) -> AppResult<AttemptResultDto> {
        let attempt = self.resolve_or_start(quiz_id, user_id).await?;
        let questions = self.catalog.questions_for(quiz_id, true).await?;

        let (score, _, breakdown) = grade_submission(&questions, inputs);

        for entry in &breakdown {
            self.answers
                .create(Answer::new(
                    &attempt.id,
                    &entry.question_id,
                    &entry.submitted_text,
                    entry.is_correct,
                ))
                .await?;
        }

        let attempt = self.finalize(&attempt.id, score).await?;
        let percentage = self
            .percentage_for(quiz_id, score, attempt.total_possible_points)
            .await?;

        Ok(AttemptResultDto {
            attempt_id: attempt.id,
            quiz_id: attempt.quiz_id,
            user_id: attempt.user_id,
            score,
            total_possible_points: attempt.total_possible_points,
            percentage,
            completed_at: attempt.completed_at,
            answers: breakdown,
        })
    }

    /// Host-test mode: the quiz owner previews their own quiz. Identical
    /// grading and scoring, but nothing touches storage — no attempt row, no
    /// answer rows.
    pub async fn run_ephemeral(
        &self,
        quiz_id: &str,
        user_id: &str,
        inputs: &[AnswerInput],
    ) -> AppResult<EphemeralResultDto> {
        let quiz = self.require_active_quiz(quiz_id).await?;
        if !quiz.is_owned_by(user_id) {
            return Err(AppError::Unauthorized(
                "Only the quiz owner may run a host test".to_string(),
            ));
        }

        let questions = self.catalog.questions_for(quiz_id, true).await?;
        let (score, total_possible_points, breakdown) = grade_submission(&questions, inputs);

        Ok(EphemeralResultDto {
            quiz_id: quiz_id.to_string(),
            score,
            total_possible_points,
            percentage: round2(100.0 * f64::from(score) / f64::from(total_possible_points.max(1))),
            answers: breakdown,
        })
    }

    /// Answer sheet for a completed attempt. Question text and points are
    /// joined live from the catalog; answers to since-deleted questions keep
    /// their stored text and grade.
    pub async fn attempt_result(&self, attempt_id: &str) -> AppResult<AttemptResultDto> {
        let attempt = self.require_attempt(attempt_id).await?;
        if !attempt.is_complete() {
            return Err(AppError::StateError(format!(
                "Attempt '{}' is not finalized yet",
                attempt_id
            )));
        }

        let answers = self.answers.find_by_attempt(attempt_id).await?;
        let questions = self.catalog.questions_for(&attempt.quiz_id, false).await?;
        let positions: HashMap<&str, (usize, &Question)> = questions
            .iter()
            .enumerate()
            .map(|(index, question)| (question.id.as_str(), (index, question)))
            .collect();

        let mut rows: Vec<(usize, AnswerBreakdownDto)> = answers
            .iter()
            .map(|answer| match positions.get(answer.question_id.as_str()) {
                Some((index, question)) => (
                    *index,
                    AnswerBreakdownDto {
                        question_id: answer.question_id.clone(),
                        question_text: question.text.clone(),
                        points: question.points,
                        submitted_text: answer.submitted_text.clone(),
                        is_correct: answer.is_correct,
                    },
                ),
                // Question deleted since the attempt; the graded answer
                // survives without its live metadata.
                None => (
                    usize::MAX,
                    AnswerBreakdownDto {
                        question_id: answer.question_id.clone(),
                        question_text: String::new(),
                        points: 0,
                        submitted_text: answer.submitted_text.clone(),
                        is_correct: answer.is_correct,
                    },
                ),
            })
            .collect();
        rows.sort_by_key(|(index, _)| *index);

        let score = attempt.score.unwrap_or(0);
        let percentage = self
            .percentage_for(&attempt.quiz_id, score, attempt.total_possible_points)
            .await?;

        Ok(AttemptResultDto {
            attempt_id: attempt.id,
            quiz_id: attempt.quiz_id,
            user_id: attempt.user_id,
            score,
            total_possible_points: attempt.total_possible_points,
            percentage,
            completed_at: attempt.completed_at,
            answers: rows.into_iter().map(|(_, row)| row).collect(),
        })
    }

    /// Attempt history for one user, newest first.
    pub async fn user_attempts(&self, user_id: &str) -> AppResult<Vec<Attempt>> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", user_id)))?;

        self.attempts.find_by_user(user_id).await
    }

    async fn require_active_quiz(&self, quiz_id: &str) -> AppResult<Quiz> {
        let quiz = self
            .quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))?;

        if !quiz.is_active {
            return Err(AppError::ValidationError(format!(
                "Quiz '{}' is not currently active",
                quiz_id
            )));
        }

        Ok(quiz)
    }

    async fn require_attempt(&self, attempt_id: &str) -> AppResult<Attempt> {
        self.attempts
            .find_by_id(attempt_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Attempt with id '{}' not found", attempt_id))
            })
    }

    /// Percentage against the frozen snapshot. Attempts recorded before the
    /// snapshot field existed carry a zero total and fall back to the live
    /// catalog sum, which can diverge from what was graded at the time.
    async fn percentage_for(
        &self,
        quiz_id: &str,
        score: i32,
        snapshot_total: i32,
    ) -> AppResult<f64> {
        let total = if snapshot_total > 0 {
            snapshot_total
        } else {
            self.catalog.total_points(quiz_id).await?
        };

        Ok(round2(100.0 * f64::from(score) / f64::from(total.max(1))))
    }
}

/// Walk the catalog in order and grade each question against the submitted
/// text (missing answers count as empty). Returns the score, the point total
/// over the graded questions, and the per-question breakdown.
fn grade_submission(
    questions: &[Question],
    inputs: &[AnswerInput],
) -> (i32, i32, Vec<AnswerBreakdownDto>) {
    let submitted: HashMap<&str, &str> = inputs
        .iter()
        .map(|input| (input.question_id.as_str(), input.text.as_str()))
        .collect();

    let mut score = 0;
    let mut total = 0;
    let mut breakdown = Vec::with_capacity(questions.len());

    for question in questions {
        total += question.points;
        let text = submitted
            .get(question.id.as_str())
            .copied()
            .unwrap_or("");
        let is_correct = grading::grade(question, text);
        if is_correct {
            score += question.points;
        }

        breakdown.push(AnswerBreakdownDto {
            question_id: question.id.clone(),
            question_text: question.text.clone(),
            points: question.points,
            submitted_text: text.to_string(),
            is_correct,
        });
    }

    (score, total, breakdown)
}
