use actix_web::{get, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{PopularQuizParams, QuestionListParams},
};

#[get("/api/health")]
pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.database.health_check().await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "status": "ok" })))
}

/// Must be registered before `get_quiz` so "popular" is not captured as a
/// quiz id.
#[get("/api/quizzes/popular")]
pub async fn popular_quizzes(
    state: web::Data<AppState>,
    params: web::Query<PopularQuizParams>,
) -> Result<HttpResponse, AppError> {
    params.validate()?;

    let quizzes = state
        .statistics_service
        .popular_quizzes(params.limit())
        .await?;

    Ok(HttpResponse::Ok().json(quizzes))
}

#[get("/api/quizzes/{quiz_id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[get("/api/quizzes/{quiz_id}/questions")]
pub async fn list_questions(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<QuestionListParams>,
) -> Result<HttpResponse, AppError> {
    let quiz_id = path.into_inner();
    let questions = state
        .quiz_service
        .questions(
            &quiz_id,
            params.include_pending.unwrap_or(false),
            params.user_id.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(questions))
}

#[get("/api/quizzes/{quiz_id}/statistics")]
pub async fn quiz_statistics(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let stats = state
        .statistics_service
        .quiz_statistics(&path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(stats))
}

#[get("/api/quizzes/{quiz_id}/questions/statistics")]
pub async fn question_statistics(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let stats = state
        .statistics_service
        .question_statistics(&path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(stats))
}
