use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{HostTestRequest, StartAttemptRequest, SubmitAttemptRequest},
};

#[post("/api/quizzes/{quiz_id}/attempts")]
pub async fn start_attempt(
    state: web::Data<AppState>,
    path: web::Path<String>,
    request: web::Json<StartAttemptRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let quiz_id = path.into_inner();
    let attempt = state
        .attempt_service
        .resolve_or_start(&quiz_id, &request.user_id)
        .await?;

    Ok(HttpResponse::Ok().json(attempt))
}

#[post("/api/quizzes/{quiz_id}/attempts/submit")]
pub async fn submit_attempt(
    state: web::Data<AppState>,
    path: web::Path<String>,
    request: web::Json<SubmitAttemptRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let quiz_id = path.into_inner();
    let result = state
        .attempt_service
        .submit(&quiz_id, &request.user_id, &request.answers)
        .await?;

    Ok(HttpResponse::Ok().json(result))
}

#[post("/api/quizzes/{quiz_id}/host-test")]
pub async fn host_test(
    state: web::Data<AppState>,
    path: web::Path<String>,
    request: web::Json<HostTestRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let quiz_id = path.into_inner();
    let result = state
        .attempt_service
        .run_ephemeral(&quiz_id, &request.user_id, &request.answers)
        .await?;

    Ok(HttpResponse::Ok().json(result))
}

#[get("/api/attempts/{attempt_id}/result")]
pub async fn attempt_result(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let attempt_id = path.into_inner();
    let result = state.attempt_service.attempt_result(&attempt_id).await?;

    Ok(HttpResponse::Ok().json(result))
}

#[get("/api/users/{user_id}/attempts")]
pub async fn user_attempts(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let attempts = state.attempt_service.user_attempts(&user_id).await?;

    Ok(HttpResponse::Ok().json(attempts))
}
