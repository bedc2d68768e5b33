use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::RateQuizRequest, response::RatingSummaryDto},
};

#[post("/api/quizzes/{quiz_id}/rating")]
pub async fn rate_quiz(
    state: web::Data<AppState>,
    path: web::Path<String>,
    request: web::Json<RateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let quiz_id = path.into_inner();
    let rating = state
        .rating_service
        .rate(&quiz_id, &request.user_id, &request.attempt_id, request.rating)
        .await?;

    Ok(HttpResponse::Ok().json(rating))
}

#[get("/api/quizzes/{quiz_id}/rating")]
pub async fn rating_summary(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz_id = path.into_inner();
    let average_rating = state.rating_service.average_rating(&quiz_id).await?;
    let rating_count = state.rating_service.rating_count(&quiz_id).await?;

    Ok(HttpResponse::Ok().json(RatingSummaryDto {
        average_rating,
        rating_count,
    }))
}
