use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoAnswerRepository, MongoAttemptRepository, MongoQuestionRepository,
        MongoQuizRepository, MongoRatingRepository, MongoUserRepository,
    },
    services::{
        AttemptService, QuestionCatalogService, QuizService, RatingService, StatisticsService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub quiz_service: Arc<QuizService>,
    pub attempt_service: Arc<AttemptService>,
    pub statistics_service: Arc<StatisticsService>,
    pub rating_service: Arc<RatingService>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let database = Database::connect(&config).await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&database));
        quiz_repository.ensure_indexes().await?;

        let question_repository = Arc::new(MongoQuestionRepository::new(&database));
        question_repository.ensure_indexes().await?;

        let attempt_repository = Arc::new(MongoAttemptRepository::new(&database));
        attempt_repository.ensure_indexes().await?;

        let answer_repository = Arc::new(MongoAnswerRepository::new(&database));
        answer_repository.ensure_indexes().await?;

        let rating_repository = Arc::new(MongoRatingRepository::new(&database));
        rating_repository.ensure_indexes().await?;

        let user_repository = Arc::new(MongoUserRepository::new(&database));

        let catalog = Arc::new(QuestionCatalogService::new(question_repository.clone()));

        let quiz_service = Arc::new(QuizService::new(quiz_repository.clone(), catalog.clone()));
        let attempt_service = Arc::new(AttemptService::new(
            quiz_repository.clone(),
            user_repository,
            attempt_repository.clone(),
            answer_repository.clone(),
            catalog.clone(),
        ));
        let statistics_service = Arc::new(StatisticsService::new(
            quiz_repository.clone(),
            attempt_repository.clone(),
            answer_repository,
            catalog,
        ));
        let rating_service = Arc::new(RatingService::new(
            quiz_repository,
            attempt_repository,
            rating_repository,
        ));

        Ok(Self {
            database,
            quiz_service,
            attempt_service,
            statistics_service,
            rating_service,
        })
    }
}
