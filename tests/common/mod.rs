#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use lsquiz_server::{
    errors::{AppError, AppResult},
    models::domain::{
        quiz::Difficulty,
        user::UserRole,
        Answer, Attempt, Question, QuestionKind, Quiz, Rating, User,
    },
    repositories::{
        AnswerRepository, AttemptRepository, QuestionRepository, QuizRepository, RatingRepository,
        UserRepository,
    },
    services::{
        AttemptService, QuestionCatalogService, QuizService, RatingService, StatisticsService,
    },
};

pub struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<HashMap<String, Quiz>>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self {
            quizzes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn insert(&self, quiz: Quiz) {
        self.quizzes.write().await.insert(quiz.id.clone(), quiz);
    }

    pub async fn get(&self, id: &str) -> Option<Quiz> {
        self.quizzes.read().await.get(id).cloned()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        Ok(self.quizzes.read().await.get(id).cloned())
    }

    async fn find_active(&self) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        let mut items: Vec<_> = quizzes.values().filter(|q| q.is_active).cloned().collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(items)
    }

    async fn set_average_rating(
        &self,
        quiz_id: &str,
        average_rating: Option<f64>,
    ) -> AppResult<()> {
        let mut quizzes = self.quizzes.write().await;
        if let Some(quiz) = quizzes.get_mut(quiz_id) {
            quiz.average_rating = average_rating;
        }
        Ok(())
    }
}

pub struct InMemoryQuestionRepository {
    questions: Arc<RwLock<Vec<Question>>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self {
            questions: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn insert(&self, question: Question) {
        self.questions.write().await.push(question);
    }

    pub async fn remove(&self, question_id: &str) {
        self.questions
            .write()
            .await
            .retain(|q| q.id != question_id);
    }

    pub async fn set_points(&self, question_id: &str, points: i32) {
        let mut questions = self.questions.write().await;
        if let Some(question) = questions.iter_mut().find(|q| q.id == question_id) {
            question.points = points;
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        Ok(self
            .questions
            .read()
            .await
            .iter()
            .find(|q| q.id == id)
            .cloned())
    }

    async fn find_by_quiz(&self, quiz_id: &str, approved_only: bool) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        let mut items: Vec<_> = questions
            .iter()
            .filter(|q| q.quiz_id == quiz_id && (!approved_only || q.is_approved))
            .cloned()
            .collect();
        // Stable sort: insertion order breaks created_at ties.
        items.sort_by_key(|q| q.created_at);
        Ok(items)
    }
}

pub struct InMemoryAttemptRepository {
    attempts: Arc<RwLock<HashMap<String, Attempt>>>,
}

impl InMemoryAttemptRepository {
    pub fn new() -> Self {
        Self {
            attempts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn count_all(&self) -> usize {
        self.attempts.read().await.len()
    }

    pub async fn insert_raw(&self, attempt: Attempt) {
        self.attempts
            .write()
            .await
            .insert(attempt.id.clone(), attempt);
    }
}

#[async_trait]
impl AttemptRepository for InMemoryAttemptRepository {
    async fn create(&self, attempt: Attempt) -> AppResult<Attempt> {
        let mut attempts = self.attempts.write().await;
        if attempts.contains_key(&attempt.id) {
            return Err(AppError::AlreadyExists(format!(
                "Attempt with id '{}' already exists",
                attempt.id
            )));
        }

        // Mirrors the storage-layer guard: one open attempt per (quiz, user).
        let open_exists = attempts.values().any(|a| {
            a.quiz_id == attempt.quiz_id && a.user_id == attempt.user_id && !a.is_complete()
        });
        if open_exists {
            return Err(AppError::AlreadyExists(format!(
                "Open attempt for quiz '{}' and user '{}' already exists",
                attempt.quiz_id, attempt.user_id
            )));
        }

        attempts.insert(attempt.id.clone(), attempt.clone());
        Ok(attempt)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Attempt>> {
        Ok(self.attempts.read().await.get(id).cloned())
    }

    async fn find_open(&self, quiz_id: &str, user_id: &str) -> AppResult<Option<Attempt>> {
        let attempts = self.attempts.read().await;
        Ok(attempts
            .values()
            .find(|a| a.quiz_id == quiz_id && a.user_id == user_id && !a.is_complete())
            .cloned())
    }

    async fn update(&self, attempt: Attempt) -> AppResult<Attempt> {
        let mut attempts = self.attempts.write().await;
        if !attempts.contains_key(&attempt.id) {
            return Err(AppError::NotFound(format!(
                "Attempt with id '{}' not found",
                attempt.id
            )));
        }
        attempts.insert(attempt.id.clone(), attempt.clone());
        Ok(attempt)
    }

    async fn find_completed_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<Attempt>> {
        let attempts = self.attempts.read().await;
        let mut items: Vec<_> = attempts
            .values()
            .filter(|a| a.quiz_id == quiz_id && a.is_complete())
            .cloned()
            .collect();
        items.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(items)
    }

    async fn count_completed_by_quiz(&self, quiz_id: &str) -> AppResult<u64> {
        let attempts = self.attempts.read().await;
        Ok(attempts
            .values()
            .filter(|a| a.quiz_id == quiz_id && a.is_complete())
            .count() as u64)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Attempt>> {
        let attempts = self.attempts.read().await;
        let mut items: Vec<_> = attempts
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        Ok(items)
    }
}

pub struct InMemoryAnswerRepository {
    answers: Arc<RwLock<Vec<Answer>>>,
}

impl InMemoryAnswerRepository {
    pub fn new() -> Self {
        Self {
            answers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn count_all(&self) -> usize {
        self.answers.read().await.len()
    }
}

#[async_trait]
impl AnswerRepository for InMemoryAnswerRepository {
    async fn create(&self, answer: Answer) -> AppResult<Answer> {
        self.answers.write().await.push(answer.clone());
        Ok(answer)
    }

    async fn find_by_attempt(&self, attempt_id: &str) -> AppResult<Vec<Answer>> {
        let answers = self.answers.read().await;
        Ok(answers
            .iter()
            .filter(|a| a.attempt_id == attempt_id)
            .cloned()
            .collect())
    }

    async fn find_by_attempts(&self, attempt_ids: &[String]) -> AppResult<Vec<Answer>> {
        let answers = self.answers.read().await;
        Ok(answers
            .iter()
            .filter(|a| attempt_ids.contains(&a.attempt_id))
            .cloned()
            .collect())
    }
}

pub struct InMemoryRatingRepository {
    ratings: Arc<RwLock<HashMap<(String, String, String), Rating>>>,
}

impl InMemoryRatingRepository {
    pub fn new() -> Self {
        Self {
            ratings: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn count_all(&self) -> usize {
        self.ratings.read().await.len()
    }
}

#[async_trait]
impl RatingRepository for InMemoryRatingRepository {
    async fn upsert(&self, rating: Rating) -> AppResult<Rating> {
        let key = (
            rating.user_id.clone(),
            rating.quiz_id.clone(),
            rating.attempt_id.clone(),
        );
        self.ratings.write().await.insert(key, rating.clone());
        Ok(rating)
    }

    async fn find_by_attempt(&self, attempt_id: &str) -> AppResult<Option<Rating>> {
        let ratings = self.ratings.read().await;
        Ok(ratings
            .values()
            .find(|r| r.attempt_id == attempt_id)
            .cloned())
    }

    async fn find_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<Rating>> {
        let ratings = self.ratings.read().await;
        let mut items: Vec<_> = ratings
            .values()
            .filter(|r| r.quiz_id == quiz_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(items)
    }

    async fn count_by_quiz(&self, quiz_id: &str) -> AppResult<u64> {
        let ratings = self.ratings.read().await;
        Ok(ratings.values().filter(|r| r.quiz_id == quiz_id).count() as u64)
    }
}

pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id.clone(), user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }
}

pub fn make_user(id: &str, role: UserRole) -> User {
    User {
        id: id.to_string(),
        name: format!("User {}", id),
        email: format!("{}@example.com", id),
        role,
        created_at: Some(Utc::now()),
    }
}

pub fn make_quiz(owner_id: &str, title: &str) -> Quiz {
    Quiz::new(owner_id, title, Difficulty::Medium, false)
}

pub fn make_mcq(quiz_id: &str, points: i32, options: &[&str], correct: &str) -> Question {
    Question::new(
        quiz_id,
        "host-1",
        "Pick the correct option",
        points,
        QuestionKind::Mcq {
            options: options.iter().map(|opt| opt.to_string()).collect(),
            correct_answer: correct.to_string(),
        },
        true,
    )
}

pub fn make_enum(quiz_id: &str, points: i32, correct: &str) -> Question {
    Question::new(
        quiz_id,
        "host-1",
        "Name the expected item",
        points,
        QuestionKind::Enumeration {
            correct_answer: correct.to_string(),
        },
        true,
    )
}

pub fn make_identification(quiz_id: &str, points: i32, correct: &str) -> Question {
    Question::new(
        quiz_id,
        "host-1",
        "Identify the term being described",
        points,
        QuestionKind::Identification {
            correct_answer: correct.to_string(),
        },
        true,
    )
}

/// The full service stack wired against in-memory repositories, the same way
/// `AppState::new` wires it against MongoDB.
pub struct TestEnv {
    pub quizzes: Arc<InMemoryQuizRepository>,
    pub questions: Arc<InMemoryQuestionRepository>,
    pub attempts: Arc<InMemoryAttemptRepository>,
    pub answers: Arc<InMemoryAnswerRepository>,
    pub ratings: Arc<InMemoryRatingRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub quiz_service: QuizService,
    pub attempt_service: AttemptService,
    pub statistics_service: StatisticsService,
    pub rating_service: RatingService,
}

impl TestEnv {
    pub fn new() -> Self {
        let quizzes = Arc::new(InMemoryQuizRepository::new());
        let questions = Arc::new(InMemoryQuestionRepository::new());
        let attempts = Arc::new(InMemoryAttemptRepository::new());
        let answers = Arc::new(InMemoryAnswerRepository::new());
        let ratings = Arc::new(InMemoryRatingRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());

        let catalog = Arc::new(QuestionCatalogService::new(questions.clone()));

        let quiz_service = QuizService::new(quizzes.clone(), catalog.clone());
        let attempt_service = AttemptService::new(
            quizzes.clone(),
            users.clone(),
            attempts.clone(),
            answers.clone(),
            catalog.clone(),
        );
        let statistics_service = StatisticsService::new(
            quizzes.clone(),
            attempts.clone(),
            answers.clone(),
            catalog,
        );
        let rating_service =
            RatingService::new(quizzes.clone(), attempts.clone(), ratings.clone());

        Self {
            quizzes,
            questions,
            attempts,
            answers,
            ratings,
            users,
            quiz_service,
            attempt_service,
            statistics_service,
            rating_service,
        }
    }

    /// Seeds an active quiz with its owner and a participant user.
    pub async fn seed_quiz(&self, owner_id: &str, participant_id: &str) -> Quiz {
        let quiz = make_quiz(owner_id, "Seeded Quiz");
        self.quizzes.insert(quiz.clone()).await;
        self.users.insert(make_user(owner_id, UserRole::Host)).await;
        self.users
            .insert(make_user(participant_id, UserRole::Participant))
            .await;
        quiz
    }
}
