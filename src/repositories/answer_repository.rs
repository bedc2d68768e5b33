use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Answer};

#[async_trait]
pub trait AnswerRepository: Send + Sync {
    async fn create(&self, answer: Answer) -> AppResult<Answer>;
    async fn find_by_attempt(&self, attempt_id: &str) -> AppResult<Vec<Answer>>;
    async fn find_by_attempts(&self, attempt_ids: &[String]) -> AppResult<Vec<Answer>>;
}

pub struct MongoAnswerRepository {
    collection: Collection<Answer>,
}

impl MongoAnswerRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quiz_answers");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quiz_answers collection");

        let attempt_index = IndexModel::builder()
            .keys(doc! { "attempt_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("attempt_id".to_string())
                    .build(),
            )
            .build();

        let question_index = IndexModel::builder()
            .keys(doc! { "question_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("question_id".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(attempt_index).await?;
        self.collection.create_index(question_index).await?;

        Ok(())
    }
}

#[async_trait]
impl AnswerRepository for MongoAnswerRepository {
    async fn create(&self, answer: Answer) -> AppResult<Answer> {
        self.collection.insert_one(&answer).await?;
        Ok(answer)
    }

    async fn find_by_attempt(&self, attempt_id: &str) -> AppResult<Vec<Answer>> {
        let answers = self
            .collection
            .find(doc! { "attempt_id": attempt_id })
            .sort(doc! { "created_at": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(answers)
    }

    async fn find_by_attempts(&self, attempt_ids: &[String]) -> AppResult<Vec<Answer>> {
        if attempt_ids.is_empty() {
            return Ok(Vec::new());
        }

        let answers = self
            .collection
            .find(doc! { "attempt_id": { "$in": attempt_ids.to_vec() } })
            .await?
            .try_collect()
            .await?;
        Ok(answers)
    }
}
