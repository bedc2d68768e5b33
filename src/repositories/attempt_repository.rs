use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::Attempt};

#[async_trait]
pub trait AttemptRepository: Send + Sync {
    /// Insert a new attempt. Fails with `AlreadyExists` (or the storage
    /// engine's duplicate-key error) when an open attempt for the same
    /// (quiz, user) pair is already present.
    async fn create(&self, attempt: Attempt) -> AppResult<Attempt>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Attempt>>;
    async fn find_open(&self, quiz_id: &str, user_id: &str) -> AppResult<Option<Attempt>>;
    async fn update(&self, attempt: Attempt) -> AppResult<Attempt>;
    async fn find_completed_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<Attempt>>;
    async fn count_completed_by_quiz(&self, quiz_id: &str) -> AppResult<u64>;
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Attempt>>;
}

pub struct MongoAttemptRepository {
    collection: Collection<Attempt>,
}

impl MongoAttemptRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quiz_attempts");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quiz_attempts collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        // At most one open attempt per (quiz, user). Open attempts carry an
        // explicit null completed_at, which is what the partial filter keys on.
        let open_attempt_index = IndexModel::builder()
            .keys(doc! { "quiz_id": 1, "user_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .partial_filter_expression(doc! { "completed_at": { "$type": "null" } })
                    .name("open_attempt_unique".to_string())
                    .build(),
            )
            .build();

        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder().name("user_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(open_attempt_index).await?;
        self.collection.create_index(user_index).await?;

        Ok(())
    }
}

#[async_trait]
impl AttemptRepository for MongoAttemptRepository {
    async fn create(&self, attempt: Attempt) -> AppResult<Attempt> {
        self.collection.insert_one(&attempt).await?;
        Ok(attempt)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Attempt>> {
        let attempt = self.collection.find_one(doc! { "id": id }).await?;
        Ok(attempt)
    }

    async fn find_open(&self, quiz_id: &str, user_id: &str) -> AppResult<Option<Attempt>> {
        let attempt = self
            .collection
            .find_one(doc! {
                "quiz_id": quiz_id,
                "user_id": user_id,
                "completed_at": Bson::Null,
            })
            .await?;
        Ok(attempt)
    }

    async fn update(&self, attempt: Attempt) -> AppResult<Attempt> {
        self.collection
            .replace_one(doc! { "id": &attempt.id }, &attempt)
            .await?;
        Ok(attempt)
    }

    async fn find_completed_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<Attempt>> {
        let attempts = self
            .collection
            .find(doc! {
                "quiz_id": quiz_id,
                "completed_at": { "$ne": Bson::Null },
            })
            .sort(doc! { "completed_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(attempts)
    }

    async fn count_completed_by_quiz(&self, quiz_id: &str) -> AppResult<u64> {
        let count = self
            .collection
            .count_documents(doc! {
                "quiz_id": quiz_id,
                "completed_at": { "$ne": Bson::Null },
            })
            .await?;
        Ok(count)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Attempt>> {
        let attempts = self
            .collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "started_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(attempts)
    }
}
