use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Rating};

#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Insert or replace the rating for its (user, quiz, attempt) triple.
    /// Concurrent submissions for the same triple resolve to one row, last
    /// write wins.
    async fn upsert(&self, rating: Rating) -> AppResult<Rating>;
    async fn find_by_attempt(&self, attempt_id: &str) -> AppResult<Option<Rating>>;
    async fn find_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<Rating>>;
    async fn count_by_quiz(&self, quiz_id: &str) -> AppResult<u64>;
}

pub struct MongoRatingRepository {
    collection: Collection<Rating>,
}

impl MongoRatingRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quiz_ratings");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quiz_ratings collection");

        let triple_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "quiz_id": 1, "attempt_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_quiz_attempt_unique".to_string())
                    .build(),
            )
            .build();

        let quiz_index = IndexModel::builder()
            .keys(doc! { "quiz_id": 1 })
            .options(IndexOptions::builder().name("quiz_id".to_string()).build())
            .build();

        self.collection.create_index(triple_index).await?;
        self.collection.create_index(quiz_index).await?;

        Ok(())
    }
}

#[async_trait]
impl RatingRepository for MongoRatingRepository {
    async fn upsert(&self, rating: Rating) -> AppResult<Rating> {
        self.collection
            .replace_one(
                doc! {
                    "user_id": &rating.user_id,
                    "quiz_id": &rating.quiz_id,
                    "attempt_id": &rating.attempt_id,
                },
                &rating,
            )
            .upsert(true)
            .await?;
        Ok(rating)
    }

    async fn find_by_attempt(&self, attempt_id: &str) -> AppResult<Option<Rating>> {
        let rating = self
            .collection
            .find_one(doc! { "attempt_id": attempt_id })
            .await?;
        Ok(rating)
    }

    async fn find_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<Rating>> {
        let ratings = self
            .collection
            .find(doc! { "quiz_id": quiz_id })
            .await?
            .try_collect()
            .await?;
        Ok(ratings)
    }

    async fn count_by_quiz(&self, quiz_id: &str) -> AppResult<u64> {
        let count = self
            .collection
            .count_documents(doc! { "quiz_id": quiz_id })
            .await?;
        Ok(count)
    }
}
