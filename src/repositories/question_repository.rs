use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Question};

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>>;

    /// Questions for a quiz in creation order. The order is what numbers the
    /// questions on screen, so it must be stable across calls.
    async fn find_by_quiz(&self, quiz_id: &str, approved_only: bool) -> AppResult<Vec<Question>>;
}

pub struct MongoQuestionRepository {
    collection: Collection<Question>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("questions");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for questions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let quiz_index = IndexModel::builder()
            .keys(doc! { "quiz_id": 1, "is_approved": 1 })
            .options(
                IndexOptions::builder()
                    .name("quiz_approved".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(quiz_index).await?;

        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        let question = self.collection.find_one(doc! { "id": id }).await?;
        Ok(question)
    }

    async fn find_by_quiz(&self, quiz_id: &str, approved_only: bool) -> AppResult<Vec<Question>> {
        let mut filter = doc! { "quiz_id": quiz_id };
        if approved_only {
            filter.insert("is_approved", true);
        }

        let questions = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": 1, "id": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(questions)
    }
}
