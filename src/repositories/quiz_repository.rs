use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::Quiz};

/// Read-side view of quizzes plus the single write this core performs:
/// refreshing the cached average rating. Quiz CRUD itself lives outside this
/// service.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn find_active(&self) -> AppResult<Vec<Quiz>>;
    async fn set_average_rating(&self, quiz_id: &str, average_rating: Option<f64>)
        -> AppResult<()>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quizzes");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;

        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn find_active(&self) -> AppResult<Vec<Quiz>> {
        let quizzes = self
            .collection
            .find(doc! { "is_active": true })
            .await?
            .try_collect()
            .await?;
        Ok(quizzes)
    }

    async fn set_average_rating(
        &self,
        quiz_id: &str,
        average_rating: Option<f64>,
    ) -> AppResult<()> {
        let value = match average_rating {
            Some(avg) => Bson::Double(avg),
            None => Bson::Null,
        };

        self.collection
            .update_one(
                doc! { "id": quiz_id },
                doc! { "$set": { "average_rating": value } },
            )
            .await?;
        Ok(())
    }
}
