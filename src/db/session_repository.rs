use async_trait::async_trait;
use mongodb::bson::DateTime;

use crate::auth::models::Session;
use crate::error::AppError;

/// Repository trait for login sessions, keyed by token hash.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn insert(&self, session: &Session) -> Result<(), AppError>;

    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, AppError>;

    /// Returns `true` if a session was removed.
    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<bool, AppError>;

    /// Remove every session that expired before `now`.
    async fn delete_expired(&self, now: DateTime) -> Result<u64, AppError>;
}

/// MongoDB implementation of the SessionRepository.
pub struct MongoSessionRepository {
    collection: mongodb::Collection<Session>,
}

impl MongoSessionRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        Self {
            collection: db.collection("sessions"),
        }
    }

    /// Create the unique index on `tokenHash`.
    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        use mongodb::bson::doc;
        use mongodb::options::IndexOptions;
        use mongodb::IndexModel;

        let index = IndexModel::builder()
            .keys(doc! { "tokenHash": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection
            .create_index(index)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl SessionRepository for MongoSessionRepository {
    async fn insert(&self, session: &Session) -> Result<(), AppError> {
        self.collection
            .insert_one(session)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }

    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, AppError> {
        use mongodb::bson::doc;

        self.collection
            .find_one(doc! { "tokenHash": token_hash })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<bool, AppError> {
        use mongodb::bson::doc;

        let result = self
            .collection
            .delete_one(doc! { "tokenHash": token_hash })
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn delete_expired(&self, now: DateTime) -> Result<u64, AppError> {
        use mongodb::bson::doc;

        let result = self
            .collection
            .delete_many(doc! { "expiresAt": { "$lte": now } })
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.deleted_count)
    }
}
