use async_trait::async_trait;

use crate::auth::models::AdminUser;
use crate::error::AppError;

/// Repository trait for admin accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find an account by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<AdminUser>, AppError>;

    /// Create the account, or replace it if the username already exists.
    async fn upsert(&self, user: &AdminUser) -> Result<(), AppError>;
}

/// MongoDB implementation of the UserRepository.
pub struct MongoUserRepository {
    collection: mongodb::Collection<AdminUser>,
}

impl MongoUserRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        Self {
            collection: db.collection("users"),
        }
    }

    /// Create the unique index on `username`.
    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        use mongodb::bson::doc;
        use mongodb::options::IndexOptions;
        use mongodb::IndexModel;

        let index = IndexModel::builder()
            .keys(doc! { "username": 1 })
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
impl UserRepository for MongoUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<AdminUser>, AppError> {
        use mongodb::bson::doc;

        self.collection
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn upsert(&self, user: &AdminUser) -> Result<(), AppError> {
        use mongodb::bson::doc;
        use mongodb::options::ReplaceOptions;

        let filter = doc! { "username": &user.username };
        let options = ReplaceOptions::builder().upsert(true).build();

        self.collection
            .replace_one(filter, user)
            .with_options(options)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }
}
