use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;

use crate::content::pagination::PageQuery;
use crate::error::AppError;
use crate::models::{ContentKind, StoredContent};

/// Repository trait for the stored versions of one content type.
///
/// This trait allows swapping the database layer for an in-memory store in tests.
#[async_trait]
pub trait ContentRepository<T: ContentKind>: Send + Sync {
    /// Insert a new version.
    async fn insert(&self, doc: &StoredContent<T>) -> Result<(), AppError>;

    /// Replace an existing version (matched by id). Returns `false` if it no longer exists.
    async fn replace(&self, doc: &StoredContent<T>) -> Result<bool, AppError>;

    /// Find a version by its id.
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<StoredContent<T>>, AppError>;

    /// The active version. When several are flagged active, the most recently
    /// updated one wins, ties broken by the greatest id.
    async fn find_active(&self) -> Result<Option<StoredContent<T>>, AppError>;

    /// One page of versions plus the total number of versions.
    async fn list(&self, query: &PageQuery) -> Result<(Vec<StoredContent<T>>, u64), AppError>;

    /// Set `isActive=false` on every version except `keep`.
    async fn deactivate_others(&self, keep: &ObjectId) -> Result<u64, AppError>;

    /// Flag a single version as active. Returns `false` if it does not exist.
    async fn mark_active(&self, id: &ObjectId, updated_at: DateTime) -> Result<bool, AppError>;

    /// Permanently remove a version. Returns `false` if it did not exist.
    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError>;
}

/// MongoDB implementation of the ContentRepository, one collection per content type.
pub struct MongoContentRepository<T: ContentKind> {
    collection: mongodb::Collection<StoredContent<T>>,
}

impl<T: ContentKind> MongoContentRepository<T> {
    pub fn new(db: &mongodb::Database) -> Self {
        Self {
            collection: db.collection(T::COLLECTION),
        }
    }

    /// Create the indexes used by the active-version lookup and version listings.
    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        use mongodb::bson::doc;
        use mongodb::IndexModel;

        let indexes = vec![
            IndexModel::builder().keys(doc! { "isActive": 1 }).build(),
            IndexModel::builder().keys(doc! { "updatedAt": -1 }).build(),
        ];

        self.collection
            .create_indexes(indexes)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl<T: ContentKind> ContentRepository<T> for MongoContentRepository<T> {
    async fn insert(&self, stored: &StoredContent<T>) -> Result<(), AppError> {
        self.collection
            .insert_one(stored)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }

    async fn replace(&self, stored: &StoredContent<T>) -> Result<bool, AppError> {
        use mongodb::bson::doc;

        let result = self
            .collection
            .replace_one(doc! { "_id": stored.id }, stored)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<StoredContent<T>>, AppError> {
        use mongodb::bson::doc;

        self.collection
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn find_active(&self) -> Result<Option<StoredContent<T>>, AppError> {
        use mongodb::bson::doc;
        use mongodb::options::FindOneOptions;

        let options = FindOneOptions::builder()
            .sort(doc! { "updatedAt": -1, "_id": -1 })
            .build();

        self.collection
            .find_one(doc! { "isActive": true })
            .with_options(options)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn list(&self, query: &PageQuery) -> Result<(Vec<StoredContent<T>>, u64), AppError> {
        use futures::TryStreamExt;
        use mongodb::bson::doc;
        use mongodb::options::FindOptions;

        let total = self
            .collection
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        // Secondary sort on _id keeps pages stable when the primary key ties.
        let direction = query.sort_order.direction();
        let mut sort = mongodb::bson::Document::new();
        sort.insert(query.sort_by.as_str(), direction);
        sort.insert("_id", direction);

        let options = FindOptions::builder()
            .sort(sort)
            .skip(query.offset())
            .limit(query.limit as i64)
            .build();

        let mut cursor = self
            .collection
            .find(doc! {})
            .with_options(options)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let mut items = Vec::new();
        while let Some(doc) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            items.push(doc);
        }

        Ok((items, total))
    }

    async fn deactivate_others(&self, keep: &ObjectId) -> Result<u64, AppError> {
        use mongodb::bson::doc;

        let result = self
            .collection
            .update_many(
                doc! { "_id": { "$ne": *keep }, "isActive": true },
                doc! { "$set": { "isActive": false } },
            )
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.modified_count)
    }

    async fn mark_active(&self, id: &ObjectId, updated_at: DateTime) -> Result<bool, AppError> {
        use mongodb::bson::doc;

        let result = self
            .collection
            .update_one(
                doc! { "_id": *id },
                doc! { "$set": { "isActive": true, "updatedAt": updated_at } },
            )
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        use mongodb::bson::doc;

        let result = self
            .collection
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
