//! In-memory repositories, used when the service runs without MongoDB
//! (`storage_backend = "memory"`) and by the integration tests.

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use tokio::sync::RwLock;

use crate::auth::models::{AdminUser, Session};
use crate::content::pagination::{PageQuery, SortField, SortOrder};
use crate::db::repository::ContentRepository;
use crate::db::session_repository::SessionRepository;
use crate::db::user_repository::UserRepository;
use crate::error::AppError;
use crate::models::{ContentKind, StoredContent};

pub struct InMemoryContentRepository<T: ContentKind> {
    docs: RwLock<Vec<StoredContent<T>>>,
}

impl<T: ContentKind> InMemoryContentRepository<T> {
    pub fn new() -> Self {
        Self {
            docs: RwLock::new(Vec::new()),
        }
    }
}

impl<T: ContentKind> Default for InMemoryContentRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn compare<T>(a: &StoredContent<T>, b: &StoredContent<T>, field: SortField) -> Ordering {
    let primary = match field {
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::Version => a.version.cmp(&b.version),
        SortField::IsActive => a.is_active.cmp(&b.is_active),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl<T: ContentKind> ContentRepository<T> for InMemoryContentRepository<T> {
    async fn insert(&self, doc: &StoredContent<T>) -> Result<(), AppError> {
        let mut docs = self.docs.write().await;
        if docs.iter().any(|d| d.id == doc.id) {
            return Err(AppError::Database(format!("Duplicate id '{}'", doc.id)));
        }
        docs.push(doc.clone());
        Ok(())
    }

    async fn replace(&self, doc: &StoredContent<T>) -> Result<bool, AppError> {
        let mut docs = self.docs.write().await;
        match docs.iter_mut().find(|d| d.id == doc.id) {
            Some(existing) => {
                *existing = doc.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<StoredContent<T>>, AppError> {
        let docs = self.docs.read().await;
        Ok(docs.iter().find(|d| d.id == *id).cloned())
    }

    async fn find_active(&self) -> Result<Option<StoredContent<T>>, AppError> {
        let docs = self.docs.read().await;
        Ok(docs
            .iter()
            .filter(|d| d.is_active)
            .max_by(|a, b| compare(a, b, SortField::UpdatedAt))
            .cloned())
    }

    async fn list(&self, query: &PageQuery) -> Result<(Vec<StoredContent<T>>, u64), AppError> {
        let docs = self.docs.read().await;
        let mut sorted: Vec<&StoredContent<T>> = docs.iter().collect();
        sorted.sort_by(|a, b| {
            let ord = compare(a, b, query.sort_by);
            match query.sort_order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });

        let items = sorted
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.limit as usize)
            .cloned()
            .collect();

        Ok((items, docs.len() as u64))
    }

    async fn deactivate_others(&self, keep: &ObjectId) -> Result<u64, AppError> {
        let mut docs = self.docs.write().await;
        let mut modified = 0;
        for doc in docs.iter_mut().filter(|d| d.id != *keep && d.is_active) {
            doc.is_active = false;
            modified += 1;
        }
        Ok(modified)
    }

    async fn mark_active(&self, id: &ObjectId, updated_at: DateTime) -> Result<bool, AppError> {
        let mut docs = self.docs.write().await;
        match docs.iter_mut().find(|d| d.id == *id) {
            Some(doc) => {
                doc.is_active = true;
                doc.updated_at = updated_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let mut docs = self.docs.write().await;
        let before = docs.len();
        docs.retain(|d| d.id != *id);
        Ok(docs.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, AdminUser>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<AdminUser>, AppError> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn upsert(&self, user: &AdminUser) -> Result<(), AppError> {
        self.users
            .write()
            .await
            .insert(user.username.clone(), user.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, session: &Session) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .insert(session.token_hash.clone(), session.clone());
        Ok(())
    }

    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, AppError> {
        Ok(self.sessions.read().await.get(token_hash).cloned())
    }

    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<bool, AppError> {
        Ok(self.sessions.write().await.remove(token_hash).is_some())
    }

    async fn delete_expired(&self, now: DateTime) -> Result<u64, AppError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(now));
        Ok((before - sessions.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServicesContent;

    fn version(active: bool, updated_millis: i64) -> StoredContent<ServicesContent> {
        let mut doc = StoredContent::new(ServicesContent::default(), active, "1.0".into(), None);
        doc.updated_at = DateTime::from_millis(updated_millis);
        doc
    }

    #[tokio::test]
    async fn test_find_active_prefers_latest_update() {
        let repo = InMemoryContentRepository::new();
        let older = version(true, 1_000);
        let newer = version(true, 2_000);
        let inactive = version(false, 3_000);
        for doc in [&older, &newer, &inactive] {
            repo.insert(doc).await.unwrap();
        }

        let active = repo.find_active().await.unwrap().unwrap();
        assert_eq!(active.id, newer.id);
    }

    #[tokio::test]
    async fn test_list_pages_and_counts() {
        let repo = InMemoryContentRepository::new();
        for millis in [1_000, 2_000, 3_000] {
            repo.insert(&version(false, millis)).await.unwrap();
        }

        let (items, total) = repo.list(&PageQuery::new(2, 1)).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].updated_at, DateTime::from_millis(2_000));
    }

    #[tokio::test]
    async fn test_deactivate_others_keeps_target() {
        let repo = InMemoryContentRepository::new();
        let a = version(true, 1_000);
        let b = version(true, 2_000);
        repo.insert(&a).await.unwrap();
        repo.insert(&b).await.unwrap();

        assert_eq!(repo.deactivate_others(&a.id).await.unwrap(), 1);
        assert!(repo.find_by_id(&a.id).await.unwrap().unwrap().is_active);
        assert!(!repo.find_by_id(&b.id).await.unwrap().unwrap().is_active);
    }

    #[tokio::test]
    async fn test_expired_sessions_removed() {
        let repo = InMemorySessionRepository::new();
        let now = DateTime::now();
        repo.insert(&Session {
            token_hash: "old".into(),
            username: "admin".into(),
            created_at: now,
            expires_at: DateTime::from_millis(now.timestamp_millis() - 1),
        })
        .await
        .unwrap();

        assert_eq!(repo.delete_expired(now).await.unwrap(), 1);
        assert!(repo.find_by_token_hash("old").await.unwrap().is_none());
    }
}
