use std::sync::Arc;

use crate::db::memory::{InMemoryContentRepository, InMemorySessionRepository, InMemoryUserRepository};
use crate::db::repository::{ContentRepository, MongoContentRepository};
use crate::db::session_repository::{MongoSessionRepository, SessionRepository};
use crate::db::user_repository::{MongoUserRepository, UserRepository};
use crate::error::AppError;
use crate::models::{
    AboutPageContent, ClientContent, ContactContent, ContentKind, FooterContent, OurWorkContent,
    PrivacyPolicy, ServicesContent,
};

pub mod memory;
pub mod repository;
pub mod session_repository;
pub mod user_repository;

/// Every repository the server needs, behind trait objects.
#[derive(Clone)]
pub struct Repositories {
    pub about_page: Arc<dyn ContentRepository<AboutPageContent>>,
    pub services: Arc<dyn ContentRepository<ServicesContent>>,
    pub contact: Arc<dyn ContentRepository<ContactContent>>,
    pub footer: Arc<dyn ContentRepository<FooterContent>>,
    pub privacy_policy: Arc<dyn ContentRepository<PrivacyPolicy>>,
    pub our_work: Arc<dyn ContentRepository<OurWorkContent>>,
    pub clients: Arc<dyn ContentRepository<ClientContent>>,
    pub users: Arc<dyn UserRepository>,
    pub sessions: Arc<dyn SessionRepository>,
}

async fn mongo_content<T: ContentKind>(
    db: &mongodb::Database,
) -> Result<Arc<dyn ContentRepository<T>>, AppError> {
    let repo = MongoContentRepository::<T>::new(db);
    repo.ensure_indexes().await?;
    Ok(Arc::new(repo))
}

fn memory_content<T: ContentKind>() -> Arc<dyn ContentRepository<T>> {
    Arc::new(InMemoryContentRepository::<T>::new())
}

impl Repositories {
    /// MongoDB-backed repositories, with their indexes created.
    pub async fn mongo(db: &mongodb::Database) -> Result<Self, AppError> {
        let users = MongoUserRepository::new(db);
        users.ensure_indexes().await?;
        let sessions = MongoSessionRepository::new(db);
        sessions.ensure_indexes().await?;

        Ok(Self {
            about_page: mongo_content(db).await?,
            services: mongo_content(db).await?,
            contact: mongo_content(db).await?,
            footer: mongo_content(db).await?,
            privacy_policy: mongo_content(db).await?,
            our_work: mongo_content(db).await?,
            clients: mongo_content(db).await?,
            users: Arc::new(users),
            sessions: Arc::new(sessions),
        })
    }

    /// Process-local repositories. Nothing survives a restart.
    pub fn in_memory() -> Self {
        Self {
            about_page: memory_content(),
            services: memory_content(),
            contact: memory_content(),
            footer: memory_content(),
            privacy_policy: memory_content(),
            our_work: memory_content(),
            clients: memory_content(),
            users: Arc::new(InMemoryUserRepository::new()),
            sessions: Arc::new(InMemorySessionRepository::new()),
        }
    }
}
