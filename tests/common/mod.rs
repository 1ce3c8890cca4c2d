#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tempfile::TempDir;

use site_cms::app::{build_router, AppState};
use site_cms::db::Repositories;
use site_cms::feed::client::{FeedClient, InstagramFeedClient};
use site_cms::storage::client::{FileStore, LocalFileStore};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery";

/// An in-process server backed by the in-memory repositories and a
/// temporary upload directory.
///
/// The upload directory is removed when this struct is dropped.
pub struct TestEnv {
    pub upload_dir: TempDir,
    pub state: AppState,
    pub router: Router,
}

impl TestEnv {
    /// Build the router with a seeded admin account and no feed token, so
    /// the feed always serves its fallback posts.
    pub async fn start() -> Self {
        let feed = InstagramFeedClient::new("http://127.0.0.1:9", None, Duration::from_secs(1))
            .expect("Failed to build feed client");
        Self::start_with_feed(Arc::new(feed)).await
    }

    pub async fn start_with_feed(feed: Arc<dyn FeedClient>) -> Self {
        let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");
        let file_store: Arc<dyn FileStore> =
            Arc::new(LocalFileStore::new(upload_dir.path()).expect("Failed to create file store"));

        let state = AppState::new(
            Repositories::in_memory(),
            "test-secret",
            chrono::Duration::hours(1),
            file_store,
            feed,
        );

        state
            .auth
            .reset_admin(ADMIN_USERNAME, ADMIN_PASSWORD)
            .await
            .expect("Failed to seed admin");

        let router = build_router(state.clone(), upload_dir.path(), None);

        Self {
            upload_dir,
            state,
            router,
        }
    }

    /// Build an `axum_test::TestServer` from this environment's router.
    pub fn server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .save_cookies()
            .expect_success_by_default()
            .build(self.router.clone())
    }

    /// Build a `TestServer` that does NOT expect success by default (for error tests).
    pub fn server_permissive(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .save_cookies()
            .build(self.router.clone())
    }

    /// A permissive server that is already logged in as the seeded admin.
    pub async fn admin_server(&self) -> axum_test::TestServer {
        let server = self.server_permissive();
        login(&server).await;
        server
    }
}

/// Helper: log in as the seeded admin (the session cookie is saved).
pub async fn login(server: &axum_test::TestServer) -> serde_json::Value {
    let response = server
        .post("/api/auth/login")
        .json(&serde_json::json!({
            "username": ADMIN_USERNAME,
            "password": ADMIN_PASSWORD
        }))
        .await;
    response.assert_status_ok();
    response.json()
}
