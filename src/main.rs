use std::sync::Arc;

use anyhow::Context;
use site_cms::app::{build_router, AppState};
use site_cms::config::{AppConfig, StorageBackend, DEV_SESSION_SECRET};
use site_cms::db::Repositories;
use site_cms::feed::client::{FeedClient, InstagramFeedClient};
use site_cms::storage::client::{FileStore, LocalFileStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "site_cms=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("Starting site-cms server...");

    let config = AppConfig::load().context("Failed to load configuration")?;
    if config.session_secret == DEV_SESSION_SECRET {
        tracing::warn!("CMS_SESSION_SECRET is not set, using the development secret");
    }

    // Persistence
    let repos = match config.storage_backend {
        StorageBackend::Mongo => {
            let mongo_client = mongodb::Client::with_uri_str(&config.mongodb_uri)
                .await
                .context("Failed to connect to MongoDB")?;
            let mongo_db = mongo_client.database(&config.mongodb_database);
            let repos = Repositories::mongo(&mongo_db)
                .await
                .context("Failed to prepare MongoDB collections")?;
            tracing::info!(
                "Connected to MongoDB at {} (database '{}')",
                config.redacted_mongodb_uri(),
                config.mongodb_database
            );
            repos
        }
        StorageBackend::Memory => {
            tracing::warn!("Using the in-memory store; content is lost on restart");
            Repositories::in_memory()
        }
    };

    // Uploads
    let file_store: Arc<dyn FileStore> = Arc::new(
        LocalFileStore::new(&config.upload_dir).context("Failed to prepare upload directory")?,
    );
    tracing::info!("Serving uploads from '{}'", config.upload_dir);

    // Instagram feed
    if config.instagram_access_token.is_none() {
        tracing::info!("No Instagram access token configured, the feed serves fallback posts");
    }
    let feed: Arc<dyn FeedClient> = Arc::new(
        InstagramFeedClient::new(
            &config.instagram_base_url,
            config.instagram_access_token.clone(),
            config.instagram_timeout(),
        )
        .context("Failed to build Instagram client")?,
    );

    let mut state = AppState::new(
        repos,
        &config.session_secret,
        config.session_ttl(),
        file_store,
        feed,
    );
    state.auth = state.auth.with_secure_cookies(config.cookie_secure);

    // Bootstrap the admin account
    if let Some(password) = config.admin_password.as_deref() {
        let created = state
            .auth
            .ensure_admin(&config.admin_username, password)
            .await
            .context("Failed to create admin account")?;
        if created {
            tracing::info!("Created admin account '{}'", config.admin_username);
        }
    }

    let app = build_router(
        state,
        std::path::Path::new(&config.upload_dir),
        config.allowed_origins(),
    );

    // Start the server
    let addr = config.bind_addr();
    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
