//! Create the admin account or force-reset its password, directly against
//! the configured MongoDB database.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use site_cms::auth::session::AuthService;
use site_cms::config::AppConfig;
use site_cms::db::session_repository::MongoSessionRepository;
use site_cms::db::user_repository::MongoUserRepository;

#[derive(Parser, Debug)]
#[command(name = "reset-admin")]
#[command(about = "Create the admin account or reset its password", long_about = None)]
struct Args {
    /// Admin username
    #[arg(long, value_name = "USERNAME", default_value = "admin")]
    username: String,

    /// New password
    #[arg(long, value_name = "PASSWORD", env = "CMS_ADMIN_PASSWORD", hide_env_values = true)]
    password: String,

    /// MongoDB connection string (defaults to the server configuration)
    #[arg(long, value_name = "URI")]
    mongodb_uri: Option<String>,

    /// Database name (defaults to the server configuration)
    #[arg(long, value_name = "NAME")]
    database: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "site_cms=info".into()),
        )
        .init();

    let args = Args::parse();
    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(uri) = args.mongodb_uri {
        config.mongodb_uri = uri;
    }
    if let Some(database) = args.database {
        config.mongodb_database = database;
    }

    let client = mongodb::Client::with_uri_str(&config.mongodb_uri)
        .await
        .context("Failed to connect to MongoDB")?;
    let db = client.database(&config.mongodb_database);

    let users = MongoUserRepository::new(&db);
    users.ensure_indexes().await.context("Failed to prepare users collection")?;

    let auth = AuthService::new(
        Arc::new(users),
        Arc::new(MongoSessionRepository::new(&db)),
        &config.session_secret,
        config.session_ttl(),
    );

    let created = auth
        .reset_admin(&args.username, &args.password)
        .await
        .context("Failed to reset admin account")?;

    if created {
        println!("Created admin account '{}'", args.username);
    } else {
        println!("Password reset for admin account '{}'", args.username);
    }
    tracing::info!(
        "Admin account updated in {} (database '{}')",
        config.redacted_mongodb_uri(),
        config.mongodb_database
    );

    Ok(())
}
