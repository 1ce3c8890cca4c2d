use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// An admin account, as stored in the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub username: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    pub created_at: DateTime,
}

/// A server-side login session, as stored in the `sessions` collection.
///
/// Only a keyed hash of the bearer token is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token_hash: String,
    pub username: String,
    pub created_at: DateTime,
    pub expires_at: DateTime,
}

impl Session {
    pub fn is_expired(&self, now: DateTime) -> bool {
        self.expires_at <= now
    }
}

/// The user attached to an authenticated request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
}

/// Login request body. Missing fields are reported by the login check.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

/// `GET /api/auth/verify` response body.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
}
