use std::sync::Arc;

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use mongodb::bson::DateTime;
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::auth::models::{AdminUser, Session, SessionUser};
use crate::auth::password::{check_password_strength, hash_password, verify_password, verify_unknown_account};
use crate::db::session_repository::SessionRepository;
use crate::db::user_repository::UserRepository;
use crate::error::{AppError, FieldError};

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "cms_session";

/// A freshly issued session: the raw token (only ever shown to the client)
/// and the stored record.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub session: Session,
}

/// Password login and server-side session management.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionRepository>,
    secret: Arc<str>,
    ttl: chrono::Duration,
    secure_cookies: bool,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionRepository>,
        secret: &str,
        ttl: chrono::Duration,
    ) -> Self {
        Self {
            users,
            sessions,
            secret: Arc::from(secret),
            ttl,
            secure_cookies: false,
        }
    }

    /// Mark the session cookie `Secure` so browsers only send it over HTTPS.
    pub fn with_secure_cookies(mut self, secure: bool) -> Self {
        self.secure_cookies = secure;
        self
    }

    pub fn ttl(&self) -> chrono::Duration {
        self.ttl
    }

    pub fn secure_cookies(&self) -> bool {
        self.secure_cookies
    }

    /// Keyed hash of a raw token, as stored in the session record.
    pub fn hash_token(&self, token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.secret.as_bytes());
        hasher.update(token.as_bytes());
        STANDARD.encode(hasher.finalize().as_slice())
    }

    /// Check credentials and open a new session.
    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedSession, AppError> {
        // 1. Both fields are required
        let username = username.trim();
        let mut errors = Vec::new();
        if username.is_empty() {
            errors.push(FieldError::new("username", "Username is required"));
        }
        if password.is_empty() {
            errors.push(FieldError::new("password", "Password is required"));
        }
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        // 2. Verify against the stored hash
        let user = self.users.find_by_username(username).await?;
        let valid = match &user {
            Some(u) => verify_password(password, &u.password_hash),
            None => verify_unknown_account(password),
        };
        if !valid {
            tracing::warn!(username, "Rejected login attempt");
            return Err(AppError::Auth("Invalid username or password".into()));
        }

        // 3. Drop stale sessions while we are here
        let now = DateTime::now();
        let purged = self.sessions.delete_expired(now).await?;
        if purged > 0 {
            tracing::debug!("Purged {} expired sessions", purged);
        }

        // 4. Issue a random token and store only its hash
        let token_bytes: [u8; 32] = rand::rng().random();
        let token = URL_SAFE_NO_PAD.encode(token_bytes);
        let session = Session {
            token_hash: self.hash_token(&token),
            username: username.to_string(),
            created_at: now,
            expires_at: DateTime::from_millis(now.timestamp_millis() + self.ttl.num_milliseconds()),
        };
        self.sessions.insert(&session).await?;

        tracing::info!(username, "Admin logged in");
        Ok(IssuedSession { token, session })
    }

    /// Resolve a raw token to its user. Expired sessions are removed.
    pub async fn authenticate(&self, token: &str) -> Result<SessionUser, AppError> {
        let token_hash = self.hash_token(token);
        let session = self
            .sessions
            .find_by_token_hash(&token_hash)
            .await?
            .ok_or_else(|| AppError::Auth("Invalid or expired session".into()))?;

        if session.is_expired(DateTime::now()) {
            self.sessions.delete_by_token_hash(&token_hash).await?;
            return Err(AppError::Auth("Invalid or expired session".into()));
        }

        Ok(SessionUser {
            username: session.username,
        })
    }

    /// Destroy the session behind a token. Returns `false` if there was none.
    pub async fn logout(&self, token: &str) -> Result<bool, AppError> {
        self.sessions.delete_by_token_hash(&self.hash_token(token)).await
    }

    /// Create the admin account unless it already exists. An existing
    /// password is never overwritten.
    pub async fn ensure_admin(&self, username: &str, password: &str) -> Result<bool, AppError> {
        if self.users.find_by_username(username.trim()).await?.is_some() {
            return Ok(false);
        }
        self.reset_admin(username, password).await
    }

    /// Create the admin account, or force-reset its password.
    ///
    /// Returns `true` if the account was newly created.
    pub async fn reset_admin(&self, username: &str, password: &str) -> Result<bool, AppError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::invalid_field("username", "Username is required"));
        }
        check_password_strength(password)?;

        let existing = self.users.find_by_username(username).await?;
        let created_at = existing
            .as_ref()
            .map(|u| u.created_at)
            .unwrap_or_else(DateTime::now);

        self.users
            .upsert(&AdminUser {
                username: username.to_string(),
                password_hash: hash_password(password)?,
                created_at,
            })
            .await?;

        Ok(existing.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::session_repository::MockSessionRepository;
    use crate::db::user_repository::MockUserRepository;

    fn stored_admin(password: &str) -> AdminUser {
        AdminUser {
            username: "admin".into(),
            password_hash: hash_password(password).unwrap(),
            created_at: DateTime::now(),
        }
    }

    fn service(users: MockUserRepository, sessions: MockSessionRepository) -> AuthService {
        AuthService::new(
            Arc::new(users),
            Arc::new(sessions),
            "test-secret",
            chrono::Duration::hours(1),
        )
    }

    #[tokio::test]
    async fn test_login_issues_hashed_session() {
        let admin = stored_admin("s3cret-pass");
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(Some(admin.clone())));

        let mut sessions = MockSessionRepository::new();
        sessions.expect_delete_expired().returning(|_| Ok(0));
        sessions.expect_insert().times(1).returning(|_| Ok(()));

        let auth = service(users, sessions);
        let issued = auth.login("admin", "s3cret-pass").await.unwrap();

        assert_eq!(issued.session.username, "admin");
        assert_ne!(issued.session.token_hash, issued.token);
        assert_eq!(issued.session.token_hash, auth.hash_token(&issued.token));
        assert_eq!(
            issued.session.expires_at.timestamp_millis() - issued.session.created_at.timestamp_millis(),
            3_600_000
        );
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let admin = stored_admin("s3cret-pass");
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(Some(admin.clone())));
        let mut sessions = MockSessionRepository::new();
        sessions.expect_insert().never();

        let result = service(users, sessions).login("admin", "nope").await;
        assert!(matches!(result, Err(AppError::Auth(_))));
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));

        let result = service(users, MockSessionRepository::new())
            .login("ghost", "whatever")
            .await;
        assert!(matches!(result, Err(AppError::Auth(_))));
    }

    #[tokio::test]
    async fn test_login_requires_fields() {
        let result = service(MockUserRepository::new(), MockSessionRepository::new())
            .login("  ", "")
            .await;
        match result {
            Err(AppError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("Expected Validation error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_expired_session_is_removed() {
        let mut sessions = MockSessionRepository::new();
        sessions.expect_find_by_token_hash().returning(|hash| {
            Ok(Some(Session {
                token_hash: hash.to_string(),
                username: "admin".into(),
                created_at: DateTime::from_millis(0),
                expires_at: DateTime::from_millis(1),
            }))
        });
        sessions
            .expect_delete_by_token_hash()
            .times(1)
            .returning(|_| Ok(true));

        let result = service(MockUserRepository::new(), sessions)
            .authenticate("token")
            .await;
        assert!(matches!(result, Err(AppError::Auth(_))));
    }

    #[tokio::test]
    async fn test_reset_admin_creates_then_updates() {
        let mut users = MockUserRepository::new();
        let mut seq = mockall::Sequence::new();
        users
            .expect_find_by_username()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        users
            .expect_upsert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        let existing = stored_admin("old-password");
        users
            .expect_find_by_username()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(existing.clone())));
        users
            .expect_upsert()
            .withf(|u| verify_password("new-password", &u.password_hash))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let auth = service(users, MockSessionRepository::new());
        assert!(auth.reset_admin("admin", "first-password").await.unwrap());
        assert!(!auth.reset_admin("admin", "new-password").await.unwrap());
    }

    #[tokio::test]
    async fn test_reset_admin_rejects_weak_password() {
        let auth = service(MockUserRepository::new(), MockSessionRepository::new());
        assert!(matches!(
            auth.reset_admin("admin", "short").await,
            Err(AppError::Validation(_))
        ));
    }
}
