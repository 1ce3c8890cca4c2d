use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use crate::auth::models::SessionUser;
use crate::auth::session::{AuthService, SESSION_COOKIE};
use crate::error::AppError;

/// Extract the raw session token from a request.
///
/// An `Authorization: Bearer` header takes precedence over the session cookie.
pub fn session_token(parts: &Parts) -> Option<String> {
    let bearer = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    bearer.or_else(|| {
        CookieJar::from_headers(&parts.headers)
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|t| !t.is_empty())
    })
}

/// Extractor that only succeeds for requests carrying a valid admin session.
///
/// Handlers that take it are admin-only; rejection is a 401 in the usual
/// error envelope.
#[derive(Debug, Clone)]
pub struct AdminSession(pub SessionUser);

impl AdminSession {
    pub fn username(&self) -> &str {
        &self.0.username
    }
}

impl<S> FromRequestParts<S> for AdminSession
where
    AuthService: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = session_token(parts)
            .ok_or_else(|| AppError::Auth("Authentication required".into()))?;
        let auth = AuthService::from_ref(state);
        let user = auth.authenticate(&token).await?;
        Ok(AdminSession(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts(builder: axum::http::request::Builder) -> Parts {
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_bearer_token() {
        let parts = parts(Request::builder().header("Authorization", "Bearer abc123"));
        assert_eq!(session_token(&parts).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_cookie_token() {
        let parts = parts(Request::builder().header("Cookie", "other=1; cms_session=tok"));
        assert_eq!(session_token(&parts).as_deref(), Some("tok"));
    }

    #[test]
    fn test_bearer_wins_over_cookie() {
        let parts = parts(
            Request::builder()
                .header("Authorization", "Bearer from-header")
                .header("Cookie", "cms_session=from-cookie"),
        );
        assert_eq!(session_token(&parts).as_deref(), Some("from-header"));
    }

    #[test]
    fn test_no_token() {
        let parts = parts(Request::builder().header("Authorization", "Basic xyz"));
        assert_eq!(session_token(&parts), None);
    }
}
