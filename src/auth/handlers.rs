use axum::extract::State;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use chrono::{TimeZone, Utc};

use crate::api::extract::JsonBody;
use crate::api::response::ApiResponse;
use crate::auth::middleware::session_token;
use crate::auth::models::{LoginRequest, LoginResponse, SessionUser, VerifyResponse};
use crate::auth::session::{AuthService, SESSION_COOKIE};
use crate::content::payload::from_json;
use crate::error::AppError;

fn session_cookie(token: String, max_age: chrono::Duration, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(max_age.num_seconds()))
        .build()
}

/// `POST /api/auth/login`
///
/// Validates credentials against the `users` collection. On success the
/// session token is returned in the body and set as an HttpOnly cookie.
pub async fn login_handler(
    State(auth): State<AuthService>,
    jar: CookieJar,
    JsonBody(body): JsonBody,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), AppError> {
    let request: LoginRequest = from_json(body)?;
    let issued = auth.login(&request.username, &request.password).await?;

    let expires_at = Utc
        .timestamp_millis_opt(issued.session.expires_at.timestamp_millis())
        .single()
        .unwrap_or_else(Utc::now);

    let jar = jar.add(session_cookie(issued.token.clone(), auth.ttl(), auth.secure_cookies()));

    Ok((
        jar,
        Json(
            ApiResponse::ok(LoginResponse {
                token: issued.token,
                user: SessionUser {
                    username: issued.session.username,
                },
                expires_at,
            })
            .with_message("Login successful"),
        ),
    ))
}

/// `GET /api/auth/verify`
///
/// Always answers with `{valid}`; an invalid session is a 401.
pub async fn verify_handler(
    State(auth): State<AuthService>,
    parts: Parts,
) -> (StatusCode, Json<VerifyResponse>) {
    let Some(token) = session_token(&parts) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(VerifyResponse { valid: false, user: None }),
        );
    };

    match auth.authenticate(&token).await {
        Ok(user) => (
            StatusCode::OK,
            Json(VerifyResponse {
                valid: true,
                user: Some(user),
            }),
        ),
        Err(e) => {
            tracing::debug!("Session verification failed: {}", e);
            (
                StatusCode::UNAUTHORIZED,
                Json(VerifyResponse { valid: false, user: None }),
            )
        }
    }
}

/// `POST /api/auth/logout`
///
/// Destroys the server-side session (if any) and clears the cookie.
pub async fn logout_handler(
    State(auth): State<AuthService>,
    jar: CookieJar,
    parts: Parts,
) -> Result<(CookieJar, Json<ApiResponse<()>>), AppError> {
    if let Some(token) = session_token(&parts) {
        auth.logout(&token).await?;
    }

    let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());
    Ok((jar, Json(ApiResponse::message("Logged out successfully"))))
}
