use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::{DefaultBodyLimit, FromRef};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::{delete, get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::api::content::{content_routes, sub_routes};
use crate::api::upload::{Images, UploadKind, Videos};
use crate::auth::session::AuthService;
use crate::content::service::ContentService;
use crate::db::Repositories;
use crate::error::AppError;
use crate::feed::client::FeedClient;
use crate::models::about_page::{Directors, TeamMembers};
use crate::models::client::Clients;
use crate::models::contact::MapLocations;
use crate::models::footer::{NavigationLinkItems, OfficeLocationItems, SocialLinkItems};
use crate::models::our_work::PortfolioItems;
use crate::models::{
    AboutPageContent, ClientContent, ContactContent, FooterContent, OurWorkContent, PrivacyPolicy,
    ServicesContent,
};
use crate::storage::client::FileStore;

/// Room left for multipart boundaries and headers on top of the file size limit.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Shared application state available to all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub about_page: ContentService<AboutPageContent>,
    pub services: ContentService<ServicesContent>,
    pub contact: ContentService<ContactContent>,
    pub footer: ContentService<FooterContent>,
    pub privacy_policy: ContentService<PrivacyPolicy>,
    pub our_work: ContentService<OurWorkContent>,
    pub clients: ContentService<ClientContent>,
    pub auth: AuthService,
    pub file_store: Arc<dyn FileStore>,
    pub feed: Arc<dyn FeedClient>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        repos: Repositories,
        session_secret: &str,
        session_ttl: chrono::Duration,
        file_store: Arc<dyn FileStore>,
        feed: Arc<dyn FeedClient>,
    ) -> Self {
        Self {
            about_page: ContentService::new(repos.about_page),
            services: ContentService::new(repos.services),
            contact: ContentService::new(repos.contact),
            footer: ContentService::new(repos.footer),
            privacy_policy: ContentService::new(repos.privacy_policy),
            our_work: ContentService::new(repos.our_work),
            clients: ContentService::new(repos.clients),
            auth: AuthService::new(repos.users, repos.sessions, session_secret, session_ttl),
            file_store,
            feed,
            started_at: Instant::now(),
        }
    }
}

macro_rules! state_part {
    ($ty:ty, $field:ident) => {
        impl FromRef<AppState> for $ty {
            fn from_ref(state: &AppState) -> Self {
                state.$field.clone()
            }
        }
    };
}

state_part!(ContentService<AboutPageContent>, about_page);
state_part!(ContentService<ServicesContent>, services);
state_part!(ContentService<ContactContent>, contact);
state_part!(ContentService<FooterContent>, footer);
state_part!(ContentService<PrivacyPolicy>, privacy_policy);
state_part!(ContentService<OurWorkContent>, our_work);
state_part!(ContentService<ClientContent>, clients);
state_part!(AuthService, auth);
state_part!(Arc<dyn FileStore>, file_store);
state_part!(Arc<dyn FeedClient>, feed);
state_part!(Instant, started_at);

fn upload_routes<K: UploadKind>() -> Router<AppState> {
    Router::new()
        .route(
            "/upload",
            post(api::upload::upload_handler::<K>).layer(
                ServiceBuilder::new()
                    .layer(DefaultBodyLimit::disable())
                    .layer(RequestBodyLimitLayer::new(K::POLICY.max_bytes + MULTIPART_OVERHEAD)),
            ),
        )
        .route("/list", get(api::upload::list_handler::<K>))
        .route("/delete/{filename}", delete(api::upload::delete_handler::<K>))
}

fn cors_layer(allowed_origins: Option<Vec<String>>) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    match allowed_origins {
        None => base.allow_origin(Any),
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| match o.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                        None
                    }
                })
                .collect();
            base.allow_origin(origins).allow_credentials(true)
        }
    }
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".into())
}

/// Build the full HTTP router.
///
/// Uploaded files under `upload_dir` are served statically at `/uploads`.
pub fn build_router(state: AppState, upload_dir: &Path, allowed_origins: Option<Vec<String>>) -> Router {
    Router::new()
        // Content types
        .nest(
            "/api/about-page-content",
            content_routes::<AboutPageContent>()
                .merge(sub_routes::<AboutPageContent, TeamMembers>())
                .merge(sub_routes::<AboutPageContent, Directors>()),
        )
        .nest("/api/services-content", content_routes::<ServicesContent>())
        .nest(
            "/api/contact-content",
            content_routes::<ContactContent>().merge(sub_routes::<ContactContent, MapLocations>()),
        )
        .nest(
            "/api/footer-content",
            content_routes::<FooterContent>()
                .merge(sub_routes::<FooterContent, SocialLinkItems>())
                .merge(sub_routes::<FooterContent, NavigationLinkItems>())
                .merge(sub_routes::<FooterContent, OfficeLocationItems>()),
        )
        .nest("/api/privacy-policy", content_routes::<PrivacyPolicy>())
        .nest(
            "/api/our-work-content",
            content_routes::<OurWorkContent>().merge(sub_routes::<OurWorkContent, PortfolioItems>()),
        )
        .nest(
            "/api/client-content",
            content_routes::<ClientContent>().merge(sub_routes::<ClientContent, Clients>()),
        )
        // Auth
        .route("/api/auth/login", post(crate::auth::handlers::login_handler))
        .route("/api/auth/verify", get(crate::auth::handlers::verify_handler))
        .route("/api/auth/logout", post(crate::auth::handlers::logout_handler))
        // Media
        .nest("/api/videos", upload_routes::<Videos>())
        .nest("/api/images", upload_routes::<Images>())
        // Misc
        .route("/api/instagram/posts", get(api::feed::posts_handler))
        .route("/api/health", get(api::health::health_handler))
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .fallback(route_not_found)
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::client::InstagramFeedClient;
    use crate::storage::client::LocalFileStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn router(dir: &Path, origins: Option<Vec<String>>) -> Router {
        let feed = InstagramFeedClient::new("http://127.0.0.1:9", None, std::time::Duration::from_secs(1))
            .unwrap();
        let state = AppState::new(
            Repositories::in_memory(),
            "secret",
            chrono::Duration::hours(1),
            Arc::new(LocalFileStore::new(dir).unwrap()),
            Arc::new(feed),
        );
        build_router(state, dir, origins)
    }

    #[tokio::test]
    async fn test_health_route() {
        let dir = tempfile::tempdir().unwrap();
        let response = router(dir.path(), None)
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_upload_route_rejects_declared_oversize_body() {
        let dir = tempfile::tempdir().unwrap();
        let too_big = Images::POLICY.max_bytes + MULTIPART_OVERHEAD + 1;

        let response = router(dir.path(), None)
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/images/upload")
                    .header("content-type", "multipart/form-data; boundary=x")
                    .header("content-length", too_big.to_string())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_cors_preflight_for_configured_origin() {
        let dir = tempfile::tempdir().unwrap();
        let app = router(dir.path(), Some(vec!["https://site.example".into()]));

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/services-content")
                    .header("Origin", "https://site.example")
                    .header("Access-Control-Request-Method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "https://site.example"
        );
        assert_eq!(
            response.headers().get("access-control-allow-credentials").unwrap(),
            "true"
        );
    }
}
