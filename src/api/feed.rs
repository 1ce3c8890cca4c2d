use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::api::response::ApiResponse;
use crate::feed::client::{posts_or_fallback, FeedClient, FeedPost};

/// Axum handler for `GET /api/instagram/posts`.
///
/// Never fails: upstream problems degrade to the fallback posts.
pub async fn posts_handler(State(feed): State<Arc<dyn FeedClient>>) -> Json<ApiResponse<Vec<FeedPost>>> {
    Json(ApiResponse::ok(posts_or_fallback(feed.as_ref()).await))
}
