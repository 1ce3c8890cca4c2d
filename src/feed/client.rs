use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Post fields requested from the Graph API.
pub const MEDIA_FIELDS: &str = "id,caption,media_type,media_url,thumbnail_url,permalink,timestamp,username";

/// Number of posts shown on the site.
pub const POST_LIMIT: u32 = 3;

/// A social-media post in the shape the site renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPost {
    pub id: String,
    pub caption: String,
    pub media_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub media_type: String,
    pub timestamp: Option<String>,
    pub username: Option<String>,
    pub permalink: Option<String>,
    pub like_count: u64,
    pub comments_count: u64,
}

/// Trait for fetching the latest posts of the configured account.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedClient: Send + Sync {
    async fn recent_posts(&self) -> Result<Vec<FeedPost>, AppError>;
}

#[derive(Debug, Deserialize)]
struct MediaPage {
    data: Vec<MediaItem>,
}

#[derive(Debug, Deserialize)]
struct MediaItem {
    id: String,
    caption: Option<String>,
    media_type: Option<String>,
    media_url: Option<String>,
    thumbnail_url: Option<String>,
    permalink: Option<String>,
    timestamp: Option<String>,
    username: Option<String>,
}

impl From<MediaItem> for FeedPost {
    fn from(item: MediaItem) -> Self {
        Self {
            id: item.id,
            caption: item.caption.unwrap_or_default(),
            media_url: item.media_url,
            thumbnail_url: item.thumbnail_url,
            media_type: item.media_type.unwrap_or_else(|| "IMAGE".to_string()),
            timestamp: item.timestamp,
            username: item.username,
            permalink: item.permalink,
            // The basic display API does not expose engagement counts.
            like_count: 0,
            comments_count: 0,
        }
    }
}

/// Instagram Graph API implementation of FeedClient.
pub struct InstagramFeedClient {
    http: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
}

impl InstagramFeedClient {
    pub fn new(base_url: &str, access_token: Option<String>, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.filter(|t| !t.trim().is_empty()),
        })
    }
}

#[async_trait]
impl FeedClient for InstagramFeedClient {
    async fn recent_posts(&self) -> Result<Vec<FeedPost>, AppError> {
        let token = self
            .access_token
            .as_deref()
            .ok_or_else(|| AppError::Internal("Instagram access token not configured".into()))?;

        let limit = POST_LIMIT.to_string();
        let response = self
            .http
            .get(format!("{}/me/media", self.base_url))
            .query(&[
                ("fields", MEDIA_FIELDS),
                ("access_token", token),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Instagram request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Internal(format!("Instagram API returned {}", status)));
        }

        let page: MediaPage = response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Invalid Instagram response: {}", e)))?;

        Ok(page.data.into_iter().map(FeedPost::from).collect())
    }
}

fn fallback_post(id: &str, caption: &str, media_url: &str, timestamp: &str, likes: u64, comments: u64) -> FeedPost {
    FeedPost {
        id: id.into(),
        caption: caption.into(),
        media_url: Some(media_url.into()),
        thumbnail_url: None,
        media_type: "IMAGE".into(),
        timestamp: Some(timestamp.into()),
        username: Some("Voix & Vision Worx".into()),
        permalink: Some("https://instagram.com".into()),
        like_count: likes,
        comments_count: comments,
    }
}

/// The fixed posts served whenever the live feed is unavailable.
pub fn fallback_posts() -> Vec<FeedPost> {
    vec![
        fallback_post(
            "1",
            "In today's fast-evolving marketing landscape, data driven AI combined with strategic human creativity is the winning formula. At VVWorx, we harness this synergy to design campaigns that lead industries, not follow.",
            "/vua.jpeg",
            "2025-11-15T10:00:00Z",
            12,
            0,
        ),
        fallback_post(
            "2",
            "Because why use boring charts when samosas are crispy hot, and the ultimate funnel hack? Marketing Funnel - 5 pages",
            "/strategy.jpeg",
            "2025-11-10T14:30:00Z",
            11,
            2,
        ),
        fallback_post(
            "3",
            "Not just building solutions we're designing revolutions. This is our mark of innovation. #NextGenThinking #InnovateWithUs #MarkOfInnovation",
            "/digital.jpeg",
            "2025-11-05T09:15:00Z",
            15,
            1,
        ),
    ]
}

/// Fetch the live feed, degrading to the fallback posts on any failure.
pub async fn posts_or_fallback(client: &dyn FeedClient) -> Vec<FeedPost> {
    match client.recent_posts().await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::warn!("Using fallback Instagram posts: {}", e);
            fallback_posts()
        }
    }
}
