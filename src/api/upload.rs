use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::response::ApiResponse;
use crate::auth::middleware::AdminSession;
use crate::error::AppError;
use crate::storage::client::FileStore;
use crate::storage::policy::{validate_filename, UploadPolicy, IMAGE_POLICY, VIDEO_POLICY};

/// A kind of uploadable media, selecting the policy its routes enforce.
pub trait UploadKind: Send + Sync + 'static {
    const POLICY: UploadPolicy;
}

pub struct Videos;

impl UploadKind for Videos {
    const POLICY: UploadPolicy = VIDEO_POLICY;
}

pub struct Images;

impl UploadKind for Images {
    const POLICY: UploadPolicy = IMAGE_POLICY;
}

/// Response data for a successful upload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub filename: String,
    pub original_name: String,
    pub size: u64,
    pub url: String,
}

/// One entry of a file listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub filename: String,
    pub url: String,
    pub size: u64,
    pub upload_date: DateTime<Utc>,
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::BadRequest(format!("Multipart error: {}", e.body_text()))
    }
}

/// Core upload logic, kept apart from the HTTP layer.
///
/// Reads the policy's file field from the form, checks it and stores it
/// under a generated name.
pub async fn process_upload(
    store: &dyn FileStore,
    policy: &UploadPolicy,
    mut multipart: Multipart,
) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(policy.field) {
            continue;
        }

        // 1. Check the extension and content type
        let original_name = field.file_name().unwrap_or_default().to_string();
        let extension = policy.check(&original_name, field.content_type())?;

        // 2. Read the content, enforcing the size limit
        let data = field.bytes().await.map_err(multipart_error)?;
        if data.len() > policy.max_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "{} exceeds the {} MB limit",
                policy.label,
                policy.max_bytes / (1024 * 1024)
            )));
        }
        if data.is_empty() {
            return Err(AppError::BadRequest(format!("{} file is empty", policy.label)));
        }

        // 3. Store under a fresh name
        let filename = policy.generate_filename(&extension);
        let size = data.len() as u64;
        store.put(policy.folder, &filename, data.to_vec()).await?;

        tracing::info!(folder = policy.folder, %filename, size, "Stored upload '{}'", original_name);

        return Ok(UploadedFile {
            url: policy.public_url(&filename),
            filename,
            original_name,
            size,
        });
    }

    Err(AppError::BadRequest(format!(
        "No {} file provided (expected form field '{}')",
        policy.kind, policy.field
    )))
}

/// Stored files of one kind, newest first. Files with foreign extensions are skipped.
pub async fn process_list(store: &dyn FileStore, policy: &UploadPolicy) -> Result<Vec<FileEntry>, AppError> {
    let files = store.list(policy.folder).await?;
    Ok(files
        .into_iter()
        .filter(|f| policy.accepts_stored(&f.filename))
        .map(|f| FileEntry {
            url: policy.public_url(&f.filename),
            filename: f.filename,
            size: f.size,
            upload_date: f.modified,
        })
        .collect())
}

pub async fn process_delete(store: &dyn FileStore, policy: &UploadPolicy, filename: &str) -> Result<(), AppError> {
    validate_filename(filename)?;
    if !store.delete(policy.folder, filename).await? {
        return Err(AppError::NotFound(format!("{} file not found", policy.label)));
    }
    tracing::info!(folder = policy.folder, filename, "Deleted upload");
    Ok(())
}

/// Axum handler for `POST /api/{videos,images}/upload`.
pub async fn upload_handler<K: UploadKind>(
    State(store): State<Arc<dyn FileStore>>,
    _admin: AdminSession,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<UploadedFile>>), AppError> {
    let uploaded = process_upload(store.as_ref(), &K::POLICY, multipart).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(uploaded).with_message(format!("{} uploaded successfully", K::POLICY.label))),
    ))
}

/// Axum handler for `GET /api/{videos,images}/list`.
pub async fn list_handler<K: UploadKind>(
    State(store): State<Arc<dyn FileStore>>,
    _admin: AdminSession,
) -> Result<Json<ApiResponse<Vec<FileEntry>>>, AppError> {
    let files = process_list(store.as_ref(), &K::POLICY).await?;
    Ok(Json(ApiResponse::ok(files)))
}

/// Axum handler for `DELETE /api/{videos,images}/delete/{filename}`.
pub async fn delete_handler<K: UploadKind>(
    State(store): State<Arc<dyn FileStore>>,
    _admin: AdminSession,
    Path(filename): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    process_delete(store.as_ref(), &K::POLICY, &filename).await?;
    Ok(Json(ApiResponse::message(format!("{} deleted successfully", K::POLICY.label))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::client::LocalFileStore;

    #[tokio::test]
    async fn test_list_skips_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path()).unwrap();
        store.put("videos", "video-1-a.mp4", vec![1, 2, 3]).await.unwrap();
        store.put("videos", "notes.txt", vec![1]).await.unwrap();

        let files = process_list(&store, &VIDEO_POLICY).await.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].url, "/uploads/videos/video-1-a.mp4");
        assert_eq!(files[0].size, 3);
    }

    #[tokio::test]
    async fn test_delete_missing_and_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path()).unwrap();

        assert!(matches!(
            process_delete(&store, &IMAGE_POLICY, "image-1.png").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            process_delete(&store, &IMAGE_POLICY, "..").await,
            Err(AppError::BadRequest(_))
        ));
    }
}
