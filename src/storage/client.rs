use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::AppError;

/// Metadata of one stored file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub filename: String,
    pub size: u64,
    pub modified: DateTime<Utc>,
}

/// Trait for uploaded-file storage.
///
/// Abstracted as a trait so tests can use a temporary directory or a mock.
/// Files live in flat folders (`videos`, `images`).
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Write a file, replacing any existing file with the same name.
    async fn put(&self, folder: &str, filename: &str, content: Vec<u8>) -> Result<(), AppError>;

    /// All files in a folder, newest first. A missing folder is empty.
    async fn list(&self, folder: &str) -> Result<Vec<StoredFile>, AppError>;

    /// Remove a file. Returns `false` if it did not exist.
    async fn delete(&self, folder: &str, filename: &str) -> Result<bool, AppError>;
}

/// Local filesystem implementation of FileStore, rooted at the upload directory.
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, AppError> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root).map_err(|e| {
            AppError::Storage(format!(
                "Failed to create upload directory '{}': {}",
                root.display(),
                e
            ))
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn folder_path(&self, folder: &str) -> PathBuf {
        self.root.join(folder)
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn put(&self, folder: &str, filename: &str, content: Vec<u8>) -> Result<(), AppError> {
        let dir = self.folder_path(folder);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to create '{}': {}", dir.display(), e)))?;

        let path = dir.join(filename);
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to write '{}': {}", path.display(), e)))?;

        Ok(())
    }

    async fn list(&self, folder: &str) -> Result<Vec<StoredFile>, AppError> {
        let dir = self.folder_path(folder);
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "Failed to read '{}': {}",
                    dir.display(),
                    e
                )))
            }
        };

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?
        {
            let metadata = entry
                .metadata()
                .await
                .map_err(|e| AppError::Storage(e.to_string()))?;
            if !metadata.is_file() {
                continue;
            }

            let modified = metadata
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| Utc::now());

            files.push(StoredFile {
                filename: entry.file_name().to_string_lossy().into_owned(),
                size: metadata.len(),
                modified,
            });
        }

        files.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| b.filename.cmp(&a.filename)));
        Ok(files)
    }

    async fn delete(&self, folder: &str, filename: &str) -> Result<bool, AppError> {
        let path = self.folder_path(folder).join(filename);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to delete '{}': {}",
                path.display(),
                e
            ))),
        }
    }
}
