use crate::error::AppError;

const MIB: usize = 1024 * 1024;

/// Rules for one kind of upload: which form field carries the file, how big
/// it may be and which file types are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    /// Prefix of generated filenames (`video-...`).
    pub kind: &'static str,
    /// Capitalized name used in response messages.
    pub label: &'static str,
    /// Multipart field holding the file.
    pub field: &'static str,
    /// Folder under the upload root, also the public URL segment.
    pub folder: &'static str,
    pub max_bytes: usize,
    pub extensions: &'static [&'static str],
    /// Accepted MIME type prefix (`video/`).
    pub mime_prefix: &'static str,
    /// Whether a missing or generic (`application/octet-stream`) content type is accepted.
    pub allow_generic_mime: bool,
}

pub const VIDEO_POLICY: UploadPolicy = UploadPolicy {
    kind: "video",
    label: "Video",
    field: "video",
    folder: "videos",
    max_bytes: 100 * MIB,
    extensions: &["mp4", "mov", "avi", "mkv", "webm", "ogv", "3gp", "flv"],
    mime_prefix: "video/",
    allow_generic_mime: true,
};

pub const IMAGE_POLICY: UploadPolicy = UploadPolicy {
    kind: "image",
    label: "Image",
    field: "image",
    folder: "images",
    max_bytes: 10 * MIB,
    extensions: &["jpg", "jpeg", "png", "gif", "webp", "svg"],
    mime_prefix: "image/",
    allow_generic_mime: false,
};

impl UploadPolicy {
    /// Check the client-supplied name and content type, returning the
    /// normalized (lowercase) extension.
    pub fn check(&self, original_name: &str, content_type: Option<&str>) -> Result<String, AppError> {
        let extension = original_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| self.extensions.contains(&ext.as_str()))
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Only {} files are allowed ({})",
                    self.kind,
                    self.extensions.join(", ")
                ))
            })?;

        let mime_ok = match content_type {
            None => self.allow_generic_mime,
            Some("application/octet-stream") => self.allow_generic_mime,
            Some(mime) => mime.starts_with(self.mime_prefix),
        };
        if !mime_ok {
            return Err(AppError::BadRequest(format!(
                "Invalid content type for {} upload: {}",
                self.kind,
                content_type.unwrap_or("none")
            )));
        }

        Ok(extension)
    }

    /// Collision-resistant stored name: `<kind>-<millis>-<uuid>.<ext>`.
    pub fn generate_filename(&self, extension: &str) -> String {
        format!(
            "{}-{}-{}.{}",
            self.kind,
            chrono::Utc::now().timestamp_millis(),
            uuid::Uuid::new_v4(),
            extension
        )
    }

    /// Whether a stored filename carries one of the accepted extensions.
    pub fn accepts_stored(&self, filename: &str) -> bool {
        filename
            .rsplit_once('.')
            .map(|(_, ext)| self.extensions.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false)
    }

    /// Public URL of a stored file.
    pub fn public_url(&self, filename: &str) -> String {
        format!("/uploads/{}/{}", self.folder, filename)
    }
}

/// Reject filenames that could escape the upload folder.
pub fn validate_filename(filename: &str) -> Result<(), AppError> {
    if filename.is_empty()
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains("..")
    {
        return Err(AppError::BadRequest(format!("Invalid filename '{}'", filename)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_extensions() {
        assert_eq!(VIDEO_POLICY.check("clip.MP4", Some("video/mp4")).unwrap(), "mp4");
        assert_eq!(VIDEO_POLICY.check("clip.webm", None).unwrap(), "webm");
        assert_eq!(
            VIDEO_POLICY
                .check("clip.mov", Some("application/octet-stream"))
                .unwrap(),
            "mov"
        );
        assert!(VIDEO_POLICY.check("notes.txt", Some("text/plain")).is_err());
        assert!(VIDEO_POLICY.check("noextension", Some("video/mp4")).is_err());
    }

    #[test]
    fn test_mime_mismatch_rejected() {
        assert!(VIDEO_POLICY.check("clip.mp4", Some("text/plain")).is_err());
        assert!(IMAGE_POLICY.check("logo.png", None).is_err());
        assert!(IMAGE_POLICY.check("logo.svg", Some("image/svg+xml")).is_ok());
    }

    #[test]
    fn test_generated_filename_shape() {
        let name = VIDEO_POLICY.generate_filename("mp4");
        assert!(name.starts_with("video-"));
        assert!(name.ends_with(".mp4"));
        assert_ne!(name, VIDEO_POLICY.generate_filename("mp4"));
        assert_eq!(
            VIDEO_POLICY.public_url("video-1.mp4"),
            "/uploads/videos/video-1.mp4"
        );
    }

    #[test]
    fn test_accepts_stored() {
        assert!(VIDEO_POLICY.accepts_stored("video-1-a.MP4"));
        assert!(!VIDEO_POLICY.accepts_stored(".DS_Store"));
        assert!(!IMAGE_POLICY.accepts_stored("video-1-a.mp4"));
    }

    #[test]
    fn test_validate_filename() {
        assert!(validate_filename("video-1-abc.mp4").is_ok());
        assert!(validate_filename("../secret").is_err());
        assert!(validate_filename("a/b.mp4").is_err());
        assert!(validate_filename("a\\b.mp4").is_err());
        assert!(validate_filename("").is_err());
    }
}
