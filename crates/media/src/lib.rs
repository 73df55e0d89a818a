//! Media storage for listing imagery.
//!
//! Uploaded images land behind the [`MediaStore`] trait so the API
//! server can run against S3 in deployment and a local directory in
//! development and tests. Every stored object gets a date-partitioned
//! key and a public URL the catalog records can embed.

use async_trait::async_trait;

pub mod key;
pub mod local;
pub mod s3;

pub use local::LocalMediaStore;
pub use s3::S3MediaStore;

/// A stored media object: its backend key and the URL clients use.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub key: String,
    pub url: String,
}

/// Errors from media storage.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// The content type is not an image format we accept.
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// The storage backend rejected or failed the write.
    #[error("storage backend error: {0}")]
    Storage(String),

    /// Local filesystem I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write-only store for uploaded media.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Persist one uploaded file and return its key and public URL.
    ///
    /// * `filename` - client-supplied name, used for logging only.
    /// * `content_type` - must be a supported image type.
    async fn store(
        &self,
        filename: Option<&str>,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, MediaError>;
}
