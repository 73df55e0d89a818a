//! Filesystem-backed media store for development and tests.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::key::object_key;
use crate::{MediaError, MediaStore, StoredObject};

/// Writes objects under a root directory and serves them from a public
/// base URL (the API server mounts the directory at `/media`).
pub struct LocalMediaStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalMediaStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Directory the store writes into.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn store(
        &self,
        filename: Option<&str>,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, MediaError> {
        let key = object_key(content_type)?;
        let path = self.root.join(&key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, &bytes).await?;

        tracing::debug!(
            key = %key,
            size_bytes = bytes.len(),
            original_filename = filename.unwrap_or("<unnamed>"),
            "Stored media file on local disk"
        );

        let url = format!("{}/{}", self.public_base_url, key);
        Ok(StoredObject { key, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_bytes_and_builds_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalMediaStore::new(dir.path(), "http://localhost:4000/media/");

        let stored = store
            .store(Some("photo.png"), "image/png", vec![1, 2, 3, 4])
            .await
            .unwrap();

        assert_eq!(stored.url, format!("http://localhost:4000/media/{}", stored.key));
        let written = tokio::fs::read(dir.path().join(&stored.key)).await.unwrap();
        assert_eq!(written, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn rejects_unsupported_content_type() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalMediaStore::new(dir.path(), "http://localhost:4000/media");

        let err = store
            .store(None, "application/zip", vec![0])
            .await
            .unwrap_err();
        assert!(matches!(err, MediaError::UnsupportedContentType(_)));
    }
}
