//! S3-backed media store.

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;

use crate::key::object_key;
use crate::{MediaError, MediaStore, StoredObject};

/// Uploads objects to one bucket under an optional key prefix.
///
/// Public URLs come from `public_base_url` when set (a CDN or
/// virtual-hosted bucket domain), otherwise from the bucket's global
/// S3 endpoint.
pub struct S3MediaStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    prefix: String,
    public_base_url: Option<String>,
}

impl S3MediaStore {
    /// Build a store using ambient AWS credentials and region
    /// (environment, shared config, or instance metadata).
    pub async fn from_env(
        bucket: String,
        prefix: Option<String>,
        public_base_url: Option<String>,
    ) -> Self {
        let config = aws_config::load_from_env().await;
        let client = aws_sdk_s3::Client::new(&config);
        Self::with_client(client, bucket, prefix, public_base_url)
    }

    pub fn with_client(
        client: aws_sdk_s3::Client,
        bucket: String,
        prefix: Option<String>,
        public_base_url: Option<String>,
    ) -> Self {
        let prefix = prefix
            .map(|p| p.trim_matches('/').to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_default();
        Self {
            client,
            bucket,
            prefix,
            public_base_url: public_base_url.map(|u| u.trim_end_matches('/').to_string()),
        }
    }

    fn full_key(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}/{}", self.prefix, key)
        }
    }

    fn object_url(&self, key: &str) -> String {
        match &self.public_base_url {
            Some(base) => format!("{base}/{key}"),
            None => format!("https://{}.s3.amazonaws.com/{key}", self.bucket),
        }
    }
}

#[async_trait]
impl MediaStore for S3MediaStore {
    async fn store(
        &self,
        filename: Option<&str>,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, MediaError> {
        let key = self.full_key(&object_key(content_type)?);
        let size_bytes = bytes.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|err| MediaError::Storage(DisplayErrorContext(&err).to_string()))?;

        tracing::debug!(
            bucket = %self.bucket,
            key = %key,
            size_bytes,
            original_filename = filename.unwrap_or("<unnamed>"),
            "Uploaded media object to S3"
        );

        let url = self.object_url(&key);
        Ok(StoredObject { key, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(prefix: Option<&str>, base: Option<&str>) -> S3MediaStore {
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
            .build();
        S3MediaStore::with_client(
            aws_sdk_s3::Client::from_conf(config),
            "backlot-media".to_string(),
            prefix.map(str::to_string),
            base.map(str::to_string),
        )
    }

    #[test]
    fn prefix_is_normalized_into_keys() {
        let store = store_with(Some("/uploads/"), None);
        assert_eq!(store.full_key("2026/08/26/x.jpg"), "uploads/2026/08/26/x.jpg");

        let bare = store_with(None, None);
        assert_eq!(bare.full_key("2026/08/26/x.jpg"), "2026/08/26/x.jpg");
    }

    #[test]
    fn public_base_url_overrides_bucket_endpoint() {
        let cdn = store_with(None, Some("https://cdn.backlot.example/"));
        assert_eq!(cdn.object_url("a/b.png"), "https://cdn.backlot.example/a/b.png");

        let direct = store_with(None, None);
        assert_eq!(
            direct.object_url("a/b.png"),
            "https://backlot-media.s3.amazonaws.com/a/b.png"
        );
    }
}
