use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL of the marketplace backend. Unset means the server runs in
    /// seed-only mode: browse pages work from the built-in catalogs and
    /// listing creation is rejected.
    pub upstream_api_url: Option<String>,
    /// Per-file upload size cap in bytes (default: 8 MiB).
    pub max_upload_bytes: usize,
    /// Where uploaded listing imagery is stored.
    pub media: MediaConfig,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

/// Media storage backend selection.
#[derive(Debug, Clone)]
pub enum MediaConfig {
    /// Local directory, served by this server at `/media`.
    Local {
        root: PathBuf,
        public_base_url: String,
    },
    /// S3 bucket, optionally behind a CDN base URL.
    S3 {
        bucket: String,
        prefix: Option<String>,
        public_base_url: Option<String>,
    },
}

/// Default per-file upload cap: 8 MiB.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                         |
    /// |-------------------------|---------------------------------|
    /// | `HOST`                  | `0.0.0.0`                       |
    /// | `PORT`                  | `3000`                          |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`         |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                            |
    /// | `UPSTREAM_API_URL`      | unset (seed-only mode)          |
    /// | `MAX_UPLOAD_BYTES`      | `8388608` (8 MiB)               |
    /// | `MEDIA_BACKEND`         | `local`                         |
    /// | `MEDIA_ROOT`            | `./media` (local backend)       |
    /// | `MEDIA_PUBLIC_BASE_URL` | `http://localhost:{PORT}/media` |
    /// | `S3_BUCKET`             | required when `MEDIA_BACKEND=s3`|
    /// | `S3_KEY_PREFIX`         | unset                           |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upstream_api_url = std::env::var("UPSTREAM_API_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let media = MediaConfig::from_env(port);
        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            upstream_api_url,
            max_upload_bytes,
            media,
            jwt,
        }
    }
}

impl MediaConfig {
    /// Load the media backend selection from environment variables.
    ///
    /// # Panics
    ///
    /// Panics on an unknown `MEDIA_BACKEND` value, or when `MEDIA_BACKEND=s3`
    /// without `S3_BUCKET`. Misconfigured storage should fail at startup,
    /// not on the first upload.
    fn from_env(port: u16) -> Self {
        let backend = std::env::var("MEDIA_BACKEND").unwrap_or_else(|_| "local".into());

        match backend.as_str() {
            "local" => {
                let root = std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "./media".into());
                let public_base_url = std::env::var("MEDIA_PUBLIC_BASE_URL")
                    .unwrap_or_else(|_| format!("http://localhost:{port}/media"));
                MediaConfig::Local {
                    root: PathBuf::from(root),
                    public_base_url,
                }
            }
            "s3" => {
                let bucket = std::env::var("S3_BUCKET")
                    .expect("S3_BUCKET must be set when MEDIA_BACKEND=s3");
                let prefix = std::env::var("S3_KEY_PREFIX").ok();
                let public_base_url = std::env::var("MEDIA_PUBLIC_BASE_URL").ok();
                MediaConfig::S3 {
                    bucket,
                    prefix,
                    public_base_url,
                }
            }
            other => panic!("Unknown MEDIA_BACKEND '{other}'. Must be 'local' or 's3'"),
        }
    }
}
