//! REST client for the marketplace backend's catalog endpoints.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::UpstreamError;

/// HTTP client for one marketplace backend deployment.
///
/// All catalog resources hang off `{base}/{resource}`, so the client
/// only needs the base URL and a resource name per call. Callers that
/// browse anonymously pass `None` for the token; creation always needs
/// the caller's bearer token because the backend records ownership from
/// it.
pub struct UpstreamApi {
    client: reqwest::Client,
    base_url: String,
}

impl UpstreamApi {
    /// Create a new client for the backend at `base_url`.
    ///
    /// * `base_url` - e.g. `https://backend.example.com/api` (trailing
    ///   slashes are stripped so joins stay single-slashed).
    pub fn new(base_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across services).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The normalized base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every record of a catalog resource.
    ///
    /// Sends `GET {base}/{resource}`. The backend replies with a bare
    /// JSON array of records. A token is forwarded when present so the
    /// backend can mark records owned by the caller.
    pub async fn list<T: DeserializeOwned>(
        &self,
        resource: &str,
        token: Option<&str>,
    ) -> Result<Vec<T>, UpstreamError> {
        let mut request = self.client.get(self.endpoint(resource));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        Self::parse_response(response).await
    }

    /// Create a record in a catalog resource.
    ///
    /// Sends `POST {base}/{resource}` with the payload as JSON and the
    /// caller's bearer token. Returns the created record as echoed by
    /// the backend (with its assigned id and timestamps).
    pub async fn create<B: Serialize, T: DeserializeOwned>(
        &self,
        resource: &str,
        payload: &B,
        token: &str,
    ) -> Result<T, UpstreamError> {
        let response = self
            .client
            .post(self.endpoint(resource))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Probe the backend's health endpoint.
    ///
    /// Sends `GET {base}/health` and discards the body. Used by the API
    /// server's own health check to report backend reachability.
    pub async fn ping(&self) -> Result<(), UpstreamError> {
        let response = self.client.get(self.endpoint("health")).send().await?;

        Self::check_status(response).await
    }

    // ---- private helpers ----

    fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource)
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`UpstreamError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, UpstreamError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, UpstreamError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), UpstreamError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let api = UpstreamApi::new("http://backend.example.com/api///".to_string());
        assert_eq!(api.base_url(), "http://backend.example.com/api");
        assert_eq!(api.endpoint("assets"), "http://backend.example.com/api/assets");
    }

    #[test]
    fn endpoint_joins_resource_paths() {
        let api = UpstreamApi::new("http://localhost:5000/api".to_string());
        assert_eq!(
            api.endpoint("product-services"),
            "http://localhost:5000/api/product-services"
        );
        assert_eq!(api.endpoint("health"), "http://localhost:5000/api/health");
    }
}
