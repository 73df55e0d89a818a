//! Listing image uploads.
//!
//! Accepts a multipart form of one or more image parts and answers with the
//! public URL for each stored file, in part order. Listing creation then
//! carries those URLs in its payload; the files themselves never pass
//! through the marketplace backend.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Public URL per uploaded part, in the order the parts arrived.
    pub urls: Vec<String>,
}

/// `POST /api/v1/uploads`
pub async fn upload(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadResponse>>)> {
    let max_bytes = state.config.max_upload_bytes;
    let mut urls = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(format!("Malformed multipart body: {err}")))?
    {
        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string).ok_or_else(|| {
            AppError::BadRequest("Upload part is missing a content type".to_string())
        })?;
        let bytes = field
            .bytes()
            .await
            .map_err(|err| AppError::BadRequest(format!("Failed to read upload: {err}")))?;

        if bytes.len() > max_bytes {
            return Err(AppError::BadRequest(format!(
                "File exceeds the upload limit of {max_bytes} bytes"
            )));
        }

        let stored = state
            .media
            .store(filename.as_deref(), &content_type, bytes.to_vec())
            .await?;
        urls.push(stored.url);
    }

    if urls.is_empty() {
        return Err(AppError::BadRequest(
            "No files were provided".to_string(),
        ));
    }

    tracing::info!(
        user_id = user.user_id,
        count = urls.len(),
        "Stored listing media"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadResponse { urls },
        }),
    ))
}
