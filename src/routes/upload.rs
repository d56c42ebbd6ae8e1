//! `POST /upload` — the upload form's native action.
//!
//! Only the submitted file name is checked. The file field is drained and
//! dropped whatever the verdict, and every outcome, including a body over the
//! size limit, redirects back to the page with a `notice`.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use axum::extract::Multipart;
use axum::extract::multipart::{Field, MultipartError};
use axum::http::StatusCode;
use axum::response::Redirect;
use client::upload::{Notice, is_allowed_file_name};

/// Form field carrying the file.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),
}

pub(crate) fn upload_error_to_status(err: &UploadError) -> StatusCode {
    match err {
        UploadError::Multipart(e) => e.status(),
    }
}

/// Classify a submitted file name.
pub(crate) fn check_file_name(file_name: &str) -> Notice {
    if file_name.trim().is_empty() {
        Notice::Missing
    } else if is_allowed_file_name(file_name) {
        Notice::Received
    } else {
        Notice::Invalid
    }
}

pub async fn upload(mut multipart: Multipart) -> Result<Redirect, StatusCode> {
    match receive(&mut multipart).await {
        Ok(notice) => Ok(Redirect::to(&notice.location())),
        Err(e) => {
            let status = upload_error_to_status(&e);
            if status == StatusCode::PAYLOAD_TOO_LARGE {
                tracing::info!(error = %e, "upload over size limit");
                return Ok(Redirect::to(&Notice::TooLarge.location()));
            }
            tracing::warn!(error = %e, "upload body rejected");
            Err(status)
        }
    }
}

async fn receive(multipart: &mut Multipart) -> Result<Notice, UploadError> {
    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_owned();
        let notice = check_file_name(&file_name);
        let bytes = drain(&mut field).await?;
        if notice == Notice::Received {
            tracing::info!(%file_name, bytes, "upload received");
        } else {
            tracing::info!(%file_name, bytes, notice = notice.as_query(), "upload refused");
        }
        return Ok(notice);
    }

    tracing::info!("upload without a file field");
    Ok(Notice::NoFilePart)
}

/// Read a field to the end so the client gets the redirect, not a reset.
async fn drain(field: &mut Field<'_>) -> Result<usize, UploadError> {
    let mut bytes = 0usize;
    while let Some(chunk) = field.chunk().await? {
        bytes += chunk.len();
    }
    Ok(bytes)
}
