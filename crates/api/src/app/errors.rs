use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use restock_infra::{IngestError, ReportError};

/// Upload-level failures. The planner itself never fails on a readable table.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No file part")]
    NoFilePart,

    #[error("No selected file")]
    NoSelectedFile,

    #[error("could not read the upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("could not read the uploaded table: {0}")]
    Ingest(#[from] IngestError),

    #[error("could not build the report: {0}")]
    Report(#[from] ReportError),

    #[error("planning task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl UploadError {
    pub fn status(&self) -> StatusCode {
        match self {
            UploadError::NoFilePart | UploadError::NoSelectedFile => StatusCode::BAD_REQUEST,
            UploadError::Multipart(e) => e.status(),
            UploadError::Ingest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            UploadError::Report(_) | UploadError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "upload failed");
        } else {
            tracing::info!(error = %self, "upload rejected");
        }
        text_response(status, self.to_string())
    }
}

pub fn text_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, message.into()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_mistakes_are_bad_requests() {
        assert_eq!(UploadError::NoFilePart.status(), StatusCode::BAD_REQUEST);
        assert_eq!(UploadError::NoSelectedFile.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            UploadError::Ingest(IngestError::MissingColumn("Site")).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn messages_are_plain_text() {
        assert_eq!(UploadError::NoFilePart.to_string(), "No file part");
        assert_eq!(
            UploadError::Ingest(IngestError::MissingColumn("Site")).to_string(),
            "could not read the uploaded table: missing required column: Site"
        );
    }
}
