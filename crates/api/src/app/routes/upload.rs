use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Extension, Multipart},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Local;

use restock_infra::{ReportGrid, SourceFormat, read_table, render_xlsx, report_file_name};
use restock_transfer::{PlanOutcome, TransferConfig, plan_transfers};

use crate::app::AppState;
use crate::app::errors::{UploadError, text_response};

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const NO_RECOMMENDATIONS: &str = "No recommendations generated.";

const FILE_FIELD: &str = "file";

#[derive(Debug)]
struct UploadedFile {
    name: String,
    bytes: Bytes,
}

/// Accept one spreadsheet and answer with the report workbook, or a plain-text
/// status when there is nothing to recommend.
pub async fn upload(Extension(state): Extension<Arc<AppState>>, multipart: Multipart) -> Response {
    match handle_upload(state.transfer, multipart).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

async fn handle_upload(config: TransferConfig, mut multipart: Multipart) -> Result<Response, UploadError> {
    let file = file_part(&mut multipart).await?.ok_or(UploadError::NoFilePart)?;
    if file.name.trim().is_empty() {
        return Err(UploadError::NoSelectedFile);
    }
    tracing::info!(file = %file.name, bytes = file.bytes.len(), "upload received");

    // Planning and rendering are CPU-bound; keep them off the async workers.
    let span = tracing::Span::current();
    let report = tokio::task::spawn_blocking(move || -> Result<Option<Vec<u8>>, UploadError> {
        let _enter = span.enter();
        let raw = read_table(&file.bytes, SourceFormat::from_file_name(&file.name))?;
        let outcome = plan_transfers(&raw, &config);
        tracing::info!(run_id = %outcome.run_id(), "planning finished");
        match outcome {
            PlanOutcome::Planned(plan) => Ok(Some(render_xlsx(&ReportGrid::from_plan(&plan))?)),
            PlanOutcome::NoRecommendations { .. } => Ok(None),
        }
    })
    .await??;

    let Some(bytes) = report else {
        return Ok(text_response(StatusCode::OK, NO_RECOMMENDATIONS));
    };

    let file_name = report_file_name(Local::now().date_naive());
    let disposition = format!("attachment; filename=\"{file_name}\"");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// The first part named `file`, if any.
async fn file_part(multipart: &mut Multipart) -> Result<Option<UploadedFile>, UploadError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        return Ok(Some(UploadedFile { name, bytes }));
    }
    Ok(None)
}
