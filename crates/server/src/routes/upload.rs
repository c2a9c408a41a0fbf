//! Catalog upload route handler.

use axum::{Json, extract::Multipart, extract::State};
use serde::Serialize;

use bookstall_core::Email;

use crate::error::{AppError, Result};
use crate::middleware::CurrentSeller;
use crate::services::ingest;
use crate::state::AppState;

/// Multipart field name carrying the catalog file.
const CSV_FIELD: &str = "csv";

/// Successful upload response.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    /// Rows committed to the catalog.
    pub imported: usize,
    /// Malformed rows rejected.
    pub skipped: usize,
}

/// Bulk-ingest a catalog file uploaded by an authenticated seller.
///
/// The `CurrentSeller` extractor has already verified the bearer token, so
/// anonymous and sellerless callers are rejected before any parsing. The
/// file's rows are attributed to the token's subject email regardless of
/// file content.
pub async fn upload(
    State(state): State<AppState>,
    CurrentSeller(claims): CurrentSeller,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let data = read_csv_field(&mut multipart).await?;

    // The claim subject was validated at registration time.
    let seller = Email::parse(&claims.sub)
        .map_err(|e| AppError::Internal(format!("invalid subject claim: {e}")))?;

    let report = ingest::ingest(state.catalog(), &seller, &data)?;

    Ok(Json(UploadResponse {
        message: "Catalog file uploaded successfully".to_owned(),
        imported: report.imported,
        skipped: report.skipped,
    }))
}

/// Find the `csv` field and read its bytes.
async fn read_csv_field(multipart: &mut Multipart) -> Result<Vec<u8>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("malformed multipart body: {e}")))?
    {
        if field.name() == Some(CSV_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Internal(format!("unreadable upload stream: {e}")))?;
            return Ok(bytes.to_vec());
        }
    }

    Err(AppError::BadRequest(format!(
        "missing multipart field '{CSV_FIELD}'"
    )))
}
