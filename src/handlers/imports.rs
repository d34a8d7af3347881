use actix_multipart::form::{bytes::Bytes, MultipartForm};
use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::imports::ScheduleImporter;

#[derive(Debug, MultipartForm)]
pub struct ScheduleUpload {
    #[multipart(limit = "10MiB")]
    pub file: Bytes,
}

/// Import a match schedule from an uploaded spreadsheet. Returns the
/// aggregate counters plus one descriptor per duplicate for manual review.
pub async fn import_schedule(
    importer: web::Data<ScheduleImporter>,
    MultipartForm(form): MultipartForm<ScheduleUpload>,
) -> Result<HttpResponse, AppError> {
    if form.file.data.is_empty() {
        return Err(AppError::BadRequest("No file uploaded".to_string()));
    }

    log::info!(
        "Importing schedule from '{}' ({} bytes)",
        form.file.file_name.as_deref().unwrap_or("upload"),
        form.file.data.len()
    );

    let summary = importer.import(&form.file.data).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(summary)))
}
