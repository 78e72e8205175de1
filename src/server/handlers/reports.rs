use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::Json,
};

use super::MessageResponse;
use crate::server::app::AppState;
use crate::server::error::AppError;
use crate::services::{NewReport, Report, ReportPatch};

/// Ids that fit no stored row are reported as missing rather than malformed.
fn report_id(id: Result<Path<i64>, PathRejection>) -> Result<i32, AppError> {
    let Path(id) = id?;
    i32::try_from(id).map_err(|_| AppError::NotFound("Report not found".to_string()))
}

#[utoipa::path(
    get,
    path = "/reports",
    tag = "reports",
    responses(
        (status = 200, description = "List all reports", body = [Report])
    )
)]
pub async fn list_reports(State(state): State<AppState>) -> Result<Json<Vec<Report>>, AppError> {
    let reports = state.reports.list().await?;
    Ok(Json(reports))
}

#[utoipa::path(
    post,
    path = "/reports",
    tag = "reports",
    request_body = NewReport,
    responses(
        (status = 200, description = "Report created successfully", body = Report),
        (status = 400, description = "Missing or empty name, or malformed body", body = ApiError)
    )
)]
pub async fn create_report(
    State(state): State<AppState>,
    payload: Result<Json<NewReport>, JsonRejection>,
) -> Result<Json<Report>, AppError> {
    let Json(payload) = payload?;
    let report = state.reports.create(payload).await?;
    Ok(Json(report))
}

#[utoipa::path(
    get,
    path = "/reports/{id}",
    tag = "reports",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report found", body = Report),
        (status = 400, description = "Id is not an integer", body = ApiError),
        (status = 404, description = "Report not found", body = ApiError)
    )
)]
pub async fn get_report(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Report>, AppError> {
    let report = state.reports.get(report_id(id)?).await?;
    Ok(Json(report))
}

#[utoipa::path(
    put,
    path = "/reports/{id}",
    tag = "reports",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    request_body = ReportPatch,
    responses(
        (status = 200, description = "Report updated successfully", body = Report),
        (status = 400, description = "Empty name, malformed body or non-integer id", body = ApiError),
        (status = 404, description = "Report not found", body = ApiError)
    )
)]
pub async fn update_report(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ReportPatch>, JsonRejection>,
) -> Result<Json<Report>, AppError> {
    let id = report_id(id)?;
    let Json(patch) = payload?;
    let report = state.reports.update(id, patch).await?;
    Ok(Json(report))
}

#[utoipa::path(
    delete,
    path = "/reports/{id}",
    tag = "reports",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report deleted successfully", body = MessageResponse),
        (status = 400, description = "Id is not an integer", body = ApiError),
        (status = 404, description = "Report not found", body = ApiError)
    )
)]
pub async fn delete_report(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    state.reports.delete(report_id(id)?).await?;
    Ok(Json(MessageResponse::new("Report deleted successfully")))
}
