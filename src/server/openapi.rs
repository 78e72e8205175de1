use axum::response::Json;
use utoipa::OpenApi;

use super::error::ApiError;
use super::handlers::{self, MessageResponse};
use crate::services::{NewReport, Report, ReportPatch, SampleData};

#[derive(OpenApi)]
#[openapi(
    info(title = "Reports API", version = "1.0.0"),
    paths(
        handlers::reports::list_reports,
        handlers::reports::create_report,
        handlers::reports::get_report,
        handlers::reports::update_report,
        handlers::reports::delete_report,
        handlers::sample_data::list_sample_data,
        handlers::sample_data::list_sample_data_by_type,
        handlers::sample_data::initialize_sample_data,
    ),
    components(schemas(
        Report,
        NewReport,
        ReportPatch,
        SampleData,
        MessageResponse,
        ApiError
    )),
    tags(
        (name = "reports", description = "Report layouts built in the UI"),
        (name = "sample-data", description = "Seeded text, image, table and chart snippets")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
