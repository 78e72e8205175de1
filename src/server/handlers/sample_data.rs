use axum::{
    extract::{Path, State},
    response::Json,
};

use super::MessageResponse;
use crate::server::app::AppState;
use crate::server::error::AppError;
use crate::services::SampleData;

#[utoipa::path(
    get,
    path = "/sample-data",
    tag = "sample-data",
    responses(
        (status = 200, description = "List all sample data", body = [SampleData])
    )
)]
pub async fn list_sample_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<SampleData>>, AppError> {
    let rows = state.sample_data.list().await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/sample-data/{data_type}",
    tag = "sample-data",
    params(
        ("data_type" = String, Path, description = "Exact data type: text, image, table or chart")
    ),
    responses(
        (status = 200, description = "Sample data of the given type, possibly empty", body = [SampleData])
    )
)]
pub async fn list_sample_data_by_type(
    State(state): State<AppState>,
    Path(data_type): Path<String>,
) -> Result<Json<Vec<SampleData>>, AppError> {
    let rows = state.sample_data.list_by_type(&data_type).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    post,
    path = "/initialize-sample-data",
    tag = "sample-data",
    responses(
        (status = 200, description = "Seed ran, or sample data was already present", body = MessageResponse)
    )
)]
pub async fn initialize_sample_data(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let outcome = state.sample_data.seed().await?;
    Ok(Json(MessageResponse::new(outcome.message())))
}
