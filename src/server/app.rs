use anyhow::{Context, Result};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health, reports, sample_data};
use super::openapi;
use crate::services::{ReportService, SampleDataService};

#[derive(Clone)]
pub struct AppState {
    pub reports: ReportService,
    pub sample_data: SampleDataService,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            reports: ReportService::new(db.clone()),
            sample_data: SampleDataService::new(db),
        }
    }
}

/// Builds the router. `cors_origin` of `None` or `"*"` accepts any origin.
pub async fn create_app(db: DatabaseConnection, cors_origin: Option<&str>) -> Result<Router> {
    let state = AppState::new(db);

    let cors = match cors_origin {
        Some(origin) if origin != "*" => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("invalid CORS origin '{}'", origin))?,
            )
            .allow_methods(Any)
            .allow_headers(Any),
        _ => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let app = Router::new()
        // Health check endpoint
        .route("/health", get(health::health_check))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .merge(api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state);

    Ok(app)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Report routes
        .route(
            "/reports",
            get(reports::list_reports).post(reports::create_report),
        )
        .route(
            "/reports/:id",
            get(reports::get_report)
                .put(reports::update_report)
                .delete(reports::delete_report),
        )
        // Sample data routes
        .route("/sample-data", get(sample_data::list_sample_data))
        .route(
            "/sample-data/:data_type",
            get(sample_data::list_sample_data_by_type),
        )
        .route(
            "/initialize-sample-data",
            post(sample_data::initialize_sample_data),
        )
}
