use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::UserId;
use super::service::{ParameterOverrides, ReadinessService, ServiceError};
use crate::datasets::{DatasetError, DatasetProvider};

/// Router builder exposing the scoring and simulation endpoints.
pub fn scoring_router<D>(service: Arc<ReadinessService<D>>) -> Router
where
    D: DatasetProvider + 'static,
{
    Router::new()
        .route("/api/v1/readiness/score", post(score_handler::<D>))
        .route("/api/v1/readiness/simulate", post(simulate_handler::<D>))
        .route("/api/v1/occupations", get(occupations_handler::<D>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub user_id: u32,
    pub occupation: String,
    #[serde(default)]
    pub alpha: Option<f64>,
    #[serde(default)]
    pub beta: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    pub user_id: u32,
    pub occupation: String,
    pub pathway_id: u32,
    #[serde(default = "default_periods")]
    pub periods: u32,
    #[serde(default = "default_rate")]
    pub application_rate: f64,
    #[serde(default)]
    pub alpha: Option<f64>,
    #[serde(default)]
    pub beta: Option<f64>,
}

fn default_periods() -> u32 {
    3
}

fn default_rate() -> f64 {
    1.0
}

pub(crate) async fn score_handler<D>(
    State(service): State<Arc<ReadinessService<D>>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response
where
    D: DatasetProvider + 'static,
{
    let overrides = ParameterOverrides {
        alpha: request.alpha,
        beta: request.beta,
    };
    match service.score(UserId(request.user_id), &request.occupation, overrides) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn simulate_handler<D>(
    State(service): State<Arc<ReadinessService<D>>>,
    axum::Json(request): axum::Json<SimulateRequest>,
) -> Response
where
    D: DatasetProvider + 'static,
{
    let overrides = ParameterOverrides {
        alpha: request.alpha,
        beta: request.beta,
    };
    match service.simulate(
        UserId(request.user_id),
        &request.occupation,
        request.pathway_id,
        request.periods,
        request.application_rate,
        overrides,
    ) {
        Ok(run) => (StatusCode::OK, axum::Json(run)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn occupations_handler<D>(
    State(service): State<Arc<ReadinessService<D>>>,
) -> Response
where
    D: DatasetProvider + 'static,
{
    match service.occupation_outlook() {
        Ok(outlook) => (StatusCode::OK, axum::Json(outlook)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ServiceError) -> Response {
    let status = match &error {
        ServiceError::Dataset(
            DatasetError::UnknownUser(_)
            | DatasetError::UnknownOccupation(_)
            | DatasetError::UnknownPathway(_),
        ) => StatusCode::NOT_FOUND,
        ServiceError::Dataset(DatasetError::Malformed(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::Dataset(DatasetError::Unavailable(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
