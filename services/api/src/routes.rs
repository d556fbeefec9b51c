use crate::infra::AppState;
use ai_readiness::datasets::DatasetProvider;
use ai_readiness::error::AppError;
use ai_readiness::scoring::{
    scoring_router, LearningPathway, ParameterOverrides, ReadinessService, ScoreboardEntry,
    UserId,
};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_scoring_routes<D>(service: Arc<ReadinessService<D>>) -> axum::Router
where
    D: DatasetProvider + 'static,
{
    scoring_router(service.clone())
        .merge(catalog_router(service))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

fn catalog_router<D>(service: Arc<ReadinessService<D>>) -> axum::Router
where
    D: DatasetProvider + 'static,
{
    axum::Router::new()
        .route("/api/v1/pathways", axum::routing::get(pathways_endpoint::<D>))
        .route(
            "/api/v1/readiness/scoreboard/:user_id",
            axum::routing::get(scoreboard_endpoint::<D>),
        )
        .with_state(service)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn pathways_endpoint<D>(
    State(service): State<Arc<ReadinessService<D>>>,
) -> Result<Json<Vec<LearningPathway>>, AppError>
where
    D: DatasetProvider + 'static,
{
    Ok(Json(service.pathways()?))
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ScoreboardParams {
    pub(crate) alpha: Option<f64>,
    pub(crate) beta: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreboardResponse {
    pub(crate) user_id: u32,
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) entries: Vec<ScoreboardEntry>,
}

/// Rank every catalog occupation for one user, best score first.
pub(crate) async fn scoreboard_endpoint<D>(
    State(service): State<Arc<ReadinessService<D>>>,
    Path(user_id): Path<u32>,
    Query(params): Query<ScoreboardParams>,
) -> Result<Json<ScoreboardResponse>, AppError>
where
    D: DatasetProvider + 'static,
{
    let overrides = ParameterOverrides {
        alpha: params.alpha,
        beta: params.beta,
    };
    let entries = service.scoreboard(UserId(user_id), overrides)?;
    Ok(Json(ScoreboardResponse {
        user_id,
        generated_at: Utc::now(),
        entries,
    }))
}
