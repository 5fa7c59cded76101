//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::{DomainError, LineId, StationId};
use crate::service::ServiceError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", post(create_station).get(list_stations))
        .route("/stations/:id", get(get_station).delete(delete_station))
        .route("/lines", post(create_line).get(list_lines))
        .route("/lines/stations", get(list_line_stations))
        .route(
            "/lines/:id",
            get(get_line).put(update_line).delete(delete_line),
        )
        .route(
            "/lines/:id/sections",
            post(add_section).delete(remove_station),
        )
        .route("/sections", get(list_sections))
        .route("/fares/extra", post(extra_fee))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse a JSON body, logging the raw body on failure.
fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "rejected JSON body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// `201 Created` with a `Location` header pointing at the new resource.
fn created<T: serde::Serialize>(location: String, body: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    )
        .into_response()
}

/// Register a station.
async fn create_station(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let req: StationCreateRequest = parse_json(&body)?;
    let station = state.stations.save_station(req.name).await?;
    Ok(created(
        format!("/stations/{}", station.id()),
        StationResponse::from(&station),
    ))
}

/// List all stations.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResponse>> {
    let stations = state.stations.find_stations().await;
    Json(stations.iter().map(StationResponse::from).collect())
}

/// Get a station by id.
async fn get_station(
    State(state): State<AppState>,
    path: Result<Path<StationId>, PathRejection>,
) -> Result<Json<StationResponse>, AppError> {
    let Path(id) = path?;
    let station = state.stations.find_station(id).await?;
    Ok(Json(StationResponse::from(&station)))
}

/// Delete a station.
async fn delete_station(
    State(state): State<AppState>,
    path: Result<Path<StationId>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    state.stations.delete_station(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Open a line.
async fn create_line(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    let req: LineCreateRequest = parse_json(&body)?;
    let line = state.lines.save_line(req.into()).await?;
    Ok(created(
        format!("/lines/{}", line.id()),
        LineResponse::from(&line),
    ))
}

/// List all lines.
async fn list_lines(State(state): State<AppState>) -> Json<Vec<LineResponse>> {
    let lines = state.lines.find_lines().await;
    Json(lines.iter().map(LineResponse::from).collect())
}

/// Get a line by id.
async fn get_line(
    State(state): State<AppState>,
    path: Result<Path<LineId>, PathRejection>,
) -> Result<Json<LineResponse>, AppError> {
    let Path(id) = path?;
    let line = state.lines.find_line(id).await?;
    Ok(Json(LineResponse::from(&line)))
}

/// Rename or recolor a line.
async fn update_line(
    State(state): State<AppState>,
    path: Result<Path<LineId>, PathRejection>,
    body: Bytes,
) -> Result<Json<LineResponse>, AppError> {
    let Path(id) = path?;
    let req: LineUpdateRequest = parse_json(&body)?;
    let line = state.lines.update_line(id, req.into()).await?;
    Ok(Json(LineResponse::from(&line)))
}

/// Delete a line.
async fn delete_line(
    State(state): State<AppState>,
    path: Result<Path<LineId>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    state.lines.delete_line(id).await;
    Ok(StatusCode::NO_CONTENT)
}

/// Attach a section to a line.
async fn add_section(
    State(state): State<AppState>,
    path: Result<Path<LineId>, PathRejection>,
    body: Bytes,
) -> Result<Json<LineResponse>, AppError> {
    let Path(id) = path?;
    let req: SectionCreateRequest = parse_json(&body)?;
    let line = state.lines.add_section(id, req.into()).await?;
    Ok(Json(LineResponse::from(&line)))
}

/// Detach a station from a line.
async fn remove_station(
    State(state): State<AppState>,
    path: Result<Path<LineId>, PathRejection>,
    query: Result<Query<RemoveStationQuery>, QueryRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    let Query(query) = query?;
    state.lines.remove_station(id, query.station_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List every section of every line.
async fn list_sections(State(state): State<AppState>) -> Json<Vec<SectionResponse>> {
    let sections = state.lines.all_sections().await;
    Json(sections.iter().map(SectionResponse::from).collect())
}

/// List every station that lies on some line.
async fn list_line_stations(State(state): State<AppState>) -> Json<Vec<StationResponse>> {
    let stations = state.lines.all_stations().await;
    Json(stations.iter().map(StationResponse::from).collect())
}

/// Compute the extra fee for an itinerary.
async fn extra_fee(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ExtraFeeResponse>, AppError> {
    let req: ExtraFeeRequest = parse_json(&body)?;
    let extra_fee = state.lines.max_extra_fee(&req.station_ids).await?;
    Ok(Json(ExtraFeeResponse {
        extra_fee,
        policy: state.lines.policy().to_string(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        let message = e.to_string();
        match e {
            ServiceError::LineNotFound(_) | ServiceError::StationNotFound(_) => {
                AppError::NotFound { message }
            }
            ServiceError::DuplicateLineName(_)
            | ServiceError::DuplicateStationName(_)
            | ServiceError::StationInUse(_) => AppError::Conflict { message },
            ServiceError::Domain(DomainError::MissingDistance) => AppError::Internal { message },
            ServiceError::Domain(_) => AppError::BadRequest { message },
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        warn!(error = %rejection, "rejected path parameters");
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        warn!(error = %rejection, "rejected query string");
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request failed");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
