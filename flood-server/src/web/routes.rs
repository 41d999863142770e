//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, Method, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;

use crate::domain::{ReadingPeriod, StationId};
use crate::floodapi::FloodError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
///
/// The route table is the application's navigation contract: `/` is the
/// station list view and `/station/:id` the station detail view, with the
/// `id` path segment forwarded to the rendered view. Navigation uses real
/// URL paths (no hash fragments), so any unknown path falls back to the
/// entry point for HTML clients; deep links always resolve.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(station_list_page))
        .route("/station/:id", get(station_detail_page))
        .route("/health", get(health))
        .route("/api/stations", get(api_stations))
        .route("/api/station/:id", get(api_station_detail))
        .route("/api/readings/:id", get(api_readings))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(fallback_to_entry_point)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Station list page: the application entry point.
///
/// An upstream failure still renders the page, with an error banner and an
/// empty list, so the view stays reachable when the EA API is down.
async fn station_list_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let (stations, error) = match state.flood.get_stations().await {
        Ok(stations) => (stations.iter().map(StationRowView::from_station).collect(), None),
        Err(e) => {
            tracing::warn!(error = %e, "station list fetch failed");
            (
                Vec::new(),
                Some(format!("Failed to retrieve station list: {}", e)),
            )
        }
    };

    let template = StationListTemplate { stations, error };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html).into_response())
}

/// Station detail page for `/station/:id`.
///
/// The `id` path segment is forwarded into the view. Readings are loaded
/// alongside the station record; a readings failure degrades to an empty
/// table rather than taking the page down.
async fn station_detail_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_station_id(&id)?;

    let (station, readings) = tokio::join!(
        state.flood.get_station(&id),
        state.flood.get_readings(&id, ReadingPeriod::Last24Hours)
    );

    let station = station.map_err(AppError::from)?;

    let readings = match readings {
        Ok(readings) => readings.iter().map(ReadingRowView::from_reading).collect(),
        Err(e) => {
            tracing::warn!(station = %id, error = %e, "readings fetch failed");
            Vec::new()
        }
    };

    let template = StationDetailTemplate {
        station: StationDetailView::from_station(&station),
        readings,
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html).into_response())
}

/// Full station list as JSON.
async fn api_stations(State(state): State<AppState>) -> Result<Json<StationsApiResponse>, AppError> {
    let stations = state.flood.get_stations().await.map_err(AppError::from)?;

    let stations = stations.iter().map(StationResult::from_station).collect();

    Ok(Json(StationsApiResponse { stations }))
}

/// Single station detail as JSON.
async fn api_station_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StationResult>, AppError> {
    let id = parse_station_id(&id)?;

    let station = state.flood.get_station(&id).await.map_err(AppError::from)?;

    Ok(Json(StationResult::from_station(&station)))
}

/// Readings for a station as JSON.
///
/// `period` defaults to 24h; unrecognised values also fall back to 24h.
async fn api_readings(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ReadingsQuery>,
) -> Result<Json<ReadingsApiResponse>, AppError> {
    let id = parse_station_id(&id)?;

    let period = query
        .period
        .as_deref()
        .map(ReadingPeriod::parse)
        .unwrap_or_default();

    let readings = state
        .flood
        .get_readings(&id, period)
        .await
        .map_err(AppError::from)?;

    let readings = readings.iter().map(ReadingResult::from_reading).collect();

    Ok(Json(ReadingsApiResponse {
        station: id.to_string(),
        period: period.as_str().to_string(),
        readings,
    }))
}

/// History-mode fallback.
///
/// Unmatched GET requests that accept HTML resolve to the application
/// entry point (the station list), so stale or mistyped deep links land on
/// the app instead of a bare 404. Everything else gets a JSON 404.
async fn fallback_to_entry_point(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if method == Method::GET && accepts_html(&headers) {
        return station_list_page(State(state)).await;
    }

    Ok((
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "not found".to_string(),
        }),
    )
        .into_response())
}

/// Check if the request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Parse and validate an `:id` path segment.
fn parse_station_id(raw: &str) -> Result<StationId, AppError> {
    StationId::parse(raw).map_err(|_| AppError::BadRequest {
        message: format!("Invalid station id: {}", raw),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<FloodError> for AppError {
    fn from(e: FloodError) -> Self {
        match e {
            FloodError::StationNotFound => AppError::NotFound {
                message: "station not found".to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        tracing::error!(status = %status, message = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
