//! HTTP route handlers.

use std::path::Path as FsPath;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, put},
};
use serde_json::Value;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::domain::{DomainError, Station};
use crate::store::StoreError;

use super::dto::*;
use super::state::AppState;
use super::templates::IndexTemplate;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<FsPath>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/distributori", get(list_stations).post(add_station))
        .route("/api/distributori/search", get(search_stations))
        .route("/api/distributori/:id", get(get_station))
        .route("/api/search", get(search_stations))
        .route("/api/provincia/prezzi", put(update_region_prices))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Home page with the station map.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let template = IndexTemplate {
        station_count: state.store.len().await,
        regions: state.store.regions().await,
    };
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// All stations, ordered by id.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<Station>> {
    Json(state.store.list().await)
}

/// A single station by id.
///
/// Anything but plain decimal digits (signs included) is treated as an
/// unknown station.
async fn get_station(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Station>, AppError> {
    let not_found = || AppError::NotFound {
        message: "Distributore non trovato".to_string(),
    };

    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_found());
    }
    let id = id.parse().map_err(|_| not_found())?;
    state.store.get(id).await.map(Json).ok_or_else(not_found)
}

/// Create a station.
async fn add_station(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateStationResponse>), AppError> {
    let value = parse_body(&body)?;
    let station = Station::from_json(&value)?;
    let station = state.store.add(station).await?;

    info!(id = station.id, city = %station.city, "station added");

    Ok((
        StatusCode::CREATED,
        Json(CreateStationResponse {
            message: "Distributore aggiunto".to_string(),
            distributore: station,
        }),
    ))
}

/// Search stations by id, city or region.
async fn search_stations(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<Station>>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest {
        message: format!("Parametro q non valido: {}", e.body_text()),
    })?;
    let q = query.q.as_deref().map(str::trim).unwrap_or_default();
    if q.is_empty() {
        return Err(AppError::BadRequest {
            message: "Parametro q richiesto".to_string(),
        });
    }

    let results = state.store.search(q).await;
    if results.is_empty() {
        return Err(AppError::NotFound {
            message: "Nessun distributore trovato".to_string(),
        });
    }

    Ok(Json(results))
}

/// Set prices for every station in a region.
async fn update_region_prices(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse>, AppError> {
    let value = parse_body(&body)?;
    let req = RegionPricesRequest::from_json(&value)?;

    if req.provincia.is_empty() {
        return Err(AppError::BadRequest {
            message: "Provincia richiesta".to_string(),
        });
    }

    let updated = state
        .store
        .update_region_prices(&req.provincia, req.prices)
        .await;
    if updated == 0 {
        return Err(AppError::NotFound {
            message: "Nessun distributore trovato per questa provincia".to_string(),
        });
    }

    info!(region = %req.provincia, updated, "region prices updated");

    Ok(Json(MessageResponse {
        message: format!(
            "Prezzi aggiornati per {} distributori in {}",
            updated, req.provincia
        ),
    }))
}

/// Parse a request body as JSON.
///
/// Done by hand rather than with the `Json` extractor so that malformed
/// bodies get our error shape and any `Content-Type` is accepted.
fn parse_body(body: &Bytes) -> Result<Value, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest {
        message: format!("JSON non valido: {e}"),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        let message = match e {
            DomainError::NotAnObject => "JSON non valido: atteso un oggetto".to_string(),
            DomainError::MissingField(field) => format!("Manca campo: {field}"),
            DomainError::InvalidField { field, .. } => format!("Campo non valido: {field}"),
        };
        AppError::BadRequest { message }
    }
}

/// Covers every store error. Handlers only see `Duplicate` today, since the
/// store logs save failures itself; `Persist` maps to a 500 for any caller
/// that propagates [`crate::store::DataFile::save`] directly.
impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Duplicate(_) => AppError::Conflict {
                message: "ID già esistente".to_string(),
            },
            StoreError::Persist { .. } => AppError::Internal {
                message: e.to_string(),
            },
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
            warn!(%status, %message, "request rejected");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
