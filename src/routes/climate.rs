//! Climate query endpoints.
//!
//! - GET /api/v1.0/precipitation
//! - GET /api/v1.0/stations
//! - GET /api/v1.0/tobs
//! - GET /api/v1.0/:start and /api/v1.0/:start/:end

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::{models, queries};
use crate::errors::AppError;
use crate::services::window::ReferenceWindow;

/// Shared application state for climate endpoints.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) pool: sqlx::SqlitePool,
    /// Default recency filter for the precipitation and tobs series,
    /// established once at startup from the newest measurement date.
    pub(crate) window: ReferenceWindow,
}

/// One series entry on the wire: a `[date, value]` pair.
///
/// Serde serializes the tuple as a two-element JSON array. The value slot is
/// null when the station reported no reading for that day.
pub type SeriesEntry = (String, Option<f64>);

fn series_entries(rows: Vec<models::Reading>) -> Vec<SeriesEntry> {
    rows.into_iter().map(|r| (r.date, r.value)).collect()
}

/// Temperature summary over a date range. Key names are part of the wire
/// contract; all three values are null when the range matches no rows.
#[derive(Debug, Serialize, ToSchema)]
pub struct TemperatureSummaryResponse {
    /// Lowest observed temperature in the range
    #[serde(rename = "TMIN")]
    pub tmin: Option<f64>,
    /// Mean of the non-null observed temperatures in the range
    #[serde(rename = "TAVG")]
    pub tavg: Option<f64>,
    /// Highest observed temperature in the range
    #[serde(rename = "TMAX")]
    pub tmax: Option<f64>,
}

impl From<models::TemperatureStats> for TemperatureSummaryResponse {
    fn from(s: models::TemperatureStats) -> Self {
        Self {
            tmin: s.tmin,
            tavg: s.tavg,
            tmax: s.tmax,
        }
    }
}

/// Precipitation readings for the final year of the dataset.
#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    tag = "Climate",
    responses(
        (status = 200, description = "Array of [date, precipitation] pairs (precipitation \
            nullable) within the reference window, ascending by date"),
    )
)]
pub async fn get_precipitation(
    State(state): State<AppState>,
) -> Result<Json<Vec<SeriesEntry>>, AppError> {
    let rows = queries::precipitation_since(&state.pool, &state.window.start_date).await?;
    Ok(Json(series_entries(rows)))
}

/// Stations with at least one recorded measurement.
#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    tag = "Climate",
    responses(
        (status = 200, description = "Distinct station identifiers, ascending", body = Vec<String>),
    )
)]
pub async fn get_stations(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let stations = queries::observed_stations(&state.pool).await?;
    Ok(Json(stations))
}

/// Observed temperatures for the final year of the dataset.
#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    tag = "Climate",
    responses(
        (status = 200, description = "Array of [date, temperature] pairs (temperature \
            nullable) within the reference window, ascending by date"),
    )
)]
pub async fn get_tobs(State(state): State<AppState>) -> Result<Json<Vec<SeriesEntry>>, AppError> {
    let rows = queries::tobs_since(&state.pool, &state.window.start_date).await?;
    Ok(Json(series_entries(rows)))
}

/// Temperature summary from `start` to the end of the dataset.
///
/// `start` is taken verbatim from the path and compared lexicographically
/// against the stored dates. A malformed value matches few or no rows and
/// yields an all-null summary rather than an error.
#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    tag = "Climate",
    params(
        ("start" = String, Path, description = "Inclusive lower date bound, YYYY-MM-DD"),
    ),
    responses(
        (status = 200, description = "Temperature summary", body = TemperatureSummaryResponse),
    )
)]
pub async fn get_temperature_summary_open(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureSummaryResponse>, AppError> {
    let stats = queries::temperature_stats(&state.pool, &start, None).await?;
    Ok(Json(stats.into()))
}

/// Temperature summary over an inclusive start/end date range.
#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    tag = "Climate",
    params(
        ("start" = String, Path, description = "Inclusive lower date bound, YYYY-MM-DD"),
        ("end" = String, Path, description = "Inclusive upper date bound, YYYY-MM-DD"),
    ),
    responses(
        (status = 200, description = "Temperature summary", body = TemperatureSummaryResponse),
    )
)]
pub async fn get_temperature_summary_range(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureSummaryResponse>, AppError> {
    let stats = queries::temperature_stats(&state.pool, &start, Some(&end)).await?;
    Ok(Json(stats.into()))
}
