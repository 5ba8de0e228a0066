pub mod climate;
pub mod health;
pub mod home;

use axum::{routing::get, Router};

use climate::AppState;

/// Assemble all application routes.
///
/// The start/end summary routes are registered with and without a trailing
/// slash so both URL forms resolve to the same handler. Static segments
/// (precipitation, stations, tobs) take priority over the `:start` capture.
pub(crate) fn router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(state.pool.clone());

    let climate_routes = Router::new()
        .route("/api/v1.0/precipitation", get(climate::get_precipitation))
        .route("/api/v1.0/stations", get(climate::get_stations))
        .route("/api/v1.0/tobs", get(climate::get_tobs))
        .route(
            "/api/v1.0/:start",
            get(climate::get_temperature_summary_open),
        )
        .route(
            "/api/v1.0/:start/",
            get(climate::get_temperature_summary_open),
        )
        .route(
            "/api/v1.0/:start/:end",
            get(climate::get_temperature_summary_range),
        )
        .route(
            "/api/v1.0/:start/:end/",
            get(climate::get_temperature_summary_range),
        )
        .with_state(state);

    Router::new()
        .route("/", get(home::home))
        .merge(health_routes)
        .merge(climate_routes)
}
