// Climate Observations API v0.1
use axum::{http::Method, Router};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod db;
mod errors;
mod routes;
mod services;

use config::AppConfig;
use routes::climate::AppState;
use services::window::ReferenceWindow;

/// Maximum number of connections in the database pool.
const DB_POOL_MAX_CONNECTIONS: u32 = 5;
/// Minimum number of connections kept alive in the database pool.
const DB_POOL_MIN_CONNECTIONS: u32 = 2;

/// Climate Observations API — OpenAPI specification.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Climate Observations API",
        version = "0.1.0",
        description = "Read-only API over a fixed historical climate dataset of daily \
            precipitation and temperature observations per weather station. Serves a \
            last-year precipitation series, the list of observed stations, a last-year \
            temperature series, and min/avg/max temperature summaries over arbitrary \
            date ranges.",
        license(name = "MIT"),
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Climate", description = "Climate observation queries"),
    ),
    paths(
        routes::health::health_check,
        routes::climate::get_precipitation,
        routes::climate::get_stations,
        routes::climate::get_tobs,
        routes::climate::get_temperature_summary_open,
        routes::climate::get_temperature_summary_range,
    ),
    components(
        schemas(
            routes::health::HealthResponse,
            routes::climate::TemperatureSummaryResponse,
            errors::ErrorResponse,
        )
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "climate_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();

    // The dataset is static for the lifetime of the process: open it
    // read-only and never create it.
    let connect_options = SqliteConnectOptions::from_str(&config.database_url)
        .expect("DATABASE_URL must be a valid sqlite connection string")
        .read_only(true)
        .create_if_missing(false);

    // Set up database connection pool
    let pool = SqlitePoolOptions::new()
        .max_connections(DB_POOL_MAX_CONNECTIONS)
        .min_connections(DB_POOL_MIN_CONNECTIONS)
        .connect_with(connect_options)
        .await
        .expect("Failed to open climate dataset");

    // Establish the recency window from the newest measurement on record.
    // Without it the precipitation and tobs endpoints cannot serve, so a
    // failure here is fatal.
    let last_date = db::queries::latest_measurement_date(&pool)
        .await
        .expect("Failed to query latest measurement date")
        .expect("Measurement table is empty");
    let window = ReferenceWindow::compute(&last_date)
        .expect("Malformed max date in measurement table");

    tracing::info!(
        "Reference window established: {} .. {}",
        window.start_date,
        window.end_date
    );

    let app_state = AppState {
        pool: pool.clone(),
        window,
    };

    // CORS — read-only API, restrict methods to GET
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let app: Router = routes::router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("API server listening on {}", addr);
    tracing::info!(
        "Swagger UI available at http://localhost:{}/swagger-ui/",
        config.port
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind TCP listener");
    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}
