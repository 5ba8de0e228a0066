use sqlx::SqlitePool;

use super::models::{Reading, TemperatureStats};

/// Precipitation readings on or after `date_from`, ascending by date.
///
/// One entry per stored row: several stations may report on the same date,
/// and every row is returned as-is, including rows with null precipitation.
pub async fn precipitation_since(
    pool: &SqlitePool,
    date_from: &str,
) -> Result<Vec<Reading>, sqlx::Error> {
    sqlx::query_as::<_, Reading>(
        "SELECT date, prcp AS value FROM measurement WHERE date >= ? ORDER BY date",
    )
    .bind(date_from)
    .fetch_all(pool)
    .await
}

/// Observed-temperature readings on or after `date_from`, ascending by date.
///
/// Same projection rules as [`precipitation_since`]: no de-duplication,
/// nulls preserved.
pub async fn tobs_since(pool: &SqlitePool, date_from: &str) -> Result<Vec<Reading>, sqlx::Error> {
    sqlx::query_as::<_, Reading>(
        "SELECT date, tobs AS value FROM measurement WHERE date >= ? ORDER BY date",
    )
    .bind(date_from)
    .fetch_all(pool)
    .await
}

/// Distinct station identifiers that have recorded at least one measurement.
///
/// Deliberately reads the measurement table rather than the station metadata
/// table: registered stations with zero observations are excluded. Ordered
/// ascending so the output is reproducible.
pub async fn observed_stations(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT station FROM measurement GROUP BY station ORDER BY station",
    )
    .fetch_all(pool)
    .await
}

/// The most recent date present in the measurement table, if any.
pub async fn latest_measurement_date(pool: &SqlitePool) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, Option<String>>("SELECT MAX(date) FROM measurement")
        .fetch_one(pool)
        .await
}

/// MIN/AVG/MAX of observed temperature over an inclusive date range.
///
/// `date_to = None` leaves the range open-ended. Null temperatures are
/// excluded from all three aggregates; a range matching no rows yields a
/// single all-null row rather than an error.
pub async fn temperature_stats(
    pool: &SqlitePool,
    date_from: &str,
    date_to: Option<&str>,
) -> Result<TemperatureStats, sqlx::Error> {
    match date_to {
        Some(date_to) => {
            sqlx::query_as::<_, TemperatureStats>(
                "SELECT MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax
                 FROM measurement
                 WHERE date >= ? AND date <= ?",
            )
            .bind(date_from)
            .bind(date_to)
            .fetch_one(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, TemperatureStats>(
                "SELECT MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax
                 FROM measurement
                 WHERE date >= ?",
            )
            .bind(date_from)
            .fetch_one(pool)
            .await
        }
    }
}
