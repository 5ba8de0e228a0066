use sqlx::FromRow;

/// A single (date, value) observation projected from the measurement table.
///
/// `value` is nullable in the dataset: a station may report precipitation
/// without a temperature reading on a given day, or vice versa. Nulls are
/// carried through to the API response, not dropped or coerced to zero.
#[derive(Debug, Clone, FromRow)]
pub struct Reading {
    pub date: String,
    pub value: Option<f64>,
}

/// Aggregate temperature statistics over a date range.
///
/// All three fields are `None` when no row in the range carries a non-null
/// observed temperature. An empty range is a valid result, not an error.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct TemperatureStats {
    pub tmin: Option<f64>,
    pub tavg: Option<f64>,
    pub tmax: Option<f64>,
}
