use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Normalized weather summary for one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityReport {
    pub description: String,
    pub temperature_celsius: i32,
    pub humidity_percent: u8,
}

impl CityReport {
    pub const NOT_FOUND_DESCRIPTION: &'static str = "not found";

    /// Sentinel report for a city the provider does not recognize.
    /// Well-formed on purpose, so an unknown city never aborts a batch.
    pub fn not_found() -> Self {
        Self {
            description: Self::NOT_FOUND_DESCRIPTION.to_string(),
            temperature_celsius: 0,
            humidity_percent: 0,
        }
    }
}

/// Reports keyed by the requested city name, case preserved.
/// Built fresh per request and discarded once the response is written.
pub type WeatherBatchResult = HashMap<String, CityReport>;
