use reqwest::StatusCode;
use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::models::CityReport;

/// The provider reports temperature in Kelvin.
const KELVIN_OFFSET: f64 = 273.0;

/// The slice of the provider response we care about. Deserializing into a
/// typed shape turns a malformed payload into a recoverable `PayloadShape`
/// error instead of a crash.
#[derive(Debug, Deserialize)]
struct ProviderPayload {
    weather: Vec<WeatherEntry>,
    main: MainReadings,
}

#[derive(Debug, Deserialize)]
struct WeatherEntry {
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    humidity: f64,
}

/// Maps one provider response to a `CityReport`.
///
/// 200 parses the body and extracts description, temperature and humidity.
/// 404 yields the sentinel "not found" report rather than an error. Any other
/// status is an upstream failure carrying the numeric code.
pub fn normalize(city: &str, status: StatusCode, body: &str) -> Result<CityReport, AppError> {
    if status == StatusCode::OK {
        let payload: ProviderPayload =
            serde_json::from_str(body).map_err(|e| AppError::PayloadShape(e.to_string()))?;

        let entry = payload.weather.into_iter().next().ok_or_else(|| {
            AppError::PayloadShape("empty 'weather' array in provider response".to_string())
        })?;

        Ok(CityReport {
            description: entry.description,
            temperature_celsius: to_celsius(payload.main.temp),
            humidity_percent: payload.main.humidity.round() as u8,
        })
    } else if status == StatusCode::NOT_FOUND {
        warn!(city = %city, "city not found, no weather data returned");
        Ok(CityReport::not_found())
    } else {
        Err(AppError::UpstreamStatus {
            status: status.as_u16(),
        })
    }
}

/// Whole-degree Celsius from Kelvin.
fn to_celsius(kelvin: f64) -> i32 {
    (kelvin - KELVIN_OFFSET).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYDNEY_DATA: &str = r#"{"coord":{"lon":151.21,"lat":-33.87},"weather":[{"id":803,"main":"Clouds","description":"broken clouds","icon":"04d"}],"base":"stations","main":{"temp":289.56,"feels_like":287.77,"temp_min":288.71,"temp_max":290.37,"pressure":1019,"humidity":77},"visibility":10000,"wind":{"speed":3.6,"deg":340},"clouds":{"all":76},"dt":1590882599,"sys":{"type":1,"id":9600,"country":"AU","sunrise":1590871874,"sunset":1590908087},"timezone":36000,"id":2147714,"name":"Sydney","cod":200}"#;

    #[test]
    fn extracts_fields_from_ok_response() {
        let report = normalize("Sydney", StatusCode::OK, SYDNEY_DATA).unwrap();
        assert_eq!(report.description, "broken clouds");
        assert_eq!(report.temperature_celsius, 17);
        assert_eq!(report.humidity_percent, 77);
    }

    #[test]
    fn not_found_yields_sentinel_report() {
        let report = normalize("Atlantis", StatusCode::NOT_FOUND, "").unwrap();
        assert_eq!(report, CityReport::not_found());
    }

    #[test]
    fn other_status_is_upstream_error() {
        let err = normalize("Sydney", StatusCode::INTERNAL_SERVER_ERROR, "Error").unwrap_err();
        assert!(matches!(err, AppError::UpstreamStatus { status: 500 }));
    }

    #[test]
    fn malformed_payload_is_typed_error() {
        let err = normalize("Sydney", StatusCode::OK, r#"{"weather":[]}"#).unwrap_err();
        assert!(matches!(err, AppError::PayloadShape(_)));

        let err = normalize("Sydney", StatusCode::OK, "not json at all").unwrap_err();
        assert!(matches!(err, AppError::PayloadShape(_)));
    }

    #[test]
    fn missing_main_block_is_typed_error() {
        let body = r#"{"weather":[{"description":"clear sky"}]}"#;
        let err = normalize("Sydney", StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, AppError::PayloadShape(_)));
    }

    #[test]
    fn empty_weather_array_is_typed_error() {
        let body = r#"{"weather":[],"main":{"temp":289.56,"humidity":77}}"#;
        let err = normalize("Sydney", StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, AppError::PayloadShape(_)));
    }

    #[test]
    fn kelvin_conversion_rounds_to_whole_degrees() {
        assert_eq!(to_celsius(289.56), 17);
        assert_eq!(to_celsius(273.0), 0);
        assert_eq!(to_celsius(272.4), -1);
        assert_eq!(to_celsius(255.21), -18);
    }
}
