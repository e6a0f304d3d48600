use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::config::ServerConfig;
use crate::errors::AppError;

/// Thin client over the configured weather provider. The underlying
/// `reqwest::Client` keeps a connection pool that is reused across requests.
pub struct UpstreamClient {
    http: Client,
    base_url: String,
    key_param: String,
    api_key: String,
}

impl UpstreamClient {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.api.clone(),
            key_param: config.api_key_param.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// One GET per city, no retry, default client timeout. Status
    /// interpretation is left to the caller; transport failures are returned.
    pub async fn fetch(&self, city: &str) -> Result<(StatusCode, String), AppError> {
        let url = self.build_url(city);
        debug!(city = %city, "fetching weather from provider");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok((status, body))
    }

    // The provider accepts the city name appended to the query string as-is
    // (it matches names case-insensitively), so plain concatenation is enough.
    fn build_url(&self, city: &str) -> String {
        format!("{}{}&{}={}", self.base_url, city, self.key_param, self.api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ServerConfig {
        ServerConfig {
            api: "https://api.openweathermap.org/data/2.5/weather?q=".to_string(),
            api_key_param: "appid".to_string(),
            server_port: 9000,
            api_key: "secret".to_string(),
        }
    }

    #[test]
    fn url_is_plain_concatenation() {
        let client = UpstreamClient::new(&test_config());
        assert_eq!(
            client.build_url("Sydney"),
            "https://api.openweathermap.org/data/2.5/weather?q=Sydney&appid=secret"
        );
    }

    #[test]
    fn city_case_is_preserved() {
        let client = UpstreamClient::new(&test_config());
        assert_eq!(
            client.build_url("sYdNeY"),
            "https://api.openweathermap.org/data/2.5/weather?q=sYdNeY&appid=secret"
        );
    }
}
