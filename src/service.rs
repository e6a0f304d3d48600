use async_trait::async_trait;
use tracing::{error, info, instrument};

use crate::api_client::UpstreamClient;
use crate::errors::AppError;
use crate::models::WeatherBatchResult;
use crate::normalizer;

/// Capability interface for batch weather lookups. Kept to a single operation
/// so handlers stay substitutable in tests.
#[async_trait]
pub trait WeatherService: Send + Sync {
    async fn get_city_weather(&self, cities: Vec<String>) -> Result<WeatherBatchResult, AppError>;
}

/// The one real implementation: fetches and normalizes each city in turn
/// against the configured provider.
pub struct WeatherAggregator {
    client: UpstreamClient,
}

impl WeatherAggregator {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WeatherService for WeatherAggregator {
    #[instrument(skip(self), fields(city_count = cities.len()))]
    async fn get_city_weather(&self, cities: Vec<String>) -> Result<WeatherBatchResult, AppError> {
        let mut reports = WeatherBatchResult::with_capacity(cities.len());

        // One provider call per city, strictly in order. The first hard
        // failure aborts the whole batch; a 404 only yields the sentinel
        // report and the batch carries on.
        for city in cities {
            let (status, body) = self.client.fetch(&city).await.inspect_err(|e| {
                error!(city = %city, error = %e, "provider call failed");
            })?;

            let report = normalizer::normalize(&city, status, &body).inspect_err(|e| {
                error!(city = %city, error = %e, "cannot normalize provider response");
            })?;

            reports.insert(city, report);
        }

        info!(count = reports.len(), "weather batch assembled");
        Ok(reports)
    }
}
