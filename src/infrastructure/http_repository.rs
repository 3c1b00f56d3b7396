// HTTP repository implementation for the world-clock API
use crate::application::clock_repository::{FetchError, WorldClockRepository};
use crate::domain::city::CityRecord;
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct HttpWorldClockRepository {
    base_url: String,
    client: reqwest::Client,
}

/// Wire shape of `GET {base}/api/world-clocks`. The payload carries extra
/// per-city fields (timezone name, preformatted strings) which serde drops.
#[derive(Debug, Deserialize)]
struct WorldClocksResponse {
    cities: Vec<CityRecord>,
}

impl HttpWorldClockRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn world_clocks_url(&self) -> String {
        format!("{}/api/world-clocks", self.base_url)
    }
}

#[async_trait]
impl WorldClockRepository for HttpWorldClockRepository {
    async fn fetch_world_clocks(&self) -> Result<Vec<CityRecord>, FetchError> {
        let url = self.world_clocks_url();
        tracing::debug!(%url, "fetching world clocks");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let data = response
            .json::<WorldClocksResponse>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        tracing::debug!(count = data.cities.len(), "world clocks fetched");
        Ok(data.cities)
    }
}
