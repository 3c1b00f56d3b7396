// Repository trait for the world-clock data source
use crate::domain::city::CityRecord;
use async_trait::async_trait;
use thiserror::Error;

/// The one recoverable, user-surfaced error kind: the poll itself failed.
///
/// Every variant is shown verbatim in the error view and cleared by the next
/// attempt (timer or explicit retry). Nothing here is fatal to the process.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// Connection or request failure before any HTTP status arrived.
    #[error("failed to fetch world clocks: {0}")]
    Transport(String),
    /// The endpoint answered with a non-2xx status.
    #[error("failed to fetch world clocks: {status} {reason}")]
    Status { status: u16, reason: String },
    /// The body arrived but was not the expected JSON shape.
    #[error("failed to decode world clocks response: {0}")]
    Decode(String),
}

/// Result of one sequenced poll, delivered back to the controller.
#[derive(Debug)]
pub struct PollOutcome {
    pub seq: u64,
    pub result: Result<Vec<CityRecord>, FetchError>,
}

#[async_trait]
pub trait WorldClockRepository: Send + Sync {
    /// Fetch the full city collection from the data source.
    async fn fetch_world_clocks(&self) -> Result<Vec<CityRecord>, FetchError>;
}
