use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ThingfulError;

/// Per-request timeout; a request that takes longer fails with
/// [`ThingfulError::Transport`].
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Rectangular geographic filter in WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    pub fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        }
    }

    /// All four bounds must be finite to be usable in a query string.
    pub fn is_valid(&self) -> bool {
        self.min_lat.is_finite()
            && self.min_lon.is_finite()
            && self.max_lat.is_finite()
            && self.max_lon.is_finite()
    }
}

/// Arguments for accumulating things across pages until a target amount
/// is reached.
///
/// `amount` stays optional so that a caller omitting it gets the distinct
/// [`ThingfulError::MissingArgs`] rejection rather than a type error at a
/// different call site.
#[derive(Debug, Clone, Default)]
pub struct AccumulateArgs {
    pub amount: Option<usize>,
    pub query: Option<String>,
    pub bounds: Option<BoundingBox>,
    pub unit: Option<String>,
}

impl AccumulateArgs {
    pub fn new(amount: usize) -> Self {
        Self {
            amount: Some(amount),
            ..Default::default()
        }
    }

    /// Sets the search query used for every iteration.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sets the search bounds used for every iteration.
    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Sets the channel unit to match against.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ThingfulError> {
        let response = self
            .client
            .get(url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(ThingfulError::Http(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}
