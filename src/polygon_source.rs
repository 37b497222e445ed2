//! Polygon sources: a fixed in-memory list and an HTTP adapter.

use crate::geometry::Ring;
use crate::traits::PolygonSource;

#[derive(Debug, thiserror::Error)]
pub enum PolygonSourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ring {index} has {vertices} vertices, need at least 3")]
    DegenerateRing { index: usize, vertices: usize },
}

/// Rejects rings that cannot bound an area.
pub fn validate_rings(rings: &[Ring]) -> Result<(), PolygonSourceError> {
    match rings.iter().position(Ring::is_degenerate) {
        Some(index) => Err(PolygonSourceError::DegenerateRing {
            index,
            vertices: rings[index].len(),
        }),
        None => Ok(()),
    }
}

/// A fixed list of polygons held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticPolygons {
    rings: Vec<Ring>,
}

impl StaticPolygons {
    pub fn new(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }
}

impl PolygonSource for StaticPolygons {
    fn polygons(&self) -> Result<Vec<Ring>, PolygonSourceError> {
        Ok(self.rings.clone())
    }
}

#[derive(Debug, Clone)]
pub struct HttpPolygonConfig {
    /// Endpoint returning a JSON array of rings, each an array of
    /// `{ "lat": .., "lon": .. }` objects.
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for HttpPolygonConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080/polygons.json".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Fetches polygons from an HTTP endpoint on every call.
#[derive(Debug, Clone)]
pub struct HttpPolygonSource {
    config: HttpPolygonConfig,
    client: reqwest::blocking::Client,
}

impl HttpPolygonSource {
    pub fn new(config: HttpPolygonConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &HttpPolygonConfig {
        &self.config
    }
}

impl PolygonSource for HttpPolygonSource {
    fn polygons(&self) -> Result<Vec<Ring>, PolygonSourceError> {
        tracing::debug!(url = %self.config.url, "fetching polygons");

        let rings = self
            .client
            .get(&self.config.url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<Vec<Ring>>())?;

        if let Err(err) = validate_rings(&rings) {
            tracing::warn!(url = %self.config.url, error = %err, "rejected polygon payload");
            return Err(err);
        }

        tracing::debug!(count = rings.len(), "fetched polygons");
        Ok(rings)
    }
}
