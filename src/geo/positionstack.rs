//! positionstack reverse-geocoding client
//!
//! One outbound GET per lookup, access key from configuration.
//! Single attempt, no retry; upstream failures surface as
//! `GeocodeUnavailable`.

use crate::error::{Error, Result};
use crate::geo::{GeocodeProvider, Geolocation};
use async_trait::async_trait;

/// positionstack reverse-geocoding backend
#[derive(Debug, Clone)]
pub struct PositionstackClient {
    client: reqwest::Client,
    endpoint: String,
    access_key: String,
}

impl PositionstackClient {
    /// Create a new client against the given endpoint
    pub fn new(endpoint: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            access_key: access_key.into(),
        }
    }

    fn reverse_url(&self, lat: &str, lng: &str) -> String {
        let query = format!("{},{}", lat, lng);
        format!(
            "{}?access_key={}&query={}",
            self.endpoint,
            urlencoding::encode(&self.access_key),
            urlencoding::encode(&query)
        )
    }
}

#[async_trait]
impl GeocodeProvider for PositionstackClient {
    async fn reverse(&self, lat: &str, lng: &str) -> Result<Geolocation> {
        let url = self.reverse_url(lat, lng);

        let response = self.client.get(&url).send().await.map_err(|e| {
            Error::GeocodeUnavailable(format!("positionstack request failed: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(Error::GeocodeUnavailable(format!(
                "positionstack returned status: {}",
                response.status()
            )));
        }

        response.json::<Geolocation>().await.map_err(|e| {
            Error::GeocodeUnavailable(format!("failed to parse positionstack response: {}", e))
        })
    }
}
