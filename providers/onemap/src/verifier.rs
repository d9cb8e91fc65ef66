use std::sync::Arc;

use alamat_core::{
    AddressVerifier, CasingPolicy, DefaultCasing, Location, ProviderMetadata, Verification,
    VerifyError,
};
use async_trait::async_trait;
use serde::Deserialize;

use crate::query;
use crate::transport::{DEFAULT_BASE_URL, HttpTransport, SearchReply, SearchTransport};

/// OneMap only covers Singapore
const COUNTRY_CODE: &str = "SG";

/// Singapore address standardization and geocoding backed by the OneMap
/// search API
#[derive(Clone)]
pub struct OneMapVerifier {
    transport: Arc<dyn SearchTransport>,
    casing: Arc<dyn CasingPolicy>,
}

impl OneMapVerifier {
    /// Verifier against the public endpoint
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Verifier against a custom endpoint (staging, proxy)
    pub fn with_base_url(base_url: String) -> Self {
        Self::with_transport(Arc::new(HttpTransport::new(base_url)))
    }

    /// Verifier over a caller-supplied transport
    pub fn with_transport(transport: Arc<dyn SearchTransport>) -> Self {
        Self {
            transport,
            casing: Arc::new(DefaultCasing),
        }
    }

    /// Swap the casing rules applied to road names
    pub fn with_casing(mut self, casing: impl CasingPolicy + 'static) -> Self {
        self.casing = Arc::new(casing);
        self
    }

    /// Rewrite the location from the matched record
    fn apply(&self, location: &mut Location, result: &SearchResult) {
        // The query had any unit number stripped; keep the one from the
        // original input. Two or more is ambiguous, so none survives.
        location.street2 = query::single_unit_designator(location);

        location.postal_code = result.postal.clone();
        location.street1 = format!(
            "{} {}",
            result.block_number.to_uppercase(),
            self.casing.title_case(&result.road_name)
        );
        location.county = None;
        location.city = None;
        location.state = None;
        location.set_point(result.latitude, result.longitude);
    }
}

impl Default for OneMapVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AddressVerifier for OneMapVerifier {
    async fn verify(&self, location: &mut Location) -> Result<Verification, VerifyError> {
        if location.country != COUNTRY_CODE || location.postal_code.is_empty() {
            return Ok(Verification::no_match());
        }

        let query = query::search_query(location);
        tracing::debug!("OneMap search: {query}");

        let body = match self.transport.search(&query).await {
            SearchReply::Body(body) => body,
            SearchReply::Failed(description) => {
                tracing::warn!("OneMap request failed: {description}");
                return Ok(Verification::connection_error(description));
            }
        };

        let response: SearchResponse = serde_json::from_str(&body)?;

        let postal = location.postal_code.trim();
        let matched = response.results.iter().find(|r| r.postal.trim() == postal);

        match matched {
            Some(result) => {
                self.apply(location, result);
                Ok(Verification::verified())
            }
            None => Ok(Verification::no_match()),
        }
    }

    fn supports_standardization(&self) -> bool {
        true
    }

    fn supports_geocoding(&self) -> bool {
        true
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "OneMap".to_string(),
            requires_api_key: false,
        }
    }
}

/// One element of the `results` array; every field is required, a missing
/// one means the response is malformed
#[derive(Debug, Clone, Deserialize)]
struct SearchResult {
    #[serde(rename = "BLK_NO")]
    block_number: String,
    #[serde(rename = "ROAD_NAME")]
    road_name: String,
    #[serde(rename = "POSTAL")]
    postal: String,
    #[serde(rename = "LATITUDE")]
    latitude: f64,
    #[serde(rename = "LONGITUDE")]
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}
