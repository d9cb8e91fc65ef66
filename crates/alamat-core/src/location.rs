use serde::{Deserialize, Serialize};

/// Coordinates attached to a geocoded location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Address record a provider standardizes in place
///
/// The caller owns the record; a provider receives a mutable reference and
/// only rewrites fields when it found a match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// ISO 3166-1 alpha-2 country code
    pub country: String,
    pub postal_code: String,
    pub street1: String,
    pub street2: Option<String>,
    pub county: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub point: Option<GeoPoint>,
}

impl Location {
    /// Attach coordinates from a geocoding result
    pub fn set_point(&mut self, latitude: f64, longitude: f64) {
        self.point = Some(GeoPoint {
            latitude,
            longitude,
        });
    }
}
