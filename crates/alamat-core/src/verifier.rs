use serde::{Deserialize, Serialize};

use crate::location::Location;

/// Address verification provider interface
#[async_trait::async_trait]
pub trait AddressVerifier: Send + Sync {
    /// Standardize and geocode a location in place
    ///
    /// On a match the provider rewrites the location's address fields and
    /// coordinates; the returned [`Verification`] says what happened. A
    /// response that violates the provider's documented schema surfaces as
    /// [`VerifyError::MalformedResponse`] instead of an outcome.
    async fn verify(&self, location: &mut Location) -> Result<Verification, VerifyError>;

    /// Whether this provider rewrites address fields into a canonical form
    fn supports_standardization(&self) -> bool;

    /// Whether this provider attaches coordinates
    fn supports_geocoding(&self) -> bool;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

/// Outcome flags of a single verification call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationResult {
    /// Preconditions failed, or nothing in the provider's data matched
    NoMatch,
    /// The provider could not be reached or answered with a non-success status
    ConnectionError,
    /// The location was rewritten and/or geocoded
    Verified { standardized: bool, geocoded: bool },
}

/// What a verification call produced, with a human-readable message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    pub result: VerificationResult,
    pub message: String,
}

impl Verification {
    pub fn no_match() -> Self {
        Self {
            result: VerificationResult::NoMatch,
            message: "No match".to_string(),
        }
    }

    pub fn connection_error(description: impl Into<String>) -> Self {
        Self {
            result: VerificationResult::ConnectionError,
            message: description.into(),
        }
    }

    pub fn verified() -> Self {
        Self {
            result: VerificationResult::Verified {
                standardized: true,
                geocoded: true,
            },
            message: "Match".to_string(),
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self.result, VerificationResult::Verified { .. })
    }
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// The provider answered, but the body did not match its documented schema
    #[error("malformed provider response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}
