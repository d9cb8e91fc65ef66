pub mod casing;
pub mod location;
pub mod verifier;

pub use casing::{CasingPolicy, DefaultCasing};
pub use location::{GeoPoint, Location};
pub use verifier::{
    AddressVerifier, ProviderMetadata, Verification, VerificationResult, VerifyError,
};
