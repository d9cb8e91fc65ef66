pub mod query;
pub mod transport;

mod verifier;

pub use verifier::OneMapVerifier;
