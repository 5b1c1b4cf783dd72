//! Eligibility

mod errors;
pub mod service;

pub use errors::EligibilityServiceError;
pub use service::*;
