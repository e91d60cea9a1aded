//! Error taxonomy for injected and genuine failures.
//!
//! Every failure the harness can produce is one of these variants, so that
//! callers (CLI, task registry) can classify, tag, and report uniformly.

use thiserror::Error;

/// Failure modes of the simulated external API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiFailure {
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("connection refused")]
    Connection,

    #[error("http error {0}")]
    HttpStatus(u16),

    #[error("{0}")]
    Other(String),
}

/// Unified error type for the whole harness.
///
/// Variants map 1:1 to the error catalogue the observability pipeline is
/// expected to distinguish. Each carries a human-readable message; they are
/// structurally identical on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FaultError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("business logic error: {0}")]
    BusinessLogic(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("payment error: {0}")]
    Payment(String),

    #[error("external api error: {0}")]
    ExternalApi(ApiFailure),

    #[error("{0}")]
    Generic(String),
}

impl FaultError {
    /// Stable machine-readable name, used as a capture tag.
    pub fn kind(&self) -> &'static str {
        match self {
            FaultError::Validation(_) => "validation",
            FaultError::BusinessLogic(_) => "business_logic",
            FaultError::NotFound(_) => "not_found",
            FaultError::Conflict(_) => "conflict",
            FaultError::Payment(_) => "payment",
            FaultError::ExternalApi(ApiFailure::Timeout { .. }) => "external_api.timeout",
            FaultError::ExternalApi(ApiFailure::Connection) => "external_api.connection",
            FaultError::ExternalApi(ApiFailure::HttpStatus(_)) => "external_api.http_status",
            FaultError::ExternalApi(ApiFailure::Other(_)) => "external_api.other",
            FaultError::Generic(_) => "generic",
        }
    }
}
