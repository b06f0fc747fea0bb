//! Service fault model.

use thiserror::Error;

/// Result type returned by every product-service operation.
pub type ServiceResult<T> = Result<T, ServiceFault>;

/// A fault raised by the product application service.
///
/// The `Display` output is the bare message, so callers can hand it to a
/// client verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceFault {
    /// The request was rejected (malformed or out-of-range input).
    #[error("{0}")]
    Validation(String),

    /// A referenced product does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The service could not complete the operation (infrastructure failure).
    #[error("{0}")]
    Unavailable(String),
}

impl ServiceFault {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) | Self::Unavailable(msg) => msg,
        }
    }

    /// Short machine-readable label, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::Unavailable(_) => "unavailable",
        }
    }
}
