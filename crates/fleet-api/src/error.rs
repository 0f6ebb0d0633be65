//! Unified error handling for fleet-api
//!
//! Everything a call can fail with, local or remote, funnels into [`FleetError`].
//! Service faults keep their identity (not-found, invalid-parameter, limit-exceeded)
//! so callers can branch without parsing messages.
//!
//! # Example
//!
//! ```rust
//! use fleet_api::FleetError;
//!
//! fn handle_error(err: FleetError) {
//!     if err.is_not_found() {
//!         eprintln!("no such resource");
//!     } else if err.is_authentication_failed() {
//!         eprintln!("check FLEET_API_KEY / FLEET_API_SECRET");
//!     }
//! }
//! ```

use thiserror::Error;

/// Error type for all fleet-api operations
#[derive(Error, Debug)]
pub enum FleetError {
    /// A required input field was left unset; caught before dispatch
    #[error("Missing required field `{field}` for {operation}")]
    MissingField {
        operation: &'static str,
        field: &'static str,
    },

    /// Input could not be serialized to the wire format
    #[error("Failed to encode {operation} request: {source}")]
    Encode {
        operation: &'static str,
        source: serde_json::Error,
    },

    /// Response body could not be deserialized into the output type
    #[error("Failed to decode {operation} response: {source}")]
    Decode {
        operation: &'static str,
        source: serde_json::Error,
    },

    /// Client construction error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Base URL failed to parse
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },

    /// Connectivity, timeout, or protocol error from the HTTP layer
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The referenced resource does not exist (404 / ResourceNotFound)
    #[error("Resource not found: {message}")]
    NotFound { message: String },

    /// The control plane rejected an input value (400 / InvalidParameter)
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// An account or cluster limit was hit (429 / LimitExceeded)
    #[error("Limit exceeded: {message}")]
    LimitExceeded { message: String },

    /// Credentials missing or rejected (401/403)
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    /// Any other non-success response from the control plane
    #[error("Service error (HTTP {status}): {message}")]
    Service {
        status: u16,
        code: Option<String>,
        message: String,
    },
}

/// Result type alias for fleet-api operations
pub type Result<T> = std::result::Result<T, FleetError>;

impl FleetError {
    /// Returns true if the referenced resource does not exist
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, FleetError::NotFound { .. })
    }

    /// Returns true if the control plane rejected an input value
    #[must_use]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, FleetError::InvalidParameter { .. })
    }

    /// Returns true if an account or cluster limit was hit
    #[must_use]
    pub fn is_limit_exceeded(&self) -> bool {
        matches!(self, FleetError::LimitExceeded { .. })
    }

    /// Returns true if credentials were missing or rejected
    #[must_use]
    pub fn is_authentication_failed(&self) -> bool {
        matches!(self, FleetError::AuthenticationFailed { .. })
    }

    /// Returns true if the control plane reported a server-side failure (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, FleetError::Service { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let err = FleetError::MissingField {
            operation: "CreateService",
            field: "serviceName",
        };
        assert_eq!(
            err.to_string(),
            "Missing required field `serviceName` for CreateService"
        );
    }

    #[test]
    fn test_not_found_helper() {
        let err = FleetError::NotFound {
            message: "Cluster default not found".to_string(),
        };
        assert!(err.is_not_found());
        assert!(!err.is_invalid_parameter());
        assert!(!err.is_server_error());
    }

    #[test]
    fn test_service_error_classification() {
        let err = FleetError::Service {
            status: 503,
            code: None,
            message: "Service unavailable".to_string(),
        };
        assert!(err.is_server_error());
        assert!(!err.is_not_found());

        let err = FleetError::Service {
            status: 409,
            code: Some("Conflict".to_string()),
            message: "Revision already exists".to_string(),
        };
        assert!(!err.is_server_error());
    }

    #[test]
    fn test_fault_helpers() {
        let err = FleetError::LimitExceeded {
            message: "Too many clusters".to_string(),
        };
        assert!(err.is_limit_exceeded());

        let err = FleetError::AuthenticationFailed {
            message: "Bad credentials".to_string(),
        };
        assert!(err.is_authentication_failed());

        let err = FleetError::InvalidParameter {
            message: "desiredCount must be positive".to_string(),
        };
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_display_formats() {
        let err = FleetError::Config("Base URL is required".to_string());
        assert!(err.to_string().contains("Configuration error"));

        let err = FleetError::Service {
            status: 500,
            code: Some("InternalError".to_string()),
            message: "Boom".to_string(),
        };
        assert!(err.to_string().contains("HTTP 500"));
    }
}
