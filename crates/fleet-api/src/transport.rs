//! Wire dispatch for control plane requests
//!
//! The typed request layer hands a descriptor and a JSON body to a [`Transport`];
//! everything HTTP-shaped lives behind that trait. [`HttpTransport`] is the shipped
//! implementation: one POST per dispatch, no retries, no signing.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

use crate::error::{FleetError, Result};
use crate::operation::Operation;

/// Header selecting the operation at the single RPC endpoint.
pub const TARGET_HEADER: &str = "x-fleet-target";

/// Service identifier prefixed to the operation name in the target header.
pub const TARGET_PREFIX: &str = "FleetControlPlane_20141113";

const API_KEY_HEADER: &str = "x-api-key";
const API_SECRET_HEADER: &str = "x-api-secret-key";

/// Sends one operation's JSON body to the control plane and returns the raw
/// response value.
///
/// Implementations own connectivity, authentication headers, and fault mapping.
/// They perform exactly one dispatch per call; retry policy belongs to callers.
/// Tests inject in-process implementations through
/// [`FleetClientBuilder::transport`](crate::FleetClientBuilder::transport).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn dispatch(&self, operation: &Operation, body: Value) -> Result<Value>;
}

/// Default transport: a reqwest client POSTing to the configured endpoint.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
    api_secret: Option<String>,
}

impl HttpTransport {
    /// Builds a transport for the given endpoint.
    ///
    /// Credentials are optional; when present they are attached to every request
    /// as `x-api-key` / `x-api-secret-key` headers.
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        api_secret: Option<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|source| FleetError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(HttpTransport {
            http,
            base_url,
            api_key,
            api_secret,
        })
    }

    fn endpoint(&self, operation: &Operation) -> Result<Url> {
        self.base_url
            .join(operation.http_path)
            .map_err(|source| FleetError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                source,
            })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn dispatch(&self, operation: &Operation, body: Value) -> Result<Value> {
        let url = self.endpoint(operation)?;
        debug!(operation = operation.name, url = %url, "dispatching control plane request");
        trace!(body = %body, "request body");

        let mut request = self
            .http
            .post(url)
            .header(TARGET_HEADER, format!("{TARGET_PREFIX}.{}", operation.name))
            .json(&body);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }
        if let Some(secret) = &self.api_secret {
            request = request.header(API_SECRET_HEADER, secret);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        trace!(status = status.as_u16(), body = %text, "control plane response");

        if !status.is_success() {
            return Err(map_service_error(status.as_u16(), &text));
        }
        if text.trim().is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        serde_json::from_str(&text).map_err(|source| FleetError::Decode {
            operation: operation.name,
            source,
        })
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_deref().map(|_| "***"))
            .field("api_secret", &self.api_secret.as_deref().map(|_| "***"))
            .finish_non_exhaustive()
    }
}

/// Fault body shape the control plane uses for non-success responses.
#[derive(Debug, Default, Deserialize)]
struct ServiceFault {
    code: Option<String>,
    message: Option<String>,
}

/// Maps a non-success response to a typed error.
///
/// The fault code wins when recognized; otherwise the status decides. Anything
/// unrecognized stays a `Service` error carrying the raw code and message.
fn map_service_error(status: u16, body: &str) -> FleetError {
    let fault: ServiceFault = serde_json::from_str(body).unwrap_or_default();
    let message = match fault.message {
        Some(message) => message,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => format!("HTTP {status}"),
    };

    match fault.code.as_deref() {
        Some("ResourceNotFound") => FleetError::NotFound { message },
        Some("InvalidParameter") => FleetError::InvalidParameter { message },
        Some("LimitExceeded") => FleetError::LimitExceeded { message },
        _ => match status {
            404 => FleetError::NotFound { message },
            400 => FleetError::InvalidParameter { message },
            401 | 403 => FleetError::AuthenticationFailed { message },
            429 => FleetError::LimitExceeded { message },
            _ => FleetError::Service {
                status,
                code: fault.code,
                message,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_code_wins_over_status() {
        let err = map_service_error(
            400,
            r#"{"code": "ResourceNotFound", "message": "Cluster default not found"}"#,
        );
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Cluster default not found"));
    }

    #[test]
    fn test_status_fallback_without_code() {
        assert!(map_service_error(404, "").is_not_found());
        assert!(map_service_error(400, "").is_invalid_parameter());
        assert!(map_service_error(401, "").is_authentication_failed());
        assert!(map_service_error(403, "").is_authentication_failed());
        assert!(map_service_error(429, "").is_limit_exceeded());
    }

    #[test]
    fn test_unrecognized_fault_stays_service_error() {
        let err = map_service_error(
            409,
            r#"{"code": "RevisionConflict", "message": "Revision 4 already exists"}"#,
        );
        match err {
            FleetError::Service {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 409);
                assert_eq!(code.as_deref(), Some("RevisionConflict"));
                assert_eq!(message, "Revision 4 already exists");
            }
            other => panic!("expected Service error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_json_body_used_as_message() {
        let err = map_service_error(502, "upstream connect error");
        match err {
            FleetError::Service {
                status, message, ..
            } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream connect error");
            }
            other => panic!("expected Service error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_body_falls_back_to_status_message() {
        let err = map_service_error(500, "");
        assert!(err.to_string().contains("HTTP 500"));
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let transport = HttpTransport::new(
            "https://api.fleet.test",
            Some("key-123".to_string()),
            Some("secret-456".to_string()),
            "fleet-api/test",
            Duration::from_secs(5),
        )
        .unwrap();
        let rendered = format!("{transport:?}");
        assert!(!rendered.contains("key-123"));
        assert!(!rendered.contains("secret-456"));
    }
}
