//! Client handle for the Fleet control plane
//!
//! [`FleetClient`] owns the operation registry and the transport. It is cheap to
//! clone and safe to share across tasks; clones see the same registry, so
//! operation descriptors stay pointer-identical for the lifetime of the client.
//!
//! # Example
//!
//! ```no_run
//! use fleet_api::FleetClient;
//! use fleet_api::clusters::CreateClusterInput;
//!
//! # async fn run() -> fleet_api::Result<()> {
//! let client = FleetClient::builder()
//!     .base_url("https://control-plane.fleet.example.com")
//!     .api_key("key")
//!     .api_secret("secret")
//!     .build()?;
//!
//! let output = client
//!     .create_cluster(CreateClusterInput {
//!         cluster_name: Some("default".to_string()),
//!     })
//!     .await?;
//! println!("{:?}", output.cluster);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::error::{FleetError, Result};
use crate::operation::{Operation, OperationKind, OperationRegistry};
use crate::transport::{HttpTransport, Transport};

/// User agent string for fleet-api HTTP requests
pub const USER_AGENT: &str = concat!("fleet-api/", env!("CARGO_PKG_VERSION"));

/// Whole-request timeout used when the builder does not set one
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

struct ClientInner {
    registry: OperationRegistry,
    transport: Arc<dyn Transport>,
}

/// Handle to the Fleet control plane API
#[derive(Clone)]
pub struct FleetClient {
    inner: Arc<ClientInner>,
}

impl FleetClient {
    /// Start building a client.
    #[must_use]
    pub fn builder() -> FleetClientBuilder {
        FleetClientBuilder::default()
    }

    /// Descriptor for the given operation.
    ///
    /// Lock-free read into the client-owned registry; the reference is stable
    /// for as long as any clone of this client lives.
    #[must_use]
    pub fn operation(&self, kind: OperationKind) -> &Operation {
        self.inner.registry.get(kind)
    }

    /// The full operation registry.
    #[must_use]
    pub fn registry(&self) -> &OperationRegistry {
        &self.inner.registry
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.inner.transport.as_ref()
    }
}

impl fmt::Debug for FleetClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FleetClient")
            .field("operations", &self.inner.registry.len())
            .finish_non_exhaustive()
    }
}

/// Builder for [`FleetClient`]
#[derive(Default)]
pub struct FleetClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    api_secret: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl FleetClientBuilder {
    /// Seed a builder from the environment.
    ///
    /// Reads `FLEET_ENDPOINT`, `FLEET_API_KEY`, and `FLEET_API_SECRET` when set;
    /// explicit builder calls afterwards win over the environment.
    #[must_use]
    pub fn from_env() -> Self {
        let mut builder = FleetClientBuilder::default();
        if let Ok(url) = std::env::var("FLEET_ENDPOINT") {
            debug!("Found FLEET_ENDPOINT environment variable");
            builder.base_url = Some(url);
        }
        if let Ok(key) = std::env::var("FLEET_API_KEY") {
            debug!("Found FLEET_API_KEY environment variable");
            builder.api_key = Some(key);
        }
        if let Ok(secret) = std::env::var("FLEET_API_SECRET") {
            debug!("Found FLEET_API_SECRET environment variable");
            builder.api_secret = Some(secret);
        }
        builder
    }

    /// Endpoint the client talks to, e.g. `https://control-plane.fleet.example.com`.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// API key sent as the `x-api-key` header.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// API secret sent as the `x-api-secret-key` header.
    #[must_use]
    pub fn api_secret(mut self, secret: impl Into<String>) -> Self {
        self.api_secret = Some(secret.into());
        self
    }

    /// Override the default `fleet-api/<version>` user agent.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Whole-request HTTP timeout. Defaults to 30 seconds.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replace the HTTP transport entirely.
    ///
    /// The endpoint and credential settings only apply to the default transport;
    /// a custom transport owns its own dispatch behavior.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client, constructing the operation registry and the transport.
    pub fn build(self) -> Result<FleetClient> {
        let registry = OperationRegistry::new();
        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let base_url = self.base_url.ok_or_else(|| {
                    FleetError::Config(
                        "Base URL is required; set base_url() or FLEET_ENDPOINT".to_string(),
                    )
                })?;
                let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_string());
                let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
                debug!("Creating Fleet control plane client for {}", base_url);
                Arc::new(HttpTransport::new(
                    &base_url,
                    self.api_key,
                    self.api_secret,
                    &user_agent,
                    timeout,
                )?) as Arc<dyn Transport>
            }
        };
        Ok(FleetClient {
            inner: Arc::new(ClientInner { registry, transport }),
        })
    }
}

impl fmt::Debug for FleetClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FleetClientBuilder")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_deref().map(|_| "***"))
            .field("api_secret", &self.api_secret.as_deref().map(|_| "***"))
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_base_url() {
        let err = FleetClient::builder().build().unwrap_err();
        assert!(matches!(err, FleetError::Config(_)));
        assert!(err.to_string().contains("Base URL"));
    }

    #[test]
    fn test_build_rejects_invalid_base_url() {
        let err = FleetClient::builder()
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, FleetError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_clones_share_the_registry() {
        let client = FleetClient::builder()
            .base_url("https://control-plane.fleet.example.com")
            .build()
            .unwrap();
        let clone = client.clone();
        assert!(std::ptr::eq(
            client.operation(OperationKind::ListClusters),
            clone.operation(OperationKind::ListClusters)
        ));
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_reads_endpoint_and_credentials() {
        unsafe {
            std::env::set_var("FLEET_ENDPOINT", "https://env.fleet.example.com");
            std::env::set_var("FLEET_API_KEY", "env-key");
            std::env::set_var("FLEET_API_SECRET", "env-secret");
        }

        let builder = FleetClientBuilder::from_env();
        assert_eq!(
            builder.base_url.as_deref(),
            Some("https://env.fleet.example.com")
        );
        assert_eq!(builder.api_key.as_deref(), Some("env-key"));
        assert_eq!(builder.api_secret.as_deref(), Some("env-secret"));
        assert!(builder.build().is_ok());

        // Clean up
        unsafe {
            std::env::remove_var("FLEET_ENDPOINT");
            std::env::remove_var("FLEET_API_KEY");
            std::env::remove_var("FLEET_API_SECRET");
        }
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_leaves_unset_values_alone() {
        unsafe {
            std::env::remove_var("FLEET_ENDPOINT");
            std::env::remove_var("FLEET_API_KEY");
            std::env::remove_var("FLEET_API_SECRET");
        }

        let builder = FleetClientBuilder::from_env();
        assert!(builder.base_url.is_none());
        assert!(builder.api_key.is_none());
        assert!(builder.api_secret.is_none());
    }

    #[test]
    fn test_builder_debug_redacts_credentials() {
        let builder = FleetClient::builder()
            .base_url("https://control-plane.fleet.example.com")
            .api_key("key-123")
            .api_secret("secret-456");
        let rendered = format!("{builder:?}");
        assert!(!rendered.contains("key-123"));
        assert!(!rendered.contains("secret-456"));
    }
}
