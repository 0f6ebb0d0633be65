//! Typed requests binding an operation descriptor to an input and output
//!
//! Building a request is pure: no validation, no I/O, no failure. Everything
//! effectful happens in [`ApiRequest::send`], which checks required fields,
//! serializes the input, dispatches through the client's transport, and decodes
//! the response into the output type.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::FleetClient;
use crate::error::{FleetError, Result};
use crate::operation::{Operation, OperationKind};

/// Operation input marker.
///
/// `missing_field` names the first required field that is unset, in wire form
/// (`"serviceName"`), or `None` when the input is complete. Inputs without
/// required fields keep the default.
pub trait ApiInput: Serialize {
    fn missing_field(&self) -> Option<&'static str> {
        None
    }
}

/// One operation call, ready to send.
///
/// Holds a clone of the client handle, so it stays valid independently of the
/// value it was built from. The output type rides along as a phantom parameter
/// and is produced by [`send`](ApiRequest::send).
#[derive(Debug)]
pub struct ApiRequest<I, O> {
    client: FleetClient,
    kind: OperationKind,
    input: I,
    _output: PhantomData<fn() -> O>,
}

impl<I, O> ApiRequest<I, O>
where
    I: ApiInput,
    O: DeserializeOwned,
{
    pub(crate) fn new(client: FleetClient, kind: OperationKind, input: I) -> Self {
        ApiRequest {
            client,
            kind,
            input,
            _output: PhantomData,
        }
    }

    /// Descriptor of the operation this request targets.
    ///
    /// Stable for the lifetime of the client: every request for the same
    /// operation on the same client resolves to the identical descriptor.
    #[must_use]
    pub fn operation(&self) -> &Operation {
        self.client.operation(self.kind)
    }

    /// The input this request was built from.
    #[must_use]
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Sends the request and decodes the response.
    ///
    /// The only effectful step: required fields are checked locally first (a
    /// missing one fails without touching the network), then the input is
    /// serialized and dispatched once through the transport.
    pub async fn send(self) -> Result<O> {
        let operation = self.client.operation(self.kind);
        if let Some(field) = self.input.missing_field() {
            return Err(FleetError::MissingField {
                operation: operation.name,
                field,
            });
        }
        let body = serde_json::to_value(&self.input).map_err(|source| FleetError::Encode {
            operation: operation.name,
            source,
        })?;
        let response = self.client.transport().dispatch(operation, body).await?;
        serde_json::from_value(response).map_err(|source| FleetError::Decode {
            operation: operation.name,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Operation;
    use crate::transport::Transport;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingTransport {
        dispatches: AtomicUsize,
        reply: Value,
    }

    #[async_trait]
    impl Transport for CountingTransport {
        async fn dispatch(&self, _operation: &Operation, _body: Value) -> Result<Value> {
            self.dispatches.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }

    fn client_with(transport: Arc<CountingTransport>) -> FleetClient {
        FleetClient::builder()
            .base_url("http://control-plane.invalid")
            .transport(transport)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_building_a_request_dispatches_nothing() {
        let transport = Arc::new(CountingTransport {
            dispatches: AtomicUsize::new(0),
            reply: json!({}),
        });
        let client = client_with(transport.clone());

        let request = client.delete_cluster_request(crate::clusters::DeleteClusterInput {
            cluster: Some("default".to_string()),
        });
        assert_eq!(request.operation().name, "DeleteCluster");
        assert_eq!(transport.dispatches.load(Ordering::SeqCst), 0);

        let _output = request.send().await.unwrap();
        assert_eq!(transport.dispatches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_required_field_fails_before_dispatch() {
        let transport = Arc::new(CountingTransport {
            dispatches: AtomicUsize::new(0),
            reply: json!({}),
        });
        let client = client_with(transport.clone());

        let err = client
            .delete_cluster(crate::clusters::DeleteClusterInput::default())
            .await
            .unwrap_err();
        match err {
            FleetError::MissingField { operation, field } => {
                assert_eq!(operation, "DeleteCluster");
                assert_eq!(field, "cluster");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
        assert_eq!(transport.dispatches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_undecodable_response_is_a_decode_error() {
        let transport = Arc::new(CountingTransport {
            dispatches: AtomicUsize::new(0),
            reply: json!({"cluster": "not-an-object"}),
        });
        let client = client_with(transport);

        let err = client
            .create_cluster(crate::clusters::CreateClusterInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, FleetError::Decode { operation: "CreateCluster", .. }));
    }
}
