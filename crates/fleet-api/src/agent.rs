//! Agent-facing operations
//!
//! These are the calls the on-host agent makes against the control plane:
//! registering its instance, reporting container and task state changes,
//! and discovering which endpoint to long-poll for work. Regular callers
//! rarely need them, but they ride the same wire as everything else.

use serde::{Deserialize, Serialize};

use crate::client::FleetClient;
use crate::error::Result;
use crate::operation::OperationKind;
use crate::request::{ApiInput, ApiRequest};
use crate::types::{ContainerInstance, NetworkBinding, Resource, VersionInfo};

/// Input for [`FleetClient::discover_poll_endpoint`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverPollEndpointInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instance: Option<String>,
}

impl ApiInput for DiscoverPollEndpointInput {}

/// Output of [`FleetClient::discover_poll_endpoint`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverPollEndpointOutput {
    /// Endpoint the agent should long-poll for task placements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Endpoint the agent should push telemetry to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telemetry_endpoint: Option<String>,
}

/// Input for [`FleetClient::register_container_instance`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterContainerInstanceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Identity document of the underlying host, as issued by the compute
    /// provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_identity_document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_identity_document_signature: Option<String>,
    /// Total resources the host offers, such as CPU units and memory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_resources: Option<Vec<Resource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_info: Option<VersionInfo>,
}

impl ApiInput for RegisterContainerInstanceInput {}

/// Output of [`FleetClient::register_container_instance`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterContainerInstanceOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instance: Option<ContainerInstance>,
}

/// Input for [`FleetClient::submit_container_state_change`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitContainerStateChangeInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
    /// Exit code of the container's main process, once it has stopped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_bindings: Option<Vec<NetworkBinding>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// ARN of the task the container belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
}

impl ApiInput for SubmitContainerStateChangeInput {}

/// Output of [`FleetClient::submit_container_state_change`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitContainerStateChangeOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledgment: Option<String>,
}

/// Input for [`FleetClient::submit_task_state_change`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTaskStateChangeInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// ARN of the task whose state changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
}

impl ApiInput for SubmitTaskStateChangeInput {}

/// Output of [`FleetClient::submit_task_state_change`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTaskStateChangeOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledgment: Option<String>,
}

impl FleetClient {
    /// Discover the endpoints an agent should poll for placements and
    /// telemetry.
    pub async fn discover_poll_endpoint(
        &self,
        input: DiscoverPollEndpointInput,
    ) -> Result<DiscoverPollEndpointOutput> {
        self.discover_poll_endpoint_request(input).send().await
    }

    /// Build a DiscoverPollEndpoint request without sending it.
    #[must_use]
    pub fn discover_poll_endpoint_request(
        &self,
        input: DiscoverPollEndpointInput,
    ) -> ApiRequest<DiscoverPollEndpointInput, DiscoverPollEndpointOutput> {
        ApiRequest::new(self.clone(), OperationKind::DiscoverPollEndpoint, input)
    }

    /// Register a host with a cluster, making it eligible for task placement.
    pub async fn register_container_instance(
        &self,
        input: RegisterContainerInstanceInput,
    ) -> Result<RegisterContainerInstanceOutput> {
        self.register_container_instance_request(input).send().await
    }

    /// Build a RegisterContainerInstance request without sending it.
    #[must_use]
    pub fn register_container_instance_request(
        &self,
        input: RegisterContainerInstanceInput,
    ) -> ApiRequest<RegisterContainerInstanceInput, RegisterContainerInstanceOutput> {
        ApiRequest::new(self.clone(), OperationKind::RegisterContainerInstance, input)
    }

    /// Report a container state change back to the control plane.
    pub async fn submit_container_state_change(
        &self,
        input: SubmitContainerStateChangeInput,
    ) -> Result<SubmitContainerStateChangeOutput> {
        self.submit_container_state_change_request(input).send().await
    }

    /// Build a SubmitContainerStateChange request without sending it.
    #[must_use]
    pub fn submit_container_state_change_request(
        &self,
        input: SubmitContainerStateChangeInput,
    ) -> ApiRequest<SubmitContainerStateChangeInput, SubmitContainerStateChangeOutput> {
        ApiRequest::new(self.clone(), OperationKind::SubmitContainerStateChange, input)
    }

    /// Report a task state change back to the control plane.
    pub async fn submit_task_state_change(
        &self,
        input: SubmitTaskStateChangeInput,
    ) -> Result<SubmitTaskStateChangeOutput> {
        self.submit_task_state_change_request(input).send().await
    }

    /// Build a SubmitTaskStateChange request without sending it.
    #[must_use]
    pub fn submit_task_state_change_request(
        &self,
        input: SubmitTaskStateChangeInput,
    ) -> ApiRequest<SubmitTaskStateChangeInput, SubmitTaskStateChangeOutput> {
        ApiRequest::new(self.clone(), OperationKind::SubmitTaskStateChange, input)
    }
}
