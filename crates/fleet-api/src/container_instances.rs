//! Container instance operations
//!
//! Instances register themselves through the agent (see [`crate::agent`]);
//! these operations inspect and manage already-registered hosts.

use serde::{Deserialize, Serialize};

use crate::client::FleetClient;
use crate::error::Result;
use crate::operation::OperationKind;
use crate::request::{ApiInput, ApiRequest};
use crate::types::{ContainerInstance, Failure};

/// Input for [`FleetClient::describe_container_instances`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeContainerInstancesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// IDs or ARNs of the instances to describe (required).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instances: Option<Vec<String>>,
}

impl ApiInput for DescribeContainerInstancesInput {
    fn missing_field(&self) -> Option<&'static str> {
        if self.container_instances.is_none() {
            return Some("containerInstances");
        }
        None
    }
}

/// Output of [`FleetClient::describe_container_instances`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeContainerInstancesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instances: Option<Vec<ContainerInstance>>,
    /// Instances that could not be described.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<Failure>>,
}

/// Input for [`FleetClient::list_container_instances`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListContainerInstancesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ApiInput for ListContainerInstancesInput {}

/// Output of [`FleetClient::list_container_instances`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListContainerInstancesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instance_arns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for [`FleetClient::deregister_container_instance`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeregisterContainerInstanceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// ID or ARN of the instance to deregister (required).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instance: Option<String>,
    /// Deregister even if the instance still hosts running tasks; those tasks
    /// keep running but are orphaned from the scheduler.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
}

impl ApiInput for DeregisterContainerInstanceInput {
    fn missing_field(&self) -> Option<&'static str> {
        if self.container_instance.is_none() {
            return Some("containerInstance");
        }
        None
    }
}

/// Output of [`FleetClient::deregister_container_instance`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeregisterContainerInstanceOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instance: Option<ContainerInstance>,
}

/// Input for [`FleetClient::update_container_agent`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContainerAgentInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// ID or ARN of the instance whose agent should update (required).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instance: Option<String>,
}

impl ApiInput for UpdateContainerAgentInput {
    fn missing_field(&self) -> Option<&'static str> {
        if self.container_instance.is_none() {
            return Some("containerInstance");
        }
        None
    }
}

/// Output of [`FleetClient::update_container_agent`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContainerAgentOutput {
    /// The instance, with `agent_update_status` tracking the rollout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instance: Option<ContainerInstance>,
}

impl FleetClient {
    /// Describe container instances, including registered and remaining
    /// resources. Unknown instances come back in `failures`, not as an error.
    pub async fn describe_container_instances(
        &self,
        input: DescribeContainerInstancesInput,
    ) -> Result<DescribeContainerInstancesOutput> {
        self.describe_container_instances_request(input).send().await
    }

    /// Build a DescribeContainerInstances request without sending it.
    #[must_use]
    pub fn describe_container_instances_request(
        &self,
        input: DescribeContainerInstancesInput,
    ) -> ApiRequest<DescribeContainerInstancesInput, DescribeContainerInstancesOutput> {
        ApiRequest::new(self.clone(), OperationKind::DescribeContainerInstances, input)
    }

    /// List container instance ARNs in a cluster, one page per call.
    pub async fn list_container_instances(
        &self,
        input: ListContainerInstancesInput,
    ) -> Result<ListContainerInstancesOutput> {
        self.list_container_instances_request(input).send().await
    }

    /// Build a ListContainerInstances request without sending it.
    #[must_use]
    pub fn list_container_instances_request(
        &self,
        input: ListContainerInstancesInput,
    ) -> ApiRequest<ListContainerInstancesInput, ListContainerInstancesOutput> {
        ApiRequest::new(self.clone(), OperationKind::ListContainerInstances, input)
    }

    /// Remove a container instance from its cluster.
    pub async fn deregister_container_instance(
        &self,
        input: DeregisterContainerInstanceInput,
    ) -> Result<DeregisterContainerInstanceOutput> {
        self.deregister_container_instance_request(input).send().await
    }

    /// Build a DeregisterContainerInstance request without sending it.
    #[must_use]
    pub fn deregister_container_instance_request(
        &self,
        input: DeregisterContainerInstanceInput,
    ) -> ApiRequest<DeregisterContainerInstanceInput, DeregisterContainerInstanceOutput> {
        ApiRequest::new(self.clone(), OperationKind::DeregisterContainerInstance, input)
    }

    /// Ask an instance's agent to update itself to the latest version.
    pub async fn update_container_agent(
        &self,
        input: UpdateContainerAgentInput,
    ) -> Result<UpdateContainerAgentOutput> {
        self.update_container_agent_request(input).send().await
    }

    /// Build an UpdateContainerAgent request without sending it.
    #[must_use]
    pub fn update_container_agent_request(
        &self,
        input: UpdateContainerAgentInput,
    ) -> ApiRequest<UpdateContainerAgentInput, UpdateContainerAgentOutput> {
        ApiRequest::new(self.clone(), OperationKind::UpdateContainerAgent, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_describe_requires_container_instances() {
        assert_eq!(
            DescribeContainerInstancesInput::default().missing_field(),
            Some("containerInstances")
        );
    }

    #[test]
    fn test_deregister_force_flag_is_optional() {
        let input = DeregisterContainerInstanceInput {
            container_instance: Some("arn:fleet:container-instance/9a3e".to_string()),
            ..DeregisterContainerInstanceInput::default()
        };
        assert_eq!(input.missing_field(), None);
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"containerInstance": "arn:fleet:container-instance/9a3e"})
        );

        let forced = DeregisterContainerInstanceInput {
            force: Some(true),
            ..input
        };
        assert_eq!(
            serde_json::to_value(&forced).unwrap()["force"],
            json!(true)
        );
    }
}
