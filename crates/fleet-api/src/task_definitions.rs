//! Task definition operations
//!
//! Definitions are registered under a family; each registration appends a new
//! revision. Tasks and services reference a definition by family,
//! `family:revision`, or ARN.

use serde::{Deserialize, Serialize};

use crate::client::FleetClient;
use crate::error::Result;
use crate::operation::OperationKind;
use crate::request::{ApiInput, ApiRequest};
use crate::types::{ContainerDefinition, TaskDefinition, Volume};

/// Input for [`FleetClient::register_task_definition`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTaskDefinitionInput {
    /// Launch specs for the task's containers (required).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_definitions: Option<Vec<ContainerDefinition>>,
    /// Family to register the revision under (required).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Volumes containers may mount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<Volume>>,
}

impl ApiInput for RegisterTaskDefinitionInput {
    fn missing_field(&self) -> Option<&'static str> {
        if self.container_definitions.is_none() {
            return Some("containerDefinitions");
        }
        if self.family.is_none() {
            return Some("family");
        }
        None
    }
}

/// Output of [`FleetClient::register_task_definition`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTaskDefinitionOutput {
    /// The registered definition, including its assigned revision and ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<TaskDefinition>,
}

/// Input for [`FleetClient::deregister_task_definition`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeregisterTaskDefinitionInput {
    /// `family:revision` or ARN of the definition to deregister (required).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<String>,
}

impl ApiInput for DeregisterTaskDefinitionInput {
    fn missing_field(&self) -> Option<&'static str> {
        if self.task_definition.is_none() {
            return Some("taskDefinition");
        }
        None
    }
}

/// Output of [`FleetClient::deregister_task_definition`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeregisterTaskDefinitionOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<TaskDefinition>,
}

/// Input for [`FleetClient::describe_task_definition`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeTaskDefinitionInput {
    /// Family (latest revision), `family:revision`, or ARN (required).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<String>,
}

impl ApiInput for DescribeTaskDefinitionInput {
    fn missing_field(&self) -> Option<&'static str> {
        if self.task_definition.is_none() {
            return Some("taskDefinition");
        }
        None
    }
}

/// Output of [`FleetClient::describe_task_definition`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeTaskDefinitionOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<TaskDefinition>,
}

/// Input for [`FleetClient::list_task_definitions`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTaskDefinitionsInput {
    /// Restrict results to one family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ApiInput for ListTaskDefinitionsInput {}

/// Output of [`FleetClient::list_task_definitions`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTaskDefinitionsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition_arns: Option<Vec<String>>,
}

/// Input for [`FleetClient::list_task_definition_families`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTaskDefinitionFamiliesInput {
    /// Only families starting with this prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ApiInput for ListTaskDefinitionFamiliesInput {}

/// Output of [`FleetClient::list_task_definition_families`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTaskDefinitionFamiliesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub families: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl FleetClient {
    /// Register a task definition, appending a new revision to its family.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use fleet_api::task_definitions::RegisterTaskDefinitionInput;
    /// use fleet_api::types::ContainerDefinition;
    ///
    /// let output = client
    ///     .register_task_definition(RegisterTaskDefinitionInput {
    ///         family: Some("web".to_string()),
    ///         container_definitions: Some(vec![ContainerDefinition {
    ///             name: Some("web".to_string()),
    ///             image: Some("nginx:1.27".to_string()),
    ///             memory: Some(512),
    ///             essential: Some(true),
    ///             ..ContainerDefinition::default()
    ///         }]),
    ///         volumes: None,
    ///     })
    ///     .await?;
    /// ```
    pub async fn register_task_definition(
        &self,
        input: RegisterTaskDefinitionInput,
    ) -> Result<RegisterTaskDefinitionOutput> {
        self.register_task_definition_request(input).send().await
    }

    /// Build a RegisterTaskDefinition request without sending it.
    #[must_use]
    pub fn register_task_definition_request(
        &self,
        input: RegisterTaskDefinitionInput,
    ) -> ApiRequest<RegisterTaskDefinitionInput, RegisterTaskDefinitionOutput> {
        ApiRequest::new(self.clone(), OperationKind::RegisterTaskDefinition, input)
    }

    /// Deregister a task definition revision so no new tasks can launch from
    /// it. Marked [`Availability::Unverified`](crate::Availability::Unverified):
    /// not every deployment accepts this call yet.
    pub async fn deregister_task_definition(
        &self,
        input: DeregisterTaskDefinitionInput,
    ) -> Result<DeregisterTaskDefinitionOutput> {
        self.deregister_task_definition_request(input).send().await
    }

    /// Build a DeregisterTaskDefinition request without sending it.
    #[must_use]
    pub fn deregister_task_definition_request(
        &self,
        input: DeregisterTaskDefinitionInput,
    ) -> ApiRequest<DeregisterTaskDefinitionInput, DeregisterTaskDefinitionOutput> {
        ApiRequest::new(self.clone(), OperationKind::DeregisterTaskDefinition, input)
    }

    /// Describe one task definition revision.
    pub async fn describe_task_definition(
        &self,
        input: DescribeTaskDefinitionInput,
    ) -> Result<DescribeTaskDefinitionOutput> {
        self.describe_task_definition_request(input).send().await
    }

    /// Build a DescribeTaskDefinition request without sending it.
    #[must_use]
    pub fn describe_task_definition_request(
        &self,
        input: DescribeTaskDefinitionInput,
    ) -> ApiRequest<DescribeTaskDefinitionInput, DescribeTaskDefinitionOutput> {
        ApiRequest::new(self.clone(), OperationKind::DescribeTaskDefinition, input)
    }

    /// List task definition ARNs, one page per call.
    pub async fn list_task_definitions(
        &self,
        input: ListTaskDefinitionsInput,
    ) -> Result<ListTaskDefinitionsOutput> {
        self.list_task_definitions_request(input).send().await
    }

    /// Build a ListTaskDefinitions request without sending it.
    #[must_use]
    pub fn list_task_definitions_request(
        &self,
        input: ListTaskDefinitionsInput,
    ) -> ApiRequest<ListTaskDefinitionsInput, ListTaskDefinitionsOutput> {
        ApiRequest::new(self.clone(), OperationKind::ListTaskDefinitions, input)
    }

    /// List task definition family names, one page per call.
    pub async fn list_task_definition_families(
        &self,
        input: ListTaskDefinitionFamiliesInput,
    ) -> Result<ListTaskDefinitionFamiliesOutput> {
        self.list_task_definition_families_request(input).send().await
    }

    /// Build a ListTaskDefinitionFamilies request without sending it.
    #[must_use]
    pub fn list_task_definition_families_request(
        &self,
        input: ListTaskDefinitionFamiliesInput,
    ) -> ApiRequest<ListTaskDefinitionFamiliesInput, ListTaskDefinitionFamiliesOutput> {
        ApiRequest::new(self.clone(), OperationKind::ListTaskDefinitionFamilies, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_requires_definitions_then_family() {
        let mut input = RegisterTaskDefinitionInput::default();
        assert_eq!(input.missing_field(), Some("containerDefinitions"));

        input.container_definitions = Some(vec![]);
        assert_eq!(input.missing_field(), Some("family"));

        input.family = Some("web".to_string());
        assert_eq!(input.missing_field(), None);
    }

    #[test]
    fn test_register_input_wire_shape() {
        let input = RegisterTaskDefinitionInput {
            family: Some("web".to_string()),
            container_definitions: Some(vec![ContainerDefinition {
                name: Some("web".to_string()),
                image: Some("nginx:1.27".to_string()),
                ..ContainerDefinition::default()
            }]),
            volumes: None,
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "family": "web",
                "containerDefinitions": [{"name": "web", "image": "nginx:1.27"}]
            })
        );
    }

    #[test]
    fn test_describe_requires_task_definition() {
        assert_eq!(
            DescribeTaskDefinitionInput::default().missing_field(),
            Some("taskDefinition")
        );
    }
}
