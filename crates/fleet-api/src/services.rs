//! Service operations
//!
//! A service keeps a desired number of tasks from one task definition running
//! in a cluster, replacing tasks that stop and rolling deployments when its
//! task definition changes.

use serde::{Deserialize, Serialize};

use crate::client::FleetClient;
use crate::error::Result;
use crate::operation::OperationKind;
use crate::request::{ApiInput, ApiRequest};
use crate::types::{Failure, LoadBalancer, Service};

/// Input for [`FleetClient::create_service`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceInput {
    /// Idempotency token, unique per creation attempt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    /// Cluster to run the service in; the default cluster when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Number of tasks to keep running (required).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_count: Option<i64>,
    /// Load balancers to register service tasks with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancers: Option<Vec<LoadBalancer>>,
    /// Role allowing the service to register with load balancers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Service name, unique per cluster (required).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// Family, `family:revision`, or ARN of the task definition to run
    /// (required).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<String>,
}

impl ApiInput for CreateServiceInput {
    fn missing_field(&self) -> Option<&'static str> {
        if self.desired_count.is_none() {
            return Some("desiredCount");
        }
        if self.service_name.is_none() {
            return Some("serviceName");
        }
        if self.task_definition.is_none() {
            return Some("taskDefinition");
        }
        None
    }
}

/// Output of [`FleetClient::create_service`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,
}

/// Input for [`FleetClient::delete_service`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteServiceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Name of the service to delete (required). Its desired count must be
    /// zero first; use [`FleetClient::update_service`] to drain it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

impl ApiInput for DeleteServiceInput {
    fn missing_field(&self) -> Option<&'static str> {
        if self.service.is_none() {
            return Some("service");
        }
        None
    }
}

/// Output of [`FleetClient::delete_service`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteServiceOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,
}

/// Input for [`FleetClient::describe_services`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeServicesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Names or ARNs of the services to describe (required).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,
}

impl ApiInput for DescribeServicesInput {
    fn missing_field(&self) -> Option<&'static str> {
        if self.services.is_none() {
            return Some("services");
        }
        None
    }
}

/// Output of [`FleetClient::describe_services`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeServicesOutput {
    /// Services that could not be described.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<Failure>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,
}

/// Input for [`FleetClient::list_services`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListServicesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ApiInput for ListServicesInput {}

/// Output of [`FleetClient::list_services`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListServicesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_arns: Option<Vec<String>>,
}

/// Input for [`FleetClient::update_service`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// New desired count; leave absent to keep the current count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_count: Option<i64>,
    /// Name of the service to update (required).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// New task definition; setting one starts a rolling deployment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<String>,
}

impl ApiInput for UpdateServiceInput {
    fn missing_field(&self) -> Option<&'static str> {
        if self.service.is_none() {
            return Some("service");
        }
        None
    }
}

/// Output of [`FleetClient::update_service`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,
}

impl FleetClient {
    /// Create a service that keeps `desired_count` tasks of a task definition
    /// running in a cluster.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use fleet_api::services::CreateServiceInput;
    ///
    /// let output = client
    ///     .create_service(CreateServiceInput {
    ///         service_name: Some("web".to_string()),
    ///         task_definition: Some("web:7".to_string()),
    ///         desired_count: Some(4),
    ///         ..CreateServiceInput::default()
    ///     })
    ///     .await?;
    /// ```
    pub async fn create_service(&self, input: CreateServiceInput) -> Result<CreateServiceOutput> {
        self.create_service_request(input).send().await
    }

    /// Build a CreateService request without sending it.
    #[must_use]
    pub fn create_service_request(
        &self,
        input: CreateServiceInput,
    ) -> ApiRequest<CreateServiceInput, CreateServiceOutput> {
        ApiRequest::new(self.clone(), OperationKind::CreateService, input)
    }

    /// Delete a service whose desired count has been reduced to zero.
    pub async fn delete_service(&self, input: DeleteServiceInput) -> Result<DeleteServiceOutput> {
        self.delete_service_request(input).send().await
    }

    /// Build a DeleteService request without sending it.
    #[must_use]
    pub fn delete_service_request(
        &self,
        input: DeleteServiceInput,
    ) -> ApiRequest<DeleteServiceInput, DeleteServiceOutput> {
        ApiRequest::new(self.clone(), OperationKind::DeleteService, input)
    }

    /// Describe services, including deployment state and recent events.
    /// Unknown services come back in `failures`, not as an error.
    pub async fn describe_services(
        &self,
        input: DescribeServicesInput,
    ) -> Result<DescribeServicesOutput> {
        self.describe_services_request(input).send().await
    }

    /// Build a DescribeServices request without sending it.
    #[must_use]
    pub fn describe_services_request(
        &self,
        input: DescribeServicesInput,
    ) -> ApiRequest<DescribeServicesInput, DescribeServicesOutput> {
        ApiRequest::new(self.clone(), OperationKind::DescribeServices, input)
    }

    /// List service ARNs in a cluster, one page per call.
    pub async fn list_services(&self, input: ListServicesInput) -> Result<ListServicesOutput> {
        self.list_services_request(input).send().await
    }

    /// Build a ListServices request without sending it.
    #[must_use]
    pub fn list_services_request(
        &self,
        input: ListServicesInput,
    ) -> ApiRequest<ListServicesInput, ListServicesOutput> {
        ApiRequest::new(self.clone(), OperationKind::ListServices, input)
    }

    /// Change a service's desired count or task definition. Absent fields are
    /// left untouched, so a count of zero must be sent explicitly.
    pub async fn update_service(&self, input: UpdateServiceInput) -> Result<UpdateServiceOutput> {
        self.update_service_request(input).send().await
    }

    /// Build an UpdateService request without sending it.
    #[must_use]
    pub fn update_service_request(
        &self,
        input: UpdateServiceInput,
    ) -> ApiRequest<UpdateServiceInput, UpdateServiceOutput> {
        ApiRequest::new(self.clone(), OperationKind::UpdateService, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_service_reports_first_missing_field() {
        let mut input = CreateServiceInput::default();
        assert_eq!(input.missing_field(), Some("desiredCount"));

        input.desired_count = Some(4);
        assert_eq!(input.missing_field(), Some("serviceName"));

        input.service_name = Some("web".to_string());
        assert_eq!(input.missing_field(), Some("taskDefinition"));

        input.task_definition = Some("web:7".to_string());
        assert_eq!(input.missing_field(), None);
    }

    #[test]
    fn test_update_service_distinguishes_absent_from_zero_count() {
        let drain = UpdateServiceInput {
            service: Some("web".to_string()),
            desired_count: Some(0),
            ..UpdateServiceInput::default()
        };
        assert_eq!(
            serde_json::to_value(&drain).unwrap(),
            json!({"service": "web", "desiredCount": 0})
        );

        let keep_count = UpdateServiceInput {
            service: Some("web".to_string()),
            task_definition: Some("web:8".to_string()),
            ..UpdateServiceInput::default()
        };
        assert_eq!(
            serde_json::to_value(&keep_count).unwrap(),
            json!({"service": "web", "taskDefinition": "web:8"})
        );
    }

    #[test]
    fn test_describe_services_requires_services() {
        assert_eq!(
            DescribeServicesInput::default().missing_field(),
            Some("services")
        );
        let input = DescribeServicesInput {
            services: Some(vec!["web".to_string()]),
            ..DescribeServicesInput::default()
        };
        assert_eq!(input.missing_field(), None);
    }
}
