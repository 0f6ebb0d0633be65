//! Cluster operations
//!
//! Clusters group container instances and are the unit everything else hangs
//! off: services, tasks, and instances all live inside one.

use serde::{Deserialize, Serialize};

use crate::client::FleetClient;
use crate::error::Result;
use crate::operation::OperationKind;
use crate::request::{ApiInput, ApiRequest};
use crate::types::{Cluster, Failure};

/// Input for [`FleetClient::create_cluster`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClusterInput {
    /// Name for the cluster; the control plane uses `default` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
}

impl ApiInput for CreateClusterInput {}

/// Output of [`FleetClient::create_cluster`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClusterOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<Cluster>,
}

/// Input for [`FleetClient::delete_cluster`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteClusterInput {
    /// Name or ARN of the cluster to delete (required).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
}

impl ApiInput for DeleteClusterInput {
    fn missing_field(&self) -> Option<&'static str> {
        if self.cluster.is_none() {
            return Some("cluster");
        }
        None
    }
}

/// Output of [`FleetClient::delete_cluster`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteClusterOutput {
    /// The cluster in its post-delete state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<Cluster>,
}

/// Input for [`FleetClient::describe_clusters`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeClustersInput {
    /// Names or ARNs of up to 100 clusters; the default cluster when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clusters: Option<Vec<String>>,
}

impl ApiInput for DescribeClustersInput {}

/// Output of [`FleetClient::describe_clusters`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeClustersOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clusters: Option<Vec<Cluster>>,
    /// Clusters that could not be described.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<Failure>>,
}

/// Input for [`FleetClient::list_clusters`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListClustersInput {
    /// Page size; the control plane caps it at 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
    /// Continuation token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ApiInput for ListClustersInput {}

/// Output of [`FleetClient::list_clusters`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListClustersOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_arns: Option<Vec<String>>,
    /// Present when more pages remain; pass it back in the next call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl FleetClient {
    /// Create a new cluster.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use fleet_api::clusters::CreateClusterInput;
    ///
    /// let output = client
    ///     .create_cluster(CreateClusterInput {
    ///         cluster_name: Some("staging".to_string()),
    ///     })
    ///     .await?;
    /// ```
    pub async fn create_cluster(&self, input: CreateClusterInput) -> Result<CreateClusterOutput> {
        self.create_cluster_request(input).send().await
    }

    /// Build a CreateCluster request without sending it.
    #[must_use]
    pub fn create_cluster_request(
        &self,
        input: CreateClusterInput,
    ) -> ApiRequest<CreateClusterInput, CreateClusterOutput> {
        ApiRequest::new(self.clone(), OperationKind::CreateCluster, input)
    }

    /// Delete a cluster. The cluster must have no registered container
    /// instances or active services.
    pub async fn delete_cluster(&self, input: DeleteClusterInput) -> Result<DeleteClusterOutput> {
        self.delete_cluster_request(input).send().await
    }

    /// Build a DeleteCluster request without sending it.
    #[must_use]
    pub fn delete_cluster_request(
        &self,
        input: DeleteClusterInput,
    ) -> ApiRequest<DeleteClusterInput, DeleteClusterOutput> {
        ApiRequest::new(self.clone(), OperationKind::DeleteCluster, input)
    }

    /// Describe one or more clusters, including their task and instance
    /// counters. Unknown clusters come back in `failures`, not as an error.
    pub async fn describe_clusters(
        &self,
        input: DescribeClustersInput,
    ) -> Result<DescribeClustersOutput> {
        self.describe_clusters_request(input).send().await
    }

    /// Build a DescribeClusters request without sending it.
    #[must_use]
    pub fn describe_clusters_request(
        &self,
        input: DescribeClustersInput,
    ) -> ApiRequest<DescribeClustersInput, DescribeClustersOutput> {
        ApiRequest::new(self.clone(), OperationKind::DescribeClusters, input)
    }

    /// List cluster ARNs, one page per call.
    pub async fn list_clusters(&self, input: ListClustersInput) -> Result<ListClustersOutput> {
        self.list_clusters_request(input).send().await
    }

    /// Build a ListClusters request without sending it.
    #[must_use]
    pub fn list_clusters_request(
        &self,
        input: ListClustersInput,
    ) -> ApiRequest<ListClustersInput, ListClustersOutput> {
        ApiRequest::new(self.clone(), OperationKind::ListClusters, input)
    }
}
