//! Container instance entity: one compute host registered to a cluster

use serde::{Deserialize, Serialize};

use super::{Resource, VersionInfo};

/// One compute host registered to a cluster.
///
/// Registered resources are the host's full capacity; remaining resources are
/// what the scheduler can still place tasks against.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerInstance {
    /// Whether the agent currently holds a connection to the control plane.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_connected: Option<bool>,
    /// `PENDING`, `STAGING`, `STAGED`, `UPDATING`, `UPDATED`, or `FAILED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_update_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instance_arn: Option<String>,
    /// Instance identifier of the underlying compute host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ec2_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_tasks_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_resources: Option<Vec<Resource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_resources: Option<Vec<Resource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_tasks_count: Option<i64>,
    /// `ACTIVE` or `INACTIVE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_info: Option<VersionInfo>,
}
