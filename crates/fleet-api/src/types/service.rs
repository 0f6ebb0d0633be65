//! Service entities: supervisors maintaining a desired count of tasks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// A supervisor keeping a desired number of tasks from one task definition
/// running inside a cluster.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_arn: Option<String>,
    /// Rollout history, newest first; the `PRIMARY` deployment is the one
    /// being driven to the desired count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployments: Option<Vec<Deployment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_count: Option<i64>,
    /// Event log, capped at 100 entries by the control plane.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<ServiceEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancers: Option<Vec<LoadBalancer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_count: Option<i64>,
    /// ARN of the role the service uses to register with load balancers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// `ACTIVE`, `DRAINING`, or `INACTIVE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Task definition the service launches tasks from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<String>,
}

/// One task-definition revision in flight within a service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    #[serde(
        with = "timestamp",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_count: Option<i64>,
    /// `PRIMARY`, `ACTIVE`, or `INACTIVE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<String>,
    #[serde(
        with = "timestamp",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One entry in a service's event log.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEvent {
    #[serde(
        with = "timestamp",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Load balancer attachment for a service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancer {
    /// Container (by name) to route traffic to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_service_decodes_deployments_and_events() {
        let service: Service = serde_json::from_value(json!({
            "serviceName": "web",
            "serviceArn": "arn:fleet:service/web",
            "status": "ACTIVE",
            "desiredCount": 4,
            "runningCount": 3,
            "pendingCount": 1,
            "taskDefinition": "arn:fleet:task-definition/web:7",
            "deployments": [{
                "id": "fleet-svc-deployment/1",
                "status": "PRIMARY",
                "taskDefinition": "arn:fleet:task-definition/web:7",
                "desiredCount": 4,
                "runningCount": 3,
                "createdAt": 1430167761.5,
                "updatedAt": 1430171361.0
            }],
            "events": [{
                "id": "e-1",
                "message": "service web has started 3 tasks",
                "createdAt": 1430167800
            }]
        }))
        .unwrap();

        let deployment = &service.deployments.as_ref().unwrap()[0];
        assert_eq!(deployment.status.as_deref(), Some("PRIMARY"));
        assert_eq!(deployment.created_at.unwrap().timestamp(), 1430167761);
        assert_eq!(deployment.created_at.unwrap().timestamp_subsec_millis(), 500);

        let event = &service.events.as_ref().unwrap()[0];
        assert_eq!(event.created_at.unwrap().timestamp(), 1430167800);
    }

    #[test]
    fn test_deployment_serializes_timestamps_as_epoch_seconds() {
        let deployment = Deployment {
            id: Some("fleet-svc-deployment/1".to_string()),
            created_at: DateTime::from_timestamp(1430167761, 500_000_000),
            ..Deployment::default()
        };
        let value = serde_json::to_value(&deployment).unwrap();
        assert_eq!(
            value,
            json!({"id": "fleet-svc-deployment/1", "createdAt": 1430167761.5})
        );
    }
}
