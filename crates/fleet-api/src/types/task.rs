//! Task entities: running instantiations of a task definition

use serde::{Deserialize, Serialize};

/// One running instantiation of a task definition on a container instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_arn: Option<String>,
    /// ARN of the container instance hosting the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instance_arn: Option<String>,
    /// Live state of each container in the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub containers: Option<Vec<Container>>,
    /// Status the scheduler is driving the task towards, e.g. `RUNNING`, `STOPPED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_status: Option<String>,
    /// Most recently reported status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<TaskOverride>,
    /// Tag recording who launched the task, e.g. a service name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition_arn: Option<String>,
}

/// Live state of one container within a task.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_arn: Option<String>,
    /// Exit code, present once the container has stopped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_bindings: Option<Vec<NetworkBinding>>,
    /// Human-readable detail for the current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_arn: Option<String>,
}

/// A host-port binding a running container actually received.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkBinding {
    /// Host IP the port is bound on. Irregular wire name `bindIP`.
    #[serde(rename = "bindIP", skip_serializing_if = "Option::is_none")]
    pub bind_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

/// Per-task adjustments applied on top of the task definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_overrides: Option<Vec<ContainerOverride>>,
}

/// Command override for one named container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerOverride {
    /// Replacement command for the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
    /// Name of the container definition the override targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_network_binding_uses_irregular_bind_ip_name() {
        let binding = NetworkBinding {
            bind_ip: Some("0.0.0.0".to_string()),
            container_port: Some(8080),
            host_port: Some(80),
            protocol: Some("tcp".to_string()),
        };
        let value = serde_json::to_value(&binding).unwrap();
        assert_eq!(
            value,
            json!({"bindIP": "0.0.0.0", "containerPort": 8080, "hostPort": 80, "protocol": "tcp"})
        );
        let back: NetworkBinding = serde_json::from_value(value).unwrap();
        assert_eq!(back, binding);
    }

    #[test]
    fn test_task_decodes_nested_containers() {
        let task: Task = serde_json::from_value(json!({
            "taskArn": "arn:fleet:task/8f2b...",
            "clusterArn": "arn:fleet:cluster/default",
            "desiredStatus": "RUNNING",
            "lastStatus": "PENDING",
            "startedBy": "fleet-svc/web",
            "containers": [{
                "name": "web",
                "lastStatus": "PENDING",
                "networkBindings": [{"bindIP": "10.0.0.4", "hostPort": 80}]
            }],
            "overrides": {"containerOverrides": [{"name": "web", "command": ["serve"]}]}
        }))
        .unwrap();
        let containers = task.containers.unwrap();
        assert_eq!(containers.len(), 1);
        assert_eq!(
            containers[0].network_bindings.as_ref().unwrap()[0]
                .bind_ip
                .as_deref(),
            Some("10.0.0.4")
        );
        assert_eq!(
            task.overrides.unwrap().container_overrides.unwrap()[0]
                .command
                .as_ref()
                .unwrap(),
            &["serve".to_string()]
        );
    }
}
