//! Task definition entities: the versioned template a task is launched from

use serde::{Deserialize, Serialize};

/// A versioned template describing one or more containers to run together.
///
/// Registering a definition under an existing family appends a new revision;
/// revisions are never reused or decremented.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDefinition {
    /// Launch specs for each container in the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_definitions: Option<Vec<ContainerDefinition>>,
    /// Family name grouping revisions of this definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Revision within the family, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition_arn: Option<String>,
    /// Volumes containers in this task may mount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<Volume>>,
}

/// One container's launch specification within a task definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDefinition {
    /// CPU units to reserve for the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<i64>,
    /// Command passed to the container, overriding the image default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<Vec<String>>,
    /// Environment variables to set in the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Vec<super::KeyValuePair>>,
    /// When true, the whole task stops if this container fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub essential: Option<bool>,
    /// Image reference, e.g. `registry/repository:tag`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Names of sibling containers to link to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
    /// Memory to reserve, in MiB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_points: Option<Vec<MountPoint>>,
    /// Container name, unique within the task definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_mappings: Option<Vec<PortMapping>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes_from: Option<Vec<VolumeFrom>>,
}

/// A container-port to host-port binding declared in a container definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_port: Option<i64>,
    /// `tcp` or `udp`; defaults to `tcp` on the service side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

/// A volume mount inside one container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountPoint {
    /// Path inside the container to mount at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    /// Name of the task-level [`Volume`] to mount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_volume: Option<String>,
}

/// Mounts every volume of another container in this one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeFrom {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    /// Name of the container to take volumes from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_container: Option<String>,
}

/// A data volume declared at the task level.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    /// Host-side properties; an empty host means an ephemeral volume.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<HostVolumeProperties>,
    /// Volume name referenced by [`MountPoint::source_volume`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Host-side details of a [`Volume`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostVolumeProperties {
    /// Path on the host to expose into containers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KeyValuePair;
    use serde_json::json;

    #[test]
    fn test_container_definition_wire_names() {
        let definition = ContainerDefinition {
            name: Some("web".to_string()),
            image: Some("nginx:1.27".to_string()),
            cpu: Some(256),
            memory: Some(512),
            essential: Some(true),
            entry_point: Some(vec!["/bin/sh".to_string(), "-c".to_string()]),
            environment: Some(vec![KeyValuePair {
                name: Some("PORT".to_string()),
                value: Some("8080".to_string()),
            }]),
            port_mappings: Some(vec![PortMapping {
                container_port: Some(8080),
                host_port: Some(80),
                protocol: Some("tcp".to_string()),
            }]),
            ..ContainerDefinition::default()
        };
        let value = serde_json::to_value(&definition).unwrap();
        assert_eq!(value["entryPoint"], json!(["/bin/sh", "-c"]));
        assert_eq!(value["portMappings"][0]["containerPort"], 8080);
        assert_eq!(value["environment"][0]["name"], "PORT");
        assert!(value.get("mountPoints").is_none());
    }

    #[test]
    fn test_task_definition_round_trips() {
        let definition = TaskDefinition {
            family: Some("web".to_string()),
            revision: Some(3),
            task_definition_arn: Some("arn:fleet:task-definition/web:3".to_string()),
            volumes: Some(vec![Volume {
                name: Some("data".to_string()),
                host: Some(HostVolumeProperties {
                    source_path: Some("/var/lib/data".to_string()),
                }),
            }]),
            ..TaskDefinition::default()
        };
        let value = serde_json::to_value(&definition).unwrap();
        assert_eq!(value["volumes"][0]["host"]["sourcePath"], "/var/lib/data");
        let back: TaskDefinition = serde_json::from_value(value).unwrap();
        assert_eq!(back, definition);
    }
}
