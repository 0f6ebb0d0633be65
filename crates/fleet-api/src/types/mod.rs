//! Wire-format data types for the Fleet control plane
//!
//! Every field is optional: the wire relies on the distinction between an
//! absent field and a zero value (a partial update leaves absent fields
//! untouched), so nothing here defaults to zero. Absent fields are omitted
//! from serialized bodies entirely.

mod cluster;
mod common;
mod container_instance;
mod service;
mod task;
mod task_definition;
pub(crate) mod timestamp;

pub use cluster::Cluster;
pub use common::{Failure, KeyValuePair, Resource, ResourceValue, VersionInfo};
pub use container_instance::ContainerInstance;
pub use service::{Deployment, LoadBalancer, Service, ServiceEvent};
pub use task::{Container, ContainerOverride, NetworkBinding, Task, TaskOverride};
pub use task_definition::{
    ContainerDefinition, HostVolumeProperties, MountPoint, PortMapping, TaskDefinition, Volume,
    VolumeFrom,
};
