//! Types shared across resources

use serde::{Deserialize, Serialize};

/// A name/value pair, used for container environment variables.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValuePair {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// One item a batch operation could not act on.
///
/// Batch describe/start/run operations return these alongside their successful
/// results; a call with failures still completes with `Ok`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Failure {
    /// ARN of the resource the failure applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Why the item failed, e.g. `MISSING`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Version metadata reported by a container instance's agent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_version: Option<String>,
}

/// A typed capacity or usage measurement on a container instance.
///
/// On the wire a resource carries a `type` tag (`INTEGER`, `DOUBLE`, `LONG`,
/// `STRINGSET`) plus four parallel value fields of which exactly one is
/// meaningful. Here the tag and value collapse into [`ResourceValue`], so an
/// inconsistent combination cannot be represented; the wire encoding is
/// reconstructed on serialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "ResourceWire", into = "ResourceWire")]
pub struct Resource {
    /// Resource name, e.g. `CPU`, `MEMORY`, `PORTS`.
    pub name: Option<String>,
    /// The measurement, or `None` when the wire carried no type tag.
    pub value: Option<ResourceValue>,
}

impl Resource {
    /// An `INTEGER` resource.
    pub fn integer(name: impl Into<String>, value: i64) -> Self {
        Resource {
            name: Some(name.into()),
            value: Some(ResourceValue::Integer(value)),
        }
    }

    /// A `DOUBLE` resource.
    pub fn double(name: impl Into<String>, value: f64) -> Self {
        Resource {
            name: Some(name.into()),
            value: Some(ResourceValue::Double(value)),
        }
    }

    /// A `LONG` resource.
    pub fn long(name: impl Into<String>, value: i64) -> Self {
        Resource {
            name: Some(name.into()),
            value: Some(ResourceValue::Long(value)),
        }
    }

    /// A `STRINGSET` resource, e.g. the set of reserved ports.
    pub fn string_set(name: impl Into<String>, values: Vec<String>) -> Self {
        Resource {
            name: Some(name.into()),
            value: Some(ResourceValue::StringSet(values)),
        }
    }
}

/// The typed value of a [`Resource`].
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceValue {
    Integer(i64),
    Double(f64),
    Long(i64),
    StringSet(Vec<String>),
}

impl ResourceValue {
    /// The wire-level type tag for this value.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            ResourceValue::Integer(_) => "INTEGER",
            ResourceValue::Double(_) => "DOUBLE",
            ResourceValue::Long(_) => "LONG",
            ResourceValue::StringSet(_) => "STRINGSET",
        }
    }
}

/// Parallel-field wire form of [`Resource`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    integer_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    double_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    long_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    string_set_value: Option<Vec<String>>,
}

impl TryFrom<ResourceWire> for Resource {
    type Error = String;

    fn try_from(wire: ResourceWire) -> Result<Self, Self::Error> {
        let value = match wire.resource_type.as_deref() {
            None => None,
            Some("INTEGER") => Some(ResourceValue::Integer(
                wire.integer_value
                    .ok_or("resource type INTEGER without integerValue")?,
            )),
            Some("DOUBLE") => Some(ResourceValue::Double(
                wire.double_value
                    .ok_or("resource type DOUBLE without doubleValue")?,
            )),
            Some("LONG") => Some(ResourceValue::Long(
                wire.long_value
                    .ok_or("resource type LONG without longValue")?,
            )),
            Some("STRINGSET") => Some(ResourceValue::StringSet(
                wire.string_set_value
                    .ok_or("resource type STRINGSET without stringSetValue")?,
            )),
            Some(other) => return Err(format!("unknown resource type tag: {other}")),
        };
        Ok(Resource {
            name: wire.name,
            value,
        })
    }
}

impl From<Resource> for ResourceWire {
    fn from(resource: Resource) -> Self {
        let mut wire = ResourceWire {
            name: resource.name,
            ..ResourceWire::default()
        };
        match resource.value {
            None => {}
            Some(ResourceValue::Integer(v)) => {
                wire.resource_type = Some("INTEGER".to_string());
                wire.integer_value = Some(v);
            }
            Some(ResourceValue::Double(v)) => {
                wire.resource_type = Some("DOUBLE".to_string());
                wire.double_value = Some(v);
            }
            Some(ResourceValue::Long(v)) => {
                wire.resource_type = Some("LONG".to_string());
                wire.long_value = Some(v);
            }
            Some(ResourceValue::StringSet(v)) => {
                wire.resource_type = Some("STRINGSET".to_string());
                wire.string_set_value = Some(v);
            }
        }
        wire
    }
}
