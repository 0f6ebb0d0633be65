//! Operation descriptors and the per-client registry
//!
//! Every remote operation is identified by an immutable descriptor: its wire name,
//! HTTP method, and HTTP path. The control plane is RPC-over-HTTP, so the method is
//! always POST and the path is always `/`; the operation is selected by a target
//! header the transport derives from the descriptor name.
//!
//! Descriptors live in an [`OperationRegistry`] built once when the client is
//! constructed. After construction the registry is read-only, so lookups are plain
//! shared reads and the returned references are pointer-stable for the lifetime of
//! the client.

/// Identifies one of the control plane's remote operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    CreateCluster,
    CreateService,
    DeleteCluster,
    DeleteService,
    DeregisterContainerInstance,
    DeregisterTaskDefinition,
    DescribeClusters,
    DescribeContainerInstances,
    DescribeServices,
    DescribeTaskDefinition,
    DescribeTasks,
    DiscoverPollEndpoint,
    ListClusters,
    ListContainerInstances,
    ListServices,
    ListTaskDefinitionFamilies,
    ListTaskDefinitions,
    ListTasks,
    RegisterContainerInstance,
    RegisterTaskDefinition,
    RunTask,
    StartTask,
    StopTask,
    SubmitContainerStateChange,
    SubmitTaskStateChange,
    UpdateContainerAgent,
    UpdateService,
}

impl OperationKind {
    /// Every operation, in declaration order. The registry is indexed by the enum
    /// discriminant, so this array must stay in the same order as the variants.
    pub const ALL: [OperationKind; 27] = [
        OperationKind::CreateCluster,
        OperationKind::CreateService,
        OperationKind::DeleteCluster,
        OperationKind::DeleteService,
        OperationKind::DeregisterContainerInstance,
        OperationKind::DeregisterTaskDefinition,
        OperationKind::DescribeClusters,
        OperationKind::DescribeContainerInstances,
        OperationKind::DescribeServices,
        OperationKind::DescribeTaskDefinition,
        OperationKind::DescribeTasks,
        OperationKind::DiscoverPollEndpoint,
        OperationKind::ListClusters,
        OperationKind::ListContainerInstances,
        OperationKind::ListServices,
        OperationKind::ListTaskDefinitionFamilies,
        OperationKind::ListTaskDefinitions,
        OperationKind::ListTasks,
        OperationKind::RegisterContainerInstance,
        OperationKind::RegisterTaskDefinition,
        OperationKind::RunTask,
        OperationKind::StartTask,
        OperationKind::StopTask,
        OperationKind::SubmitContainerStateChange,
        OperationKind::SubmitTaskStateChange,
        OperationKind::UpdateContainerAgent,
        OperationKind::UpdateService,
    ];

    /// Wire-level operation name, as carried in the target header.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            OperationKind::CreateCluster => "CreateCluster",
            OperationKind::CreateService => "CreateService",
            OperationKind::DeleteCluster => "DeleteCluster",
            OperationKind::DeleteService => "DeleteService",
            OperationKind::DeregisterContainerInstance => "DeregisterContainerInstance",
            OperationKind::DeregisterTaskDefinition => "DeregisterTaskDefinition",
            OperationKind::DescribeClusters => "DescribeClusters",
            OperationKind::DescribeContainerInstances => "DescribeContainerInstances",
            OperationKind::DescribeServices => "DescribeServices",
            OperationKind::DescribeTaskDefinition => "DescribeTaskDefinition",
            OperationKind::DescribeTasks => "DescribeTasks",
            OperationKind::DiscoverPollEndpoint => "DiscoverPollEndpoint",
            OperationKind::ListClusters => "ListClusters",
            OperationKind::ListContainerInstances => "ListContainerInstances",
            OperationKind::ListServices => "ListServices",
            OperationKind::ListTaskDefinitionFamilies => "ListTaskDefinitionFamilies",
            OperationKind::ListTaskDefinitions => "ListTaskDefinitions",
            OperationKind::ListTasks => "ListTasks",
            OperationKind::RegisterContainerInstance => "RegisterContainerInstance",
            OperationKind::RegisterTaskDefinition => "RegisterTaskDefinition",
            OperationKind::RunTask => "RunTask",
            OperationKind::StartTask => "StartTask",
            OperationKind::StopTask => "StopTask",
            OperationKind::SubmitContainerStateChange => "SubmitContainerStateChange",
            OperationKind::SubmitTaskStateChange => "SubmitTaskStateChange",
            OperationKind::UpdateContainerAgent => "UpdateContainerAgent",
            OperationKind::UpdateService => "UpdateService",
        }
    }

    /// Whether the control plane is known to accept this operation everywhere.
    #[must_use]
    pub const fn availability(self) -> Availability {
        match self {
            OperationKind::DeregisterTaskDefinition => Availability::Unverified,
            _ => Availability::Stable,
        }
    }
}

/// Deployment availability of an operation.
///
/// The upstream API documents a few operations it does not yet accept in every
/// region. The flag is informational: requests for `Unverified` operations are
/// built and dispatched exactly like any other, and the control plane answers
/// with a service fault where unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Accepted by all deployments.
    Stable,
    /// Documented upstream but not verified to be accepted everywhere.
    Unverified,
}

/// Immutable descriptor for one remote operation.
#[derive(Debug)]
pub struct Operation {
    /// Which operation this descriptor identifies.
    pub kind: OperationKind,
    /// Wire-level name used in the target header.
    pub name: &'static str,
    /// HTTP method; the control plane is RPC-style, so always `POST`.
    pub http_method: &'static str,
    /// HTTP path relative to the base URL; always `/`.
    pub http_path: &'static str,
    /// Deployment availability.
    pub availability: Availability,
}

impl Operation {
    fn new(kind: OperationKind) -> Self {
        Operation {
            kind,
            name: kind.name(),
            http_method: "POST",
            http_path: "/",
            availability: kind.availability(),
        }
    }
}

/// Registry of every operation descriptor, owned by the client.
///
/// Built once at client construction and never mutated afterwards. `get` is a
/// lock-free indexed read; the reference it returns stays valid and
/// pointer-identical for as long as the owning client lives.
#[derive(Debug)]
pub struct OperationRegistry {
    // Indexed by OperationKind discriminant; same order as OperationKind::ALL.
    ops: Vec<Operation>,
}

impl OperationRegistry {
    pub(crate) fn new() -> Self {
        let ops = OperationKind::ALL.iter().map(|&k| Operation::new(k)).collect();
        OperationRegistry { ops }
    }

    /// Descriptor for the given operation.
    #[must_use]
    pub fn get(&self, kind: OperationKind) -> &Operation {
        &self.ops[kind as usize]
    }

    /// Iterates over all descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.ops.iter()
    }

    /// Number of registered operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Always false; the registry is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_covers_every_operation() {
        let registry = OperationRegistry::new();
        assert_eq!(registry.len(), OperationKind::ALL.len());
        for kind in OperationKind::ALL {
            let op = registry.get(kind);
            assert_eq!(op.kind, kind);
            assert_eq!(op.name, kind.name());
            assert_eq!(op.http_method, "POST");
            assert_eq!(op.http_path, "/");
        }
    }

    #[test]
    fn test_operation_names_unique() {
        let names: HashSet<&str> = OperationKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), OperationKind::ALL.len());
    }

    #[test]
    fn test_get_returns_stable_references() {
        let registry = OperationRegistry::new();
        let a = registry.get(OperationKind::RunTask);
        let b = registry.get(OperationKind::RunTask);
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_deregister_task_definition_is_unverified() {
        let registry = OperationRegistry::new();
        assert_eq!(
            registry.get(OperationKind::DeregisterTaskDefinition).availability,
            Availability::Unverified
        );
        assert_eq!(
            registry.get(OperationKind::DeleteCluster).availability,
            Availability::Stable
        );
    }
}
