//! Test support: a mock control plane and canned entity payloads
//!
//! Enabled with the `test-support` feature. [`MockControlPlane`] wraps a
//! wiremock server that answers operations by their target header, so tests
//! exercise the real HTTP transport; [`StubTransport`] swaps the transport out
//! entirely for tests that only care about what was dispatched. The fixture
//! builders produce response payloads in the wire shape the control plane uses.
//!
//! # Example
//!
//! ```rust,ignore
//! use fleet_api::testing::{ClusterFixture, MockControlPlane};
//!
//! let server = MockControlPlane::start().await;
//! server
//!     .respond(
//!         "DescribeClusters",
//!         serde_json::json!({"clusters": [ClusterFixture::new("default").build()]}),
//!     )
//!     .await;
//! let client = server.client();
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::FleetClient;
use crate::error::{FleetError, Result};
use crate::operation::Operation;
use crate::transport::{TARGET_HEADER, TARGET_PREFIX, Transport};

/// A wiremock server posing as the control plane endpoint.
///
/// Stubs are keyed by operation name, matched against the target header, so one
/// server can answer several operations in a single test.
pub struct MockControlPlane {
    server: MockServer,
}

impl MockControlPlane {
    /// Start a mock control plane on a random local port.
    pub async fn start() -> Self {
        MockControlPlane {
            server: MockServer::start().await,
        }
    }

    /// Base URL of the mock endpoint.
    #[must_use]
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// The underlying wiremock server, for request matchers this wrapper does
    /// not cover.
    #[must_use]
    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// A client wired to this server, with test credentials attached.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be constructed, which only happens when the
    /// server URI is malformed.
    #[must_use]
    pub fn client(&self) -> FleetClient {
        FleetClient::builder()
            .base_url(self.url())
            .api_key("test-key")
            .api_secret("test-secret")
            .build()
            .expect("mock server URI is a valid base URL")
    }

    /// Answer an operation with a 200 response carrying `body`.
    pub async fn respond(&self, operation: &str, body: Value) {
        self.mock_operation(operation, ResponseTemplate::new(200).set_body_json(body))
            .await;
    }

    /// Answer an operation with a fault response.
    ///
    /// The body uses the control plane fault shape, `{"code", "message"}`.
    pub async fn fail(&self, operation: &str, status: u16, code: &str, message: &str) {
        self.mock_operation(
            operation,
            ResponseTemplate::new(status).set_body_json(json!({
                "code": code,
                "message": message,
            })),
        )
        .await;
    }

    /// Answer an operation with an arbitrary response template.
    pub async fn mock_operation(&self, operation: &str, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/"))
            .and(header(TARGET_HEADER, format!("{TARGET_PREFIX}.{operation}")))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }
}

/// In-process [`Transport`] that records dispatches and plays back queued
/// replies.
///
/// Replies are consumed in order; once the queue is dry every dispatch returns
/// an empty object, which decodes into any all-optional output.
#[derive(Debug, Default)]
pub struct StubTransport {
    calls: Mutex<Vec<(String, Value)>>,
    replies: Mutex<VecDeque<Result<Value>>>,
}

impl StubTransport {
    #[must_use]
    pub fn new() -> Self {
        StubTransport::default()
    }

    /// Queue a successful reply.
    #[must_use]
    pub fn with_reply(self, body: Value) -> Self {
        self.push(Ok(body));
        self
    }

    /// Queue an error reply.
    #[must_use]
    pub fn with_error(self, error: FleetError) -> Self {
        self.push(Err(error));
        self
    }

    /// The `(operation name, request body)` pairs dispatched so far.
    #[must_use]
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().expect("stub transport lock").clone()
    }

    fn push(&self, reply: Result<Value>) {
        self.replies
            .lock()
            .expect("stub transport lock")
            .push_back(reply);
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn dispatch(&self, operation: &Operation, body: Value) -> Result<Value> {
        self.calls
            .lock()
            .expect("stub transport lock")
            .push((operation.name.to_string(), body));
        match self.replies.lock().expect("stub transport lock").pop_front() {
            Some(reply) => reply,
            None => Ok(Value::Object(serde_json::Map::new())),
        }
    }
}

/// A cluster payload in wire shape.
#[derive(Debug, Clone)]
pub struct ClusterFixture {
    name: String,
    status: String,
    running_tasks: i64,
    pending_tasks: i64,
    active_services: i64,
    container_instances: i64,
}

impl ClusterFixture {
    pub fn new(name: impl Into<String>) -> Self {
        ClusterFixture {
            name: name.into(),
            status: "ACTIVE".to_string(),
            running_tasks: 0,
            pending_tasks: 0,
            active_services: 0,
            container_instances: 0,
        }
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    #[must_use]
    pub fn running_tasks(mut self, count: i64) -> Self {
        self.running_tasks = count;
        self
    }

    #[must_use]
    pub fn pending_tasks(mut self, count: i64) -> Self {
        self.pending_tasks = count;
        self
    }

    #[must_use]
    pub fn active_services(mut self, count: i64) -> Self {
        self.active_services = count;
        self
    }

    #[must_use]
    pub fn container_instances(mut self, count: i64) -> Self {
        self.container_instances = count;
        self
    }

    #[must_use]
    pub fn build(self) -> Value {
        json!({
            "clusterName": self.name,
            "clusterArn": format!("arn:fleet:cluster/{}", self.name),
            "status": self.status,
            "runningTasksCount": self.running_tasks,
            "pendingTasksCount": self.pending_tasks,
            "activeServicesCount": self.active_services,
            "registeredContainerInstancesCount": self.container_instances,
        })
    }
}

/// A service payload in wire shape.
#[derive(Debug, Clone)]
pub struct ServiceFixture {
    name: String,
    cluster: String,
    status: String,
    task_definition: String,
    desired_count: i64,
    running_count: i64,
    pending_count: i64,
}

impl ServiceFixture {
    pub fn new(name: impl Into<String>) -> Self {
        ServiceFixture {
            name: name.into(),
            cluster: "default".to_string(),
            status: "ACTIVE".to_string(),
            task_definition: "arn:fleet:task-definition/web:1".to_string(),
            desired_count: 1,
            running_count: 1,
            pending_count: 0,
        }
    }

    #[must_use]
    pub fn cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = cluster.into();
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    #[must_use]
    pub fn task_definition(mut self, arn: impl Into<String>) -> Self {
        self.task_definition = arn.into();
        self
    }

    #[must_use]
    pub fn desired_count(mut self, count: i64) -> Self {
        self.desired_count = count;
        self
    }

    #[must_use]
    pub fn running_count(mut self, count: i64) -> Self {
        self.running_count = count;
        self
    }

    #[must_use]
    pub fn pending_count(mut self, count: i64) -> Self {
        self.pending_count = count;
        self
    }

    #[must_use]
    pub fn build(self) -> Value {
        json!({
            "serviceName": self.name,
            "serviceArn": format!("arn:fleet:service/{}", self.name),
            "clusterArn": format!("arn:fleet:cluster/{}", self.cluster),
            "status": self.status,
            "taskDefinition": self.task_definition,
            "desiredCount": self.desired_count,
            "runningCount": self.running_count,
            "pendingCount": self.pending_count,
        })
    }
}

/// A task payload in wire shape.
#[derive(Debug, Clone)]
pub struct TaskFixture {
    id: String,
    cluster: String,
    last_status: String,
    desired_status: String,
    task_definition: String,
    container_instance: Option<String>,
    started_by: Option<String>,
    containers: Vec<Value>,
}

impl TaskFixture {
    pub fn new(id: impl Into<String>) -> Self {
        TaskFixture {
            id: id.into(),
            cluster: "default".to_string(),
            last_status: "RUNNING".to_string(),
            desired_status: "RUNNING".to_string(),
            task_definition: "arn:fleet:task-definition/web:1".to_string(),
            container_instance: None,
            started_by: None,
            containers: Vec::new(),
        }
    }

    /// A task that has already stopped.
    pub fn stopped(id: impl Into<String>) -> Self {
        TaskFixture::new(id)
            .last_status("STOPPED")
            .desired_status("STOPPED")
    }

    #[must_use]
    pub fn cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = cluster.into();
        self
    }

    #[must_use]
    pub fn last_status(mut self, status: impl Into<String>) -> Self {
        self.last_status = status.into();
        self
    }

    #[must_use]
    pub fn desired_status(mut self, status: impl Into<String>) -> Self {
        self.desired_status = status.into();
        self
    }

    #[must_use]
    pub fn task_definition(mut self, arn: impl Into<String>) -> Self {
        self.task_definition = arn.into();
        self
    }

    #[must_use]
    pub fn container_instance(mut self, arn: impl Into<String>) -> Self {
        self.container_instance = Some(arn.into());
        self
    }

    #[must_use]
    pub fn started_by(mut self, starter: impl Into<String>) -> Self {
        self.started_by = Some(starter.into());
        self
    }

    /// Append a container with the task's own last status.
    #[must_use]
    pub fn container(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.containers.push(json!({
            "name": name,
            "containerArn": format!("arn:fleet:container/{}/{name}", self.id),
            "taskArn": format!("arn:fleet:task/{}", self.id),
            "lastStatus": self.last_status,
        }));
        self
    }

    #[must_use]
    pub fn build(self) -> Value {
        let mut task = json!({
            "taskArn": format!("arn:fleet:task/{}", self.id),
            "clusterArn": format!("arn:fleet:cluster/{}", self.cluster),
            "lastStatus": self.last_status,
            "desiredStatus": self.desired_status,
            "taskDefinitionArn": self.task_definition,
        });
        if let Some(arn) = self.container_instance {
            task["containerInstanceArn"] = json!(arn);
        }
        if let Some(starter) = self.started_by {
            task["startedBy"] = json!(starter);
        }
        if !self.containers.is_empty() {
            task["containers"] = json!(self.containers);
        }
        task
    }
}

/// A task definition payload in wire shape.
#[derive(Debug, Clone)]
pub struct TaskDefinitionFixture {
    family: String,
    revision: i64,
    containers: Vec<Value>,
}

impl TaskDefinitionFixture {
    pub fn new(family: impl Into<String>) -> Self {
        TaskDefinitionFixture {
            family: family.into(),
            revision: 1,
            containers: Vec::new(),
        }
    }

    #[must_use]
    pub fn revision(mut self, revision: i64) -> Self {
        self.revision = revision;
        self
    }

    /// Append an essential container definition.
    #[must_use]
    pub fn container(mut self, name: impl Into<String>, image: impl Into<String>) -> Self {
        self.containers.push(json!({
            "name": name.into(),
            "image": image.into(),
            "essential": true,
        }));
        self
    }

    #[must_use]
    pub fn build(self) -> Value {
        json!({
            "family": self.family,
            "revision": self.revision,
            "taskDefinitionArn": format!("arn:fleet:task-definition/{}:{}", self.family, self.revision),
            "containerDefinitions": self.containers,
        })
    }
}

/// A container instance payload in wire shape.
#[derive(Debug, Clone)]
pub struct ContainerInstanceFixture {
    id: String,
    status: String,
    agent_connected: bool,
    ec2_instance_id: Option<String>,
    running_tasks: i64,
    pending_tasks: i64,
    cpu: i64,
    memory: i64,
}

impl ContainerInstanceFixture {
    pub fn new(id: impl Into<String>) -> Self {
        ContainerInstanceFixture {
            id: id.into(),
            status: "ACTIVE".to_string(),
            agent_connected: true,
            ec2_instance_id: None,
            running_tasks: 0,
            pending_tasks: 0,
            cpu: 1024,
            memory: 3768,
        }
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    #[must_use]
    pub fn agent_connected(mut self, connected: bool) -> Self {
        self.agent_connected = connected;
        self
    }

    #[must_use]
    pub fn ec2_instance_id(mut self, id: impl Into<String>) -> Self {
        self.ec2_instance_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn running_tasks(mut self, count: i64) -> Self {
        self.running_tasks = count;
        self
    }

    #[must_use]
    pub fn pending_tasks(mut self, count: i64) -> Self {
        self.pending_tasks = count;
        self
    }

    /// Registered CPU units and memory for the host. Remaining resources mirror
    /// the registered ones in the built payload.
    #[must_use]
    pub fn resources(mut self, cpu: i64, memory: i64) -> Self {
        self.cpu = cpu;
        self.memory = memory;
        self
    }

    #[must_use]
    pub fn build(self) -> Value {
        let resources = json!([
            {"name": "CPU", "type": "INTEGER", "integerValue": self.cpu},
            {"name": "MEMORY", "type": "INTEGER", "integerValue": self.memory},
        ]);
        let mut instance = json!({
            "containerInstanceArn": format!("arn:fleet:container-instance/{}", self.id),
            "status": self.status,
            "agentConnected": self.agent_connected,
            "runningTasksCount": self.running_tasks,
            "pendingTasksCount": self.pending_tasks,
            "registeredResources": resources,
            "remainingResources": resources,
        });
        if let Some(id) = self.ec2_instance_id {
            instance["ec2InstanceId"] = json!(id);
        }
        instance
    }
}

/// A batch failure entry in wire shape.
#[must_use]
pub fn failure(arn: &str, reason: &str) -> Value {
    json!({"arn": arn, "reason": reason})
}
