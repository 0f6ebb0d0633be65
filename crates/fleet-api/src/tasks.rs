//! Task operations
//!
//! RunTask lets the control plane pick placement; StartTask targets specific
//! container instances. Both are batch calls and report per-item failures as
//! data alongside the tasks that did start.

use serde::{Deserialize, Serialize};

use crate::client::FleetClient;
use crate::error::Result;
use crate::operation::OperationKind;
use crate::request::{ApiInput, ApiRequest};
use crate::types::{Failure, Task, TaskOverride};

/// Input for [`FleetClient::run_task`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunTaskInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Number of copies to launch; 1 when absent, capped at 10 per call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    /// Per-container command overrides for the launched tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<TaskOverride>,
    /// Tag recorded as the task's `started_by`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_by: Option<String>,
    /// Family, `family:revision`, or ARN of the definition to run (required).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<String>,
}

impl ApiInput for RunTaskInput {
    fn missing_field(&self) -> Option<&'static str> {
        if self.task_definition.is_none() {
            return Some("taskDefinition");
        }
        None
    }
}

/// Output of [`FleetClient::run_task`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunTaskOutput {
    /// Copies that could not be placed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<Failure>>,
    /// Tasks that were placed and are starting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
}

/// Input for [`FleetClient::start_task`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTaskInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// ARNs of the container instances to start the task on (required).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instances: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<TaskOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_by: Option<String>,
    /// Definition to start (required).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<String>,
}

impl ApiInput for StartTaskInput {
    fn missing_field(&self) -> Option<&'static str> {
        if self.container_instances.is_none() {
            return Some("containerInstances");
        }
        if self.task_definition.is_none() {
            return Some("taskDefinition");
        }
        None
    }
}

/// Output of [`FleetClient::start_task`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTaskOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<Failure>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
}

/// Input for [`FleetClient::stop_task`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTaskInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// ID or ARN of the task to stop (required).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
}

impl ApiInput for StopTaskInput {
    fn missing_field(&self) -> Option<&'static str> {
        if self.task.is_none() {
            return Some("task");
        }
        None
    }
}

/// Output of [`FleetClient::stop_task`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTaskOutput {
    /// The task, now being driven to `STOPPED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
}

/// Input for [`FleetClient::describe_tasks`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeTasksInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// IDs or ARNs of the tasks to describe (required).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<String>>,
}

impl ApiInput for DescribeTasksInput {
    fn missing_field(&self) -> Option<&'static str> {
        if self.tasks.is_none() {
            return Some("tasks");
        }
        None
    }
}

/// Output of [`FleetClient::describe_tasks`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeTasksOutput {
    /// Tasks that could not be described.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<Failure>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
}

/// Input for [`FleetClient::list_tasks`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Only tasks on this container instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instance: Option<String>,
    /// Only tasks being driven to this status, e.g. `RUNNING`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_status: Option<String>,
    /// Only tasks from this task definition family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Only tasks belonging to this service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// Only tasks with this `started_by` tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_by: Option<String>,
}

impl ApiInput for ListTasksInput {}

/// Output of [`FleetClient::list_tasks`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_arns: Option<Vec<String>>,
}

impl FleetClient {
    /// Launch tasks from a task definition, letting the control plane pick
    /// the container instances. Placement failures come back in `failures`.
    pub async fn run_task(&self, input: RunTaskInput) -> Result<RunTaskOutput> {
        self.run_task_request(input).send().await
    }

    /// Build a RunTask request without sending it.
    #[must_use]
    pub fn run_task_request(
        &self,
        input: RunTaskInput,
    ) -> ApiRequest<RunTaskInput, RunTaskOutput> {
        ApiRequest::new(self.clone(), OperationKind::RunTask, input)
    }

    /// Start a task on specific container instances (up to 10 per call).
    pub async fn start_task(&self, input: StartTaskInput) -> Result<StartTaskOutput> {
        self.start_task_request(input).send().await
    }

    /// Build a StartTask request without sending it.
    #[must_use]
    pub fn start_task_request(
        &self,
        input: StartTaskInput,
    ) -> ApiRequest<StartTaskInput, StartTaskOutput> {
        ApiRequest::new(self.clone(), OperationKind::StartTask, input)
    }

    /// Stop a running task.
    pub async fn stop_task(&self, input: StopTaskInput) -> Result<StopTaskOutput> {
        self.stop_task_request(input).send().await
    }

    /// Build a StopTask request without sending it.
    #[must_use]
    pub fn stop_task_request(
        &self,
        input: StopTaskInput,
    ) -> ApiRequest<StopTaskInput, StopTaskOutput> {
        ApiRequest::new(self.clone(), OperationKind::StopTask, input)
    }

    /// Describe tasks, including per-container state. Unknown tasks come back
    /// in `failures`, not as an error.
    pub async fn describe_tasks(&self, input: DescribeTasksInput) -> Result<DescribeTasksOutput> {
        self.describe_tasks_request(input).send().await
    }

    /// Build a DescribeTasks request without sending it.
    #[must_use]
    pub fn describe_tasks_request(
        &self,
        input: DescribeTasksInput,
    ) -> ApiRequest<DescribeTasksInput, DescribeTasksOutput> {
        ApiRequest::new(self.clone(), OperationKind::DescribeTasks, input)
    }

    /// List task ARNs matching the given filters, one page per call.
    pub async fn list_tasks(&self, input: ListTasksInput) -> Result<ListTasksOutput> {
        self.list_tasks_request(input).send().await
    }

    /// Build a ListTasks request without sending it.
    #[must_use]
    pub fn list_tasks_request(
        &self,
        input: ListTasksInput,
    ) -> ApiRequest<ListTasksInput, ListTasksOutput> {
        ApiRequest::new(self.clone(), OperationKind::ListTasks, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContainerOverride;
    use serde_json::json;

    #[test]
    fn test_run_task_requires_task_definition() {
        assert_eq!(
            RunTaskInput::default().missing_field(),
            Some("taskDefinition")
        );
    }

    #[test]
    fn test_start_task_reports_instances_before_definition() {
        let mut input = StartTaskInput::default();
        assert_eq!(input.missing_field(), Some("containerInstances"));

        input.container_instances = Some(vec!["arn:fleet:container-instance/1".to_string()]);
        assert_eq!(input.missing_field(), Some("taskDefinition"));
    }

    #[test]
    fn test_run_task_input_wire_shape() {
        let input = RunTaskInput {
            cluster: Some("default".to_string()),
            task_definition: Some("web:7".to_string()),
            count: Some(2),
            started_by: Some("deploy-bot".to_string()),
            overrides: Some(TaskOverride {
                container_overrides: Some(vec![ContainerOverride {
                    name: Some("web".to_string()),
                    command: Some(vec!["serve".to_string(), "--debug".to_string()]),
                }]),
            }),
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "cluster": "default",
                "taskDefinition": "web:7",
                "count": 2,
                "startedBy": "deploy-bot",
                "overrides": {
                    "containerOverrides": [{"name": "web", "command": ["serve", "--debug"]}]
                }
            })
        );
    }

    #[test]
    fn test_list_tasks_filters_are_all_optional() {
        assert_eq!(ListTasksInput::default().missing_field(), None);
        assert_eq!(
            serde_json::to_value(ListTasksInput::default()).unwrap(),
            json!({})
        );
    }
}
