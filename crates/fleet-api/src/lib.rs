//! # fleet-api
//!
//! Client for the Fleet container orchestration control plane API.
//!
//! The control plane exposes a single RPC-style endpoint: every operation is a
//! `POST /` with the operation selected by the `x-fleet-target` header. This
//! crate wraps that wire protocol in typed inputs and outputs, grouped into
//! modules by resource: [`clusters`], [`services`], [`task_definitions`],
//! [`tasks`], [`container_instances`], and the agent-facing calls in [`agent`].
//!
//! Each operation comes in two forms: an async method on [`FleetClient`] that
//! sends immediately, and a `*_request` builder returning an [`ApiRequest`]
//! that can be inspected before [`ApiRequest::send`]. Building a request never
//! touches the network.
//!
//! # Quick start
//!
//! ```no_run
//! use fleet_api::FleetClient;
//! use fleet_api::tasks::RunTaskInput;
//!
//! # async fn run() -> fleet_api::Result<()> {
//! let client = FleetClient::builder()
//!     .base_url("https://control-plane.fleet.example.com")
//!     .api_key("key")
//!     .api_secret("secret")
//!     .build()?;
//!
//! let output = client
//!     .run_task(RunTaskInput {
//!         task_definition: Some("web:7".to_string()),
//!         count: Some(2),
//!         ..RunTaskInput::default()
//!     })
//!     .await?;
//! for task in output.tasks.unwrap_or_default() {
//!     println!("started {:?}", task.task_arn);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Everything returns [`Result`]. Control plane faults map onto typed
//! [`FleetError`] variants with `is_*` predicates; batch describe/start/run
//! operations report per-item problems through `failures` fields on their
//! outputs instead of failing the call.
//!
//! # Test support
//!
//! The `test-support` feature adds the [`testing`] module: a wiremock-backed
//! mock control plane, an in-process stub transport, and fixture builders for
//! response payloads.

pub mod agent;
mod client;
pub mod clusters;
pub mod container_instances;
pub mod error;
mod operation;
mod request;
pub mod services;
pub mod task_definitions;
pub mod tasks;
#[cfg(feature = "test-support")]
pub mod testing;
pub mod transport;
pub mod types;

pub use client::{FleetClient, FleetClientBuilder, USER_AGENT};
pub use error::{FleetError, Result};
pub use operation::{Availability, Operation, OperationKind, OperationRegistry};
pub use request::{ApiInput, ApiRequest};
pub use transport::{HttpTransport, Transport};
