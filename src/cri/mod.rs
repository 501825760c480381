// ABOUTME: Externally visible container types returned by the list service.
// ABOUTME: Container views, filters, and request/response envelopes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lifecycle state of a container as seen by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerState {
    Created,
    Running,
    Exited,
    Unknown,
}

impl std::fmt::Display for ContainerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ContainerState::Created => "created",
            ContainerState::Running => "running",
            ContainerState::Exited => "exited",
            ContainerState::Unknown => "unknown",
        };
        f.pad(name)
    }
}

/// Name and restart attempt of a container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub attempt: u32,
}

/// Image the container was requested with, as the caller spelled it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageSpec {
    pub image: String,
}

/// Point-in-time view of a container.
///
/// Owns all of its data; later changes to the store record are not reflected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Container {
    pub id: String,
    pub pod_sandbox_id: String,
    pub metadata: ContainerMetadata,
    pub image: ImageSpec,
    pub image_ref: String,
    pub state: ContainerState,
    pub created_at: Option<DateTime<Utc>>,
    pub labels: HashMap<String, String>,
    pub annotations: HashMap<String, String>,
}

/// Optional predicates combined with AND. Unset fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerFilter {
    pub id: Option<String>,
    pub pod_sandbox_id: Option<String>,
    pub state: Option<ContainerState>,
    /// Every pair must be present in the container's labels.
    pub label_selector: HashMap<String, String>,
}

impl ContainerFilter {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn pod_sandbox_id(mut self, id: impl Into<String>) -> Self {
        self.pod_sandbox_id = Some(id.into());
        self
    }

    pub fn state(mut self, state: ContainerState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.label_selector.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListContainersRequest {
    pub filter: Option<ContainerFilter>,
}

impl ListContainersRequest {
    pub fn new(filter: ContainerFilter) -> Self {
        Self {
            filter: Some(filter),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListContainersResponse {
    pub containers: Vec<Container>,
}
