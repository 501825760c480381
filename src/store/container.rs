// ABOUTME: Internal container record owned by the container store.
// ABOUTME: Immutable identity and config plus a shared, mutable status cell.

use super::status::{Status, StatusStorage};
use crate::cri::{ContainerMetadata, ImageSpec};
use crate::types::{ContainerId, SandboxId};
use std::collections::HashMap;
use std::sync::Arc;

/// Creation-time configuration of a container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerConfig {
    pub metadata: ContainerMetadata,
    pub image: ImageSpec,
    pub labels: HashMap<String, String>,
    pub annotations: HashMap<String, String>,
}

/// A container as tracked by the store.
///
/// Everything except the status is fixed at construction. Clones are cheap and
/// share both the config and the status cell.
#[derive(Debug, Clone)]
pub struct Container {
    id: ContainerId,
    sandbox_id: SandboxId,
    config: Option<Arc<ContainerConfig>>,
    image_ref: String,
    status: StatusStorage,
}

impl Container {
    pub fn new(
        id: ContainerId,
        sandbox_id: SandboxId,
        config: Option<ContainerConfig>,
        image_ref: impl Into<String>,
        status: Status,
    ) -> Self {
        Self {
            id,
            sandbox_id,
            config: config.map(Arc::new),
            image_ref: image_ref.into(),
            status: StatusStorage::new(status),
        }
    }

    pub fn id(&self) -> &ContainerId {
        &self.id
    }

    pub fn sandbox_id(&self) -> &SandboxId {
        &self.sandbox_id
    }

    /// `None` for records whose config was never recorded.
    pub fn config(&self) -> Option<&ContainerConfig> {
        self.config.as_deref()
    }

    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub fn status(&self) -> &StatusStorage {
        &self.status
    }
}
