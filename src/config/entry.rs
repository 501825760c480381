// ABOUTME: Container snapshot entries as written in crilist.yml.
// ABOUTME: Converts each entry into a store record.

use crate::cri::{ContainerMetadata, ImageSpec};
use crate::store::{Container, ContainerConfig, Status};
use crate::types::{ContainerId, SandboxId};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct ContainerEntry {
    pub id: ContainerId,

    pub sandbox_id: SandboxId,

    #[serde(default)]
    pub metadata: ContainerMetadata,

    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub image_ref: String,

    #[serde(default)]
    pub labels: HashMap<String, String>,

    #[serde(default)]
    pub annotations: HashMap<String, String>,

    /// Record the container without any config.
    #[serde(default)]
    pub bare: bool,

    #[serde(default)]
    pub status: Status,
}

impl ContainerEntry {
    pub fn to_record(&self) -> Container {
        let config = (!self.bare).then(|| ContainerConfig {
            metadata: self.metadata.clone(),
            image: ImageSpec {
                image: self.image.clone(),
            },
            labels: self.labels.clone(),
            annotations: self.annotations.clone(),
        });

        Container::new(
            self.id.clone(),
            self.sandbox_id.clone(),
            config,
            self.image_ref.clone(),
            self.status.clone(),
        )
    }
}
