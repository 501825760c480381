// ABOUTME: Configuration types and parsing for crilist.yml.
// ABOUTME: Describes a container snapshot and loads it into a store.

mod entry;
mod init;
mod selector;

pub use entry::ContainerEntry;
pub use init::init_config;
pub use selector::{parse_label, parse_label_selector};

use crate::error::{Error, Result};
use crate::store::MemoryStore;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "crilist.yml";
pub const CONFIG_FILENAME_ALT: &str = "crilist.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".crilist/config.yml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub containers: Vec<ContainerEntry>,
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!("loading config from {}", path.display());
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.containers {
            if entry.id.as_str().is_empty() {
                return Err(Error::InvalidConfig("container id cannot be empty".to_string()));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate container id: {}",
                    entry.id
                )));
            }
        }
        Ok(())
    }

    /// Add every configured container to `store`.
    pub fn populate(&self, store: &MemoryStore) -> Result<()> {
        for entry in &self.containers {
            store.add(entry.to_record())?;
        }
        Ok(())
    }

    /// Build a fresh store holding the configured containers.
    pub fn into_store(self) -> Result<MemoryStore> {
        let store = MemoryStore::new();
        self.populate(&store)?;
        Ok(store)
    }
}
