// ABOUTME: In-memory container store backed by a lock-guarded map.
// ABOUTME: Lists containers in insertion order as a point-in-time snapshot.

use super::container::Container;
use super::error::{AlreadyExistsSnafu, NotFoundSnafu, StoreError};
use super::ContainerStore;
use crate::types::ContainerId;
use parking_lot::RwLock;
use snafu::{OptionExt, ensure};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    order: Vec<ContainerId>,
    containers: HashMap<ContainerId, Container>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a container. IDs must be unique within the store.
    pub fn add(&self, container: Container) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        let id = container.id().clone();
        ensure!(
            !inner.containers.contains_key(&id),
            AlreadyExistsSnafu { id }
        );

        tracing::debug!(container = %id, "adding container to store");
        inner.order.push(id.clone());
        inner.containers.insert(id, container);
        Ok(())
    }

    pub fn get(&self, id: &ContainerId) -> Result<Container, StoreError> {
        self.inner
            .read()
            .containers
            .get(id)
            .cloned()
            .context(NotFoundSnafu { id: id.clone() })
    }

    /// Remove a container. Unknown IDs are ignored.
    pub fn delete(&self, id: &ContainerId) {
        let mut inner = self.inner.write();
        if inner.containers.remove(id).is_some() {
            tracing::debug!(container = %id, "removed container from store");
            inner.order.retain(|existing| existing != id);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ContainerStore for MemoryStore {
    fn list(&self) -> Vec<Container> {
        let inner = self.inner.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.containers.get(id).cloned())
            .collect()
    }
}
