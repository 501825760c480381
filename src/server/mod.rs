// ABOUTME: Container listing service over an injected container store.
// ABOUTME: Snapshots the store once, projects each record, then filters.

mod convert;
mod filter;

pub use convert::to_cri_container;
pub use filter::{filter_containers, matches};

use crate::cri::{Container, ListContainersRequest, ListContainersResponse};
use crate::store::ContainerStore;

/// Answers list requests from a container store.
#[derive(Debug, Clone)]
pub struct ContainerService<S> {
    store: S,
}

impl<S: ContainerStore> ContainerService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// List all containers matching the request filter.
    ///
    /// Reads the store exactly once; records added or removed afterwards are
    /// not reflected in the response.
    pub fn list_containers(&self, request: &ListContainersRequest) -> ListContainersResponse {
        tracing::debug!(filter = ?request.filter, "ListContainers");

        let containers: Vec<Container> = self.store.list().iter().map(to_cri_container).collect();
        let containers = filter_containers(containers, request.filter.as_ref());

        tracing::debug!(count = containers.len(), "ListContainers returns containers");
        ListContainersResponse { containers }
    }
}
