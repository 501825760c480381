// ABOUTME: Container store: internal records, status cells, and the read interface.
// ABOUTME: The list service only depends on the ContainerStore trait.

mod container;
mod error;
mod memory;
mod status;

pub use container::{Container, ContainerConfig};
pub use error::{StoreError, StoreErrorKind};
pub use memory::MemoryStore;
pub use status::{Status, StatusStorage};

use std::sync::Arc;

/// Read access to the set of known containers.
pub trait ContainerStore: Send + Sync {
    /// Point-in-time snapshot of every container. May be empty.
    fn list(&self) -> Vec<Container>;
}

impl<S: ContainerStore + ?Sized> ContainerStore for Arc<S> {
    fn list(&self) -> Vec<Container> {
        (**self).list()
    }
}

impl<S: ContainerStore + ?Sized> ContainerStore for &S {
    fn list(&self) -> Vec<Container> {
        (**self).list()
    }
}
