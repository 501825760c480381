// ABOUTME: Type-safe identifiers shared by the store and the service layer.
// ABOUTME: Uses phantom types to prevent ID confusion at compile time.

mod id;

pub use id::{ContainerId, Id, SandboxId};
