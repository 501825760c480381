// ABOUTME: Container status and its lock-guarded storage cell.
// ABOUTME: Reads and writes always cover the whole Status so no field pairing can tear.

use crate::cri::ContainerState;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Deserialize;
use std::sync::Arc;

/// Lifecycle facts recorded for a container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Status {
    /// Init process ID, 0 when not running.
    pub pid: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub exit_code: i32,
    /// Short machine-readable reason for the last transition.
    pub reason: String,
    /// Human-readable detail for the last transition.
    pub message: String,
}

impl Status {
    /// Status of a freshly created container.
    pub fn created(at: DateTime<Utc>) -> Self {
        Self {
            created_at: Some(at),
            ..Default::default()
        }
    }

    /// Derive the lifecycle state from the recorded timestamps.
    ///
    /// The latest recorded transition wins: finished, then started, then created.
    pub fn state(&self) -> ContainerState {
        if self.finished_at.is_some() {
            ContainerState::Exited
        } else if self.started_at.is_some() {
            ContainerState::Running
        } else if self.created_at.is_some() {
            ContainerState::Created
        } else {
            ContainerState::Unknown
        }
    }
}

/// Shared cell holding a container's mutable status.
///
/// Clones share the same underlying status.
#[derive(Debug, Clone, Default)]
pub struct StatusStorage {
    inner: Arc<RwLock<Status>>,
}

impl StatusStorage {
    pub fn new(status: Status) -> Self {
        Self {
            inner: Arc::new(RwLock::new(status)),
        }
    }

    /// Consistent copy of the current status.
    pub fn get(&self) -> Status {
        self.inner.read().clone()
    }

    /// Apply `f` to a copy of the status and store the result.
    ///
    /// The write lock is held for the whole call, so concurrent readers see
    /// either the old status or the new one. If `f` fails the stored status is
    /// left untouched.
    pub fn update<F, E>(&self, f: F) -> Result<Status, E>
    where
        F: FnOnce(Status) -> Result<Status, E>,
    {
        let mut guard = self.inner.write();
        let updated = f(guard.clone())?;
        *guard = updated.clone();
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn default_status_is_unknown() {
        assert_eq!(Status::default().state(), ContainerState::Unknown);
    }

    #[test]
    fn state_follows_latest_transition() {
        let mut status = Status::created(ts(10));
        assert_eq!(status.state(), ContainerState::Created);

        status.started_at = Some(ts(11));
        status.pid = 42;
        assert_eq!(status.state(), ContainerState::Running);

        status.finished_at = Some(ts(12));
        assert_eq!(status.state(), ContainerState::Exited);
    }

    #[test]
    fn update_is_visible_to_clones() {
        let storage = StatusStorage::new(Status::created(ts(1)));
        let shared = storage.clone();

        storage
            .update(|mut s| {
                s.started_at = Some(ts(2));
                Ok::<_, ()>(s)
            })
            .unwrap();

        assert_eq!(shared.get().state(), ContainerState::Running);
    }

    #[test]
    fn failed_update_leaves_status_unchanged() {
        let storage = StatusStorage::new(Status::created(ts(1)));

        let result = storage.update(|mut s| {
            s.finished_at = Some(ts(3));
            Err::<Status, _>("rejected")
        });

        assert_eq!(result, Err("rejected"));
        assert_eq!(storage.get(), Status::created(ts(1)));
    }
}
