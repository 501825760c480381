// ABOUTME: Test support utilities.
// ABOUTME: Tracing setup plus builders for store records and container views.

use chrono::{DateTime, TimeZone, Utc};
use crilist::cri::{self, ContainerMetadata, ContainerState, ImageSpec};
use crilist::store::{Container, ContainerConfig, Status};
use crilist::types::{ContainerId, SandboxId};
use std::collections::HashMap;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env().add_directive("crilist=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

#[allow(dead_code)]
pub fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

#[allow(dead_code)]
pub fn labels(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Store record with a config, created at `ts(1)`.
#[allow(dead_code)]
pub fn record(id: &str, sandbox: &str, pairs: &[(&str, &str)]) -> Container {
    Container::new(
        ContainerId::new(id),
        SandboxId::new(sandbox),
        Some(ContainerConfig {
            metadata: ContainerMetadata {
                name: format!("{id}-name"),
                attempt: 0,
            },
            image: ImageSpec {
                image: "busybox:1.36".to_string(),
            },
            labels: labels(pairs),
            annotations: HashMap::new(),
        }),
        format!("sha256:{id}"),
        Status::created(ts(1)),
    )
}

/// External view with the given identity, state and labels.
#[allow(dead_code)]
pub fn view(id: &str, sandbox: &str, state: ContainerState, pairs: &[(&str, &str)]) -> cri::Container {
    cri::Container {
        id: id.to_string(),
        pod_sandbox_id: sandbox.to_string(),
        metadata: ContainerMetadata::default(),
        image: ImageSpec::default(),
        image_ref: String::new(),
        state,
        created_at: None,
        labels: labels(pairs),
        annotations: HashMap::new(),
    }
}
