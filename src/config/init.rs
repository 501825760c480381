// ABOUTME: Config scaffolding for new snapshots.
// ABOUTME: Creates crilist.yml template files.

use std::path::Path;

use crate::error::{Error, Result};

use super::CONFIG_FILENAME;

const TEMPLATE: &str = r#"# Containers known to crilist. Status timestamps are RFC 3339.
containers:
  - id: web-1
    sandbox_id: pod-web
    metadata:
      name: web
      attempt: 0
    image: nginx:1.25
    image_ref: sha256:4c0fdaa8b6341bfdeca5f18f7837462c80cff90527ee35ef185571e1c327beac
    labels:
      app: web
      env: prod
    status:
      created_at: 2024-01-01T00:00:00Z
      started_at: 2024-01-01T00:00:02Z
      pid: 4242
"#;

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    std::fs::write(&config_path, TEMPLATE)?;
    tracing::debug!("wrote template config to {}", config_path.display());

    Ok(())
}
