// ABOUTME: Output formatting for listed containers.
// ABOUTME: Supports a human table, quiet (IDs only), and JSON lines.

use crate::cri::Container;
use crate::error::Result;

/// Output mode for CLI results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Aligned table with a header row
    #[default]
    Normal,
    /// One container ID per line, for scripting
    Quiet,
    /// One JSON object per container
    Json,
}

/// Renders container listings in the configured mode.
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    pub fn render(&self, containers: &[Container]) -> Result<String> {
        let lines: Vec<String> = match self.mode {
            OutputMode::Normal => std::iter::once(format!(
                "{:<16} {:<16} {:<16} {:<8} {:<20} IMAGE",
                "CONTAINER", "POD", "NAME", "STATE", "CREATED"
            ))
            .chain(containers.iter().map(table_row))
            .collect(),
            OutputMode::Quiet => containers.iter().map(|c| c.id.clone()).collect(),
            OutputMode::Json => containers
                .iter()
                .map(serde_json::to_string)
                .collect::<std::result::Result<Vec<_>, _>>()?,
        };

        Ok(lines.into_iter().map(|line| line + "\n").collect())
    }

    /// Print the listing to stdout.
    pub fn print(&self, containers: &[Container]) -> Result<()> {
        print!("{}", self.render(containers)?);
        Ok(())
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => eprintln!("Error: {message}"),
            OutputMode::Json => {
                let event = serde_json::json!({ "event": "error", "message": message });
                eprintln!("{event}");
            }
        }
    }
}

fn table_row(c: &Container) -> String {
    let created = c
        .created_at
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:<16} {:<16} {:<16} {:<8} {:<20} {}",
        c.id, c.pod_sandbox_id, c.metadata.name, c.state, created, c.image.image
    )
}
