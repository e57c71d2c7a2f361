//! Project configuration (`.padrc`).
//!
//! ```toml
//! context_dir = ".context"
//! scratchpad_encrypt = true
//! ```
//!
//! Every key is optional; a missing file means defaults.

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectConfig {
    /// Context directory relative to the project root.
    pub context_dir: Option<String>,
    /// Whether the scratchpad is encrypted at rest (default: true).
    pub scratchpad_encrypt: Option<bool>,
}

impl ProjectConfig {
    pub fn encrypt(&self) -> bool {
        self.scratchpad_encrypt.unwrap_or(true)
    }
}

/// Read the project config, treating a missing file as empty.
pub fn read_project_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ProjectConfig::default());
        }
        Err(e) => {
            return Err(anyhow::anyhow!(
                "Failed to read config {}: {}",
                path.display(),
                e
            ))
        }
    };
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}
