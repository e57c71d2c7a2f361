//! Store configuration resolution.
//!
//! Context directory precedence: `--context-dir` / `PAD_CONTEXT_DIR` (both
//! arrive through clap), then `.padrc`, then `.context`. Project root is
//! `--root` / `PAD_ROOT`, else the current directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use pad_core::config::DIR_CONTEXT;
use pad_core::{StoreConfig, StoreMode};

use crate::cli::Cli;
use crate::config::{read_project_config, ProjectConfig};
use crate::constants::PROJECT_CONFIG_FILE;

/// Resolve the project root from CLI args or the working directory.
pub fn resolve_root(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(root) = &cli.root {
        return Ok(root.clone());
    }
    std::env::current_dir().context("Failed to determine current directory")
}

/// Build the store configuration for this invocation.
pub fn resolve_store_config(cli: &Cli) -> anyhow::Result<StoreConfig> {
    let root = resolve_root(cli)?;
    let project = read_project_config(&project_config_path(&root))?;
    Ok(store_config_from(root, cli.context_dir.as_deref(), &project))
}

pub fn project_config_path(root: &Path) -> PathBuf {
    root.join(PROJECT_CONFIG_FILE)
}

fn store_config_from(
    root: PathBuf,
    context_override: Option<&Path>,
    project: &ProjectConfig,
) -> StoreConfig {
    let context_dir = match (context_override, project.context_dir.as_deref()) {
        (Some(dir), _) => dir.to_path_buf(),
        (None, Some(dir)) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DIR_CONTEXT),
    };
    let mode = StoreMode::from_encrypt_flag(project.encrypt());
    StoreConfig::new(root, context_dir, mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = store_config_from(PathBuf::from("/p"), None, &ProjectConfig::default());
        assert_eq!(config.context_dir, PathBuf::from(".context"));
        assert_eq!(config.mode, StoreMode::Encrypted);
    }

    #[test]
    fn test_project_file_sets_dir_and_mode() {
        let project = ProjectConfig {
            context_dir: Some("state".to_string()),
            scratchpad_encrypt: Some(false),
        };
        let config = store_config_from(PathBuf::from("/p"), None, &project);
        assert_eq!(config.context_dir, PathBuf::from("state"));
        assert_eq!(config.mode, StoreMode::Plaintext);
    }

    #[test]
    fn test_flag_beats_project_file() {
        let project = ProjectConfig {
            context_dir: Some("state".to_string()),
            scratchpad_encrypt: None,
        };
        let config = store_config_from(PathBuf::from("/p"), Some(Path::new("override")), &project);
        assert_eq!(config.context_dir, PathBuf::from("override"));
    }
}
