//! Configuration loading and repository path resolution

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::SyncError;

/// The declarative list of repositories to keep in sync.
///
/// Deserialized from a `config.json` document whose field names follow the
/// on-disk format:
///
/// ```json
/// {
///   "Repositories": [
///     {
///       "Name": "notes",
///       "RemoteUrl": "git@github.com:example/notes.git",
///       "MachinePaths": {
///         "WORKSTATION": "C:\\notes",
///         "LAPTOP": "/home/me/notes"
///       }
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Configuration {
    /// Repositories to process, in order. May be empty (a no-op run).
    #[serde(rename = "Repositories")]
    pub repositories: Vec<Repository>,
}

/// One repository definition.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// Display name, also the correlation key in progress events.
    #[serde(rename = "Name")]
    pub name: String,
    /// Passed verbatim to git when binding the remote.
    #[serde(rename = "RemoteUrl")]
    pub remote_url: String,
    /// Machine identity (uppercase, trimmed) to local working-copy path.
    #[serde(rename = "MachinePaths")]
    pub machine_paths: HashMap<String, PathBuf>,
}

impl Configuration {
    /// Reads and validates a configuration document.
    pub fn load(path: &Path) -> Result<Configuration> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Configuration = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects documents the sync core cannot act on. The core trusts the
    /// in-memory form and performs no further schema checks of its own.
    fn validate(&self) -> Result<()> {
        for repo in &self.repositories {
            if repo.name.trim().is_empty() {
                anyhow::bail!("Configuration contains a repository with an empty Name");
            }
            if repo.remote_url.trim().is_empty() {
                anyhow::bail!("Repository '{}' has an empty RemoteUrl", repo.name);
            }
        }
        Ok(())
    }
}

/// Default config location: `<user config dir>/gitferry/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gitferry").join("config.json"))
}

/// Normalizes a machine identity the same way `MachinePaths` keys are
/// authored: uppercase with surrounding whitespace removed.
pub fn normalize_machine(identity: &str) -> String {
    identity.trim().to_uppercase()
}

/// Maps a repository definition to its local path on the given machine.
///
/// `machine` must already be normalized; lookup is by exact match.
pub fn resolve_repo_path(repo: &Repository, machine: &str) -> Result<PathBuf, SyncError> {
    repo.machine_paths
        .get(machine)
        .cloned()
        .ok_or_else(|| SyncError::RepositoryPathNotFound {
            repo: repo.name.clone(),
            machine: machine.to_string(),
        })
}
