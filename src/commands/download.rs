//! Repository download command implementation
//!
//! Pulls upstream changes into every repository in the configuration,
//! stopping at the first merge conflict.

use anyhow::Result;
use std::path::Path;

use super::ProgressRenderer;
use crate::config::Configuration;
use crate::git::GitProcess;
use crate::sync::Syncer;

/// Handles the download command.
pub fn handle_download_command(config_path: &Path, machine: &str) -> Result<()> {
    let config = Configuration::load(config_path)?;

    let mut syncer = Syncer::new(GitProcess, machine);
    syncer.subscribe(Box::new(ProgressRenderer::new()));

    syncer.download(&config)?;
    println!("Download complete.");
    Ok(())
}
