//! Repository upload command implementation
//!
//! Stages, commits and pushes local changes for every repository in the
//! configuration, rendering progress as it goes.

use anyhow::Result;
use std::path::Path;

use super::ProgressRenderer;
use crate::config::Configuration;
use crate::git::GitProcess;
use crate::sync::Syncer;

/// Handles the upload command.
pub fn handle_upload_command(config_path: &Path, machine: &str) -> Result<()> {
    let config = Configuration::load(config_path)?;

    let mut syncer = Syncer::new(GitProcess, machine);
    syncer.subscribe(Box::new(ProgressRenderer::new()));

    let result = syncer.upload(&config)?;
    println!("{result}");
    Ok(())
}
