//! # gitferry
//!
//! `gitferry` keeps a declarative set of named local directories synchronized
//! with their remote git repositories across multiple machines. It powers the
//! `gitferry` CLI tool.
//!
//! ## Core Features
//!
//! - **Declarative configuration**: each repository maps machine names to local paths.
//! - **Idempotent initialization**: missing working copies are created and bound to their remote.
//! - **Upload cycle**: stage, commit and push local changes with byte-count reporting.
//! - **Download cycle**: pull upstream changes with merge-conflict detection.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gitferry::config::Configuration;
//! use gitferry::git::GitProcess;
//! use gitferry::sync::Syncer;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Configuration::load("config.json".as_ref())?;
//!     let mut syncer = Syncer::new(GitProcess, "WORKSTATION");
//!     let result = syncer.upload(&config)?;
//!     println!("{result}");
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod git;
pub mod sync;
pub mod utils;
