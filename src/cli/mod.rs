//! CLI module for tracker-mentions
//!
//! Provides subcommands that run mention handling against a directory
//! fixture:
//! - `extract`: list the users reached by a set of mentions
//! - `validate`: check a note's mentions against a project's membership

pub mod extract;
pub mod validate;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::directory::Directory;
use crate::infrastructure::logging::init_logging;

/// Mention extraction and validation for issue notes
#[derive(Parser)]
#[command(name = "tracker-mentions")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory fixture (overrides `directory.fixture_path`)
    #[arg(long, global = true)]
    pub fixture: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the users reached by a set of mentions
    Extract(extract::ExtractArgs),

    /// Validate a note's mentions against project membership
    Validate(validate::ValidateArgs),
}

/// Load configuration, install logging and open the directory
pub(crate) fn bootstrap(fixture: Option<PathBuf>) -> anyhow::Result<Directory> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    init_logging(&config.logging);

    let path = fixture
        .or(config.directory.fixture_path)
        .context("no directory fixture given; pass --fixture or set APP__DIRECTORY__FIXTURE_PATH")?;

    Directory::load(&path)
        .with_context(|| format!("failed to load directory from '{}'", path.display()))
}
