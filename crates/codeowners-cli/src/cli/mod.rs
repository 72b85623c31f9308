//! CLI module for the CODEOWNERS resolver.
//!
//! This module provides command-line argument parsing using Clap with
//! environment variable support.

pub mod config;
pub mod output;

use clap::Parser;
use std::path::PathBuf;

/// CODEOWNERS resolver - shows who owns which files.
///
/// Finds the repository's CODEOWNERS file, then prints the owners of each
/// given path. Directories are expanded to the files beneath them.
#[derive(Parser, Debug)]
#[command(name = "codeowners-resolver")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Paths to resolve, relative to the repository root.
    #[arg(default_value = ".")]
    pub paths: Vec<String>,

    /// Directory to start searching for the CODEOWNERS file from.
    #[arg(long, short = 'C', env = "REPOSITORY_PATH", default_value = ".")]
    pub repository_path: PathBuf,

    /// Use this CODEOWNERS file instead of searching for one.
    /// Its rules are interpreted relative to the repository path.
    #[arg(long, short = 'f', env = "CODEOWNERS_FILE")]
    pub file: Option<PathBuf>,

    /// Show the section each deciding rule belongs to.
    #[arg(long, short = 's')]
    pub section: bool,

    /// Only print paths that have no owner.
    #[arg(long)]
    pub unowned: bool,

    /// Exit with status 3 if any resolved path has no owner.
    #[arg(long)]
    pub fail_on_unowned: bool,

    /// Output results as JSON instead of human-readable format.
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}
