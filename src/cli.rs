use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "package-license-report")]
#[command(about = "Build a markdown report of third-party dependency licenses")]
#[command(version)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Build variant whose dependency inventory is processed (e.g. release)
    #[arg(required = true)]
    pub variant: Option<String>,

    /// Write the report here instead of the configured output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail if the existing report differs from a fresh one; never writes
    #[arg(long)]
    pub check: bool,

    /// Project directory that relative paths resolve against
    #[arg(long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Configuration file (default: license-report.toml in the project directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List build variants that have a dependency inventory
    Variants,
    /// Show or validate configuration
    Config {
        /// Show the effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration and check that every mapped license file exists
        #[arg(long)]
        validate: bool,
    },
    /// Write a starter license-report.toml
    Init {
        /// Overwrite the managed keys of an existing file
        #[arg(long)]
        force: bool,
    },
}
