//! CLI command definitions

use clap::Args;

/// Run the built-in scenario
#[derive(Debug, Args, Clone)]
pub struct DemoCommand {
    /// Output pipelines as JSON
    #[arg(long)]
    pub json: bool,
}

/// Apply a scenario file
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to scenario YAML file
    #[arg(short, long)]
    pub file: String,

    /// Fail on updates naming an unknown stage (overrides the file)
    #[arg(long)]
    pub strict: bool,

    /// Output pipelines as JSON
    #[arg(long)]
    pub json: bool,
}

/// Validate a scenario file
#[derive(Debug, Args, Clone)]
pub struct ValidateCommand {
    /// Path to scenario YAML file
    #[arg(short, long)]
    pub file: String,
}
