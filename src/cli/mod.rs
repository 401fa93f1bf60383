//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{DemoCommand, RunCommand, ValidateCommand};
use std::ffi::OsString;

/// In-memory CI/CD pipeline simulator
#[derive(Debug, Parser, Clone)]
#[command(name = "pipesim")]
#[command(author = "Pipesim Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Simulate build/test/deploy pipelines in memory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run the built-in build/test/deploy scenario
    Demo(DemoCommand),

    /// Apply a scenario file and report every pipeline
    Run(RunCommand),

    /// Validate a scenario file
    Validate(ValidateCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}
