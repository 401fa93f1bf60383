use anyhow::{Context, Result};
use pipesim::cli::commands::{DemoCommand, RunCommand, ValidateCommand};
use pipesim::cli::output::*;
use pipesim::cli::{Cli, Command};
use pipesim::core::config::ScenarioConfig;
use pipesim::registry::Registry;
use tracing::{error, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging; RUST_LOG takes precedence over --verbose
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    let result = match &cli.command {
        Command::Demo(cmd) => run_demo(cmd),
        Command::Run(cmd) => run_scenario(cmd),
        Command::Validate(cmd) => validate_scenario(cmd),
    };

    if let Err(e) = result {
        eprintln!("{} {}", CROSS, style(format!("{:#}", e)).red());
        error!("{:?}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run_demo(cmd: &DemoCommand) -> Result<()> {
    let config = ScenarioConfig::demo();
    let mut registry = Registry::new();
    let ids = config.apply(&mut registry)?;

    if cmd.json {
        println!("{}", format_json(&registry)?);
    } else {
        for id in ids {
            registry.print_report(id);
        }
    }
    Ok(())
}

fn run_scenario(cmd: &RunCommand) -> Result<()> {
    let config = ScenarioConfig::from_file(&cmd.file)
        .with_context(|| format!("Failed to load scenario {}", cmd.file))?
        .with_strict(cmd.strict);

    let mut registry = Registry::new();
    config
        .apply(&mut registry)
        .context("Failed to apply scenario")?;

    if cmd.json {
        println!("{}", format_json(&registry)?);
        return Ok(());
    }

    print!("{}", format_reports(&registry));
    eprintln!();
    for pipeline in registry.iter() {
        eprintln!("{}", format_pipeline_summary(pipeline));
    }
    Ok(())
}

fn validate_scenario(cmd: &ValidateCommand) -> Result<()> {
    println!("{} Validating scenario...", INFO);

    let config = ScenarioConfig::from_file(&cmd.file)
        .with_context(|| format!("Validation failed for {}", cmd.file))?;

    println!("{} Scenario is valid!", CHECK);
    println!("{}", format_scenario_summary(&config));
    Ok(())
}
