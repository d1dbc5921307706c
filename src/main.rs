use anyhow::{Context, Result};
use pipeline_when::cli::commands::{evaluate, MatchCommand, ValidateCommand};
use pipeline_when::cli::output::*;
use pipeline_when::cli::{Cli, Command};
use pipeline_when::core::Conditions;
use tracing::debug;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(cli.log_filter())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    // Execute command
    match &cli.command {
        Command::Validate(cmd) => validate_conditions(cmd)?,
        Command::Match(cmd) => match_conditions(cmd)?,
    }

    Ok(())
}

fn load(file: &str) -> Conditions {
    match Conditions::from_file(file) {
        Ok(conditions) => conditions,
        Err(e) => {
            println!("{}Failed to load conditions from {}:", CROSS, style(file).bold());
            println!("  {}", style(format!("{:#}", e)).red());
            std::process::exit(1);
        }
    }
}

fn validate_conditions(cmd: &ValidateCommand) -> Result<()> {
    let conditions = load(&cmd.file);
    debug!("Loaded conditions: {:?}", conditions);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&conditions)?);
        return Ok(());
    }

    println!("{}Conditions are valid", CHECK);
    if conditions.is_empty() {
        println!("{}No conditions set; every event matches", INFO);
        return Ok(());
    }
    for line in format_conditions(&conditions) {
        println!("  {}", line);
    }
    println!("\n{}", serde_yaml::to_string(&conditions)?);

    Ok(())
}

fn match_conditions(cmd: &MatchCommand) -> Result<()> {
    let conditions = load(&cmd.file);
    let report = evaluate(&conditions, &cmd.value);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for result in &report.results {
            println!("{}", format_dimension_result(result));
        }
        println!("{}", format_verdict(&report));
    }

    if !report.matched {
        std::process::exit(1);
    }
    Ok(())
}
