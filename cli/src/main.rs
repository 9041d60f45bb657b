//! Botica CLI - administrative SQL runner for the Botica supply platform
//!
//! # Usage
//!
//! ```bash
//! # Apply a migration script
//! botica --file migrations/001_create_tables.sql
//!
//! # Run a one-off fix-up statement
//! botica -c "ALTER TABLE orders ALTER COLUMN total TYPE numeric(12,2)"
//!
//! # Inspect the schema
//! botica --list-tables
//! botica --describe pharmacies
//! ```
//!
//! Credentials come from the environment: `BOTICA_DB_URL` and
//! `BOTICA_SERVICE_ROLE_KEY`. The exit code is 0 whenever a run completes,
//! even if individual statements failed; it is non-zero only when the
//! credentials are missing or the source file cannot be read.

use clap::Parser;
use colored::*;

use botica_cli::runner::statement_preview;
use botica_cli::{
    inspect, split_statements, BatchRunner, CLIConfiguration, CLIError, Result,
};

mod args;
mod connect;

use args::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "✗".red(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = CLIConfiguration::load(&cli.config)?;
    let ui = config.resolved_ui();
    let color = !cli.no_color && ui.color;
    let progress = !cli.no_progress && ui.progress;

    // Dry-run needs no credentials: nothing leaves the machine
    if cli.dry_run {
        if let Some(ref file) = cli.file {
            return dry_run(file);
        }
    }

    let client = connect::create_client(&cli, &config)?;

    // Batch mode: apply a whole script
    if let Some(ref file) = cli.file {
        let runner = BatchRunner::new(client.executor())
            .with_progress(progress)
            .with_color(color);
        runner.run_file(file).await?;
        return Ok(());
    }

    // Single fix-up statement
    if let Some(ref command) = cli.command {
        let runner = BatchRunner::new(client.executor())
            .with_progress(false)
            .with_color(color);
        runner.run_script(command).await;
        return Ok(());
    }

    if cli.list_tables {
        return inspect::list_tables(&client, color).await;
    }

    if let Some(ref table) = cli.describe {
        return inspect::describe_table(&client, table, color).await;
    }

    // clap's mode group guarantees one of the arms above matched
    Err(CLIError::ConfigurationError(
        "No operation specified".into(),
    ))
}

/// List the statements a file splits into, without executing anything.
fn dry_run(path: &std::path::Path) -> Result<()> {
    let sql = std::fs::read_to_string(path)
        .map_err(|e| CLIError::FileError(format!("Failed to read {}: {}", path.display(), e)))?;

    let statements = split_statements(&sql);
    if statements.is_empty() {
        println!("No statements found in script");
        return Ok(());
    }

    let total = statements.len();
    for (index, statement) in statements.iter().enumerate() {
        println!("[{}/{}] {}", index + 1, total, statement_preview(statement));
    }
    println!(
        "{} statement{}; nothing executed",
        total,
        if total == 1 { "" } else { "s" }
    );
    Ok(())
}
