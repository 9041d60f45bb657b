use clap::{ArgGroup, Parser};
use std::path::PathBuf;

// Build information - Create a static version string at compile time
macro_rules! version_string {
    () => {
        concat!(
            env!("CARGO_PKG_VERSION"),
            "\nCommit: ",
            env!("GIT_COMMIT_HASH"),
            " (",
            env!("GIT_BRANCH"),
            ")\nBuilt: ",
            env!("BUILD_DATE")
        )
    };
}

/// Botica CLI - administrative SQL runner for the Botica supply platform
#[derive(Parser, Debug)]
#[command(name = "botica")]
#[command(author = "Botica Team")]
#[command(version = version_string!())]
#[command(about = "Run SQL scripts against the Botica managed database", long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["file", "command", "list_tables", "describe"]),
))]
pub struct Cli {
    /// Database endpoint base URL (overrides BOTICA_DB_URL and config)
    #[arg(short = 'u', long = "url")]
    pub url: Option<String>,

    /// Execute every statement in a SQL file
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    /// Execute a single SQL statement
    #[arg(short = 'c', long = "command")]
    pub command: Option<String>,

    /// List public tables
    #[arg(long = "list-tables")]
    pub list_tables: bool,

    /// Show the columns of a table
    #[arg(long = "describe", value_name = "TABLE")]
    pub describe: Option<String>,

    /// Split the file and list its statements without executing anything
    #[arg(long = "dry-run", requires = "file")]
    pub dry_run: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Disable the progress bar
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Configuration file path
    #[arg(long = "config", default_value = "~/.botica/config.toml")]
    pub config: PathBuf,

    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
