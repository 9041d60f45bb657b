//! Batch runner: drives a whole script through the statement executor.
//!
//! Statements run strictly in source order, one awaited call at a time.
//! A failing statement is counted and the run moves on: partial failure is
//! normal operation for these scripts, which are written to be re-runnable.
//! The only fatal condition here is a source file that cannot be read, in
//! which case nothing is executed at all.

use crate::error::{CLIError, Result};
use crate::splitter::split_statements;
use botica_link::{StatementExecutor, StatementOutcome};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Aggregate tally for one batch run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Statements extracted from the script
    pub total: usize,

    /// Statements the endpoint accepted
    pub succeeded: usize,

    /// Statements the endpoint rejected
    pub remote_errors: usize,

    /// Statements whose call never got an answer
    pub transport_errors: usize,
}

impl RunSummary {
    /// Count of statements that did not succeed
    pub fn failed(&self) -> usize {
        self.remote_errors + self.transport_errors
    }

    /// True when every statement succeeded
    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }

    fn record(&mut self, outcome: &StatementOutcome) {
        match outcome {
            StatementOutcome::Success => self.succeeded += 1,
            StatementOutcome::RemoteError(_) => self.remote_errors += 1,
            StatementOutcome::TransportError(_) => self.transport_errors += 1,
        }
    }
}

/// Sequential batch runner over a [`StatementExecutor`].
pub struct BatchRunner<'a> {
    executor: &'a dyn StatementExecutor,
    progress: bool,
    color: bool,
}

impl<'a> BatchRunner<'a> {
    /// Create a runner with progress reporting and color enabled.
    pub fn new(executor: &'a dyn StatementExecutor) -> Self {
        Self {
            executor,
            progress: true,
            color: true,
        }
    }

    /// Enable or disable the progress bar.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Enable or disable colored output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Read a script file and run every statement in it.
    ///
    /// An unreadable file fails the whole run before any statement is
    /// attempted; there is no partial state to clean up.
    pub async fn run_file(&self, path: &Path) -> Result<RunSummary> {
        let sql = std::fs::read_to_string(path).map_err(|e| {
            CLIError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Ok(self.run_script(&sql).await)
    }

    /// Run every statement in the given SQL text, in source order.
    pub async fn run_script(&self, sql: &str) -> RunSummary {
        let statements = split_statements(sql);
        let total = statements.len();
        let mut summary = RunSummary {
            total,
            ..RunSummary::default()
        };

        if total == 0 {
            println!("No statements found in script");
            return summary;
        }

        let bar = if self.progress {
            let pb = ProgressBar::new(total as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{pos}/{len} [{bar:30.cyan/dim}] {msg}")
                    .unwrap()
                    .progress_chars("=> "),
            );
            Some(pb)
        } else {
            None
        };

        for (index, statement) in statements.iter().enumerate() {
            if let Some(ref pb) = bar {
                pb.set_message(statement_preview(statement));
            }

            let outcome = self.executor.execute(statement).await;
            summary.record(&outcome);
            self.report(index + 1, total, statement, &outcome, bar.as_ref());

            if let Some(ref pb) = bar {
                pb.inc(1);
            }
        }

        if let Some(pb) = bar {
            pb.finish_and_clear();
        }

        self.print_summary(&summary);
        summary
    }

    fn report(
        &self,
        index: usize,
        total: usize,
        statement: &str,
        outcome: &StatementOutcome,
        bar: Option<&ProgressBar>,
    ) {
        let line = match outcome {
            StatementOutcome::Success => {
                let glyph = if self.color {
                    "✓".green().to_string()
                } else {
                    "ok".to_string()
                };
                format!("[{}/{}] {} {}", index, total, glyph, statement_preview(statement))
            }
            StatementOutcome::RemoteError(msg) => {
                let glyph = if self.color {
                    "⚠".yellow().to_string()
                } else {
                    "warn".to_string()
                };
                format!("[{}/{}] {} remote error: {}", index, total, glyph, msg)
            }
            StatementOutcome::TransportError(msg) => {
                let glyph = if self.color {
                    "✗".red().to_string()
                } else {
                    "error".to_string()
                };
                format!("[{}/{}] {} transport error: {}", index, total, glyph, msg)
            }
        };

        // Route through the bar so lines don't clobber it mid-draw
        match bar {
            Some(pb) => pb.println(line),
            None => println!("{}", line),
        }
    }

    fn print_summary(&self, summary: &RunSummary) {
        let line = format!(
            "Applied {} statement{}: {} succeeded, {} remote error{}, {} transport error{}",
            summary.total,
            plural(summary.total),
            summary.succeeded,
            summary.remote_errors,
            plural(summary.remote_errors),
            summary.transport_errors,
            plural(summary.transport_errors),
        );

        if !self.color {
            println!("{}", line);
        } else if summary.is_clean() {
            println!("{}", line.green());
        } else {
            println!("{}", line.yellow());
        }
    }
}

/// First line of a statement, capped for progress output.
pub fn statement_preview(statement: &str) -> String {
    const MAX_PREVIEW: usize = 60;
    let first_line = statement.lines().next().unwrap_or("");
    if first_line.chars().count() <= MAX_PREVIEW {
        first_line.to_string()
    } else {
        let head: String = first_line.chars().take(MAX_PREVIEW - 3).collect();
        format!("{}...", head)
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_accounting() {
        let mut summary = RunSummary {
            total: 3,
            ..RunSummary::default()
        };
        summary.record(&StatementOutcome::Success);
        summary.record(&StatementOutcome::RemoteError("dup".into()));
        summary.record(&StatementOutcome::TransportError("refused".into()));

        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.remote_errors, 1);
        assert_eq!(summary.transport_errors, 1);
        assert_eq!(summary.failed(), 2);
        assert!(!summary.is_clean());
        // Every statement lands in exactly one bucket
        assert_eq!(
            summary.succeeded + summary.remote_errors + summary.transport_errors,
            summary.total
        );
    }

    #[test]
    fn test_preview_caps_length() {
        let long = "SELECT ".repeat(40);
        let p = statement_preview(&long);
        assert!(p.chars().count() <= 60);
        assert!(p.ends_with("..."));

        assert_eq!(statement_preview("SELECT 1\nFROM t"), "SELECT 1");
    }
}
