//! Command-line interface for the release verifier

mod style;

use crate::cli::style::Stylize;
use anstream::println;
use clap::Parser;
use relcheck::config::VerifyConfig;
use relcheck::error::Result;
use relcheck::verify;
use std::path::PathBuf;

/// Verify that a release was executed correctly against the hosting API
#[derive(Debug, Parser)]
#[command(
    name = "relcheck",
    version,
    about = "Verify a release against the GitHub API"
)]
pub struct Cli {
    /// Path to a TOML configuration file overriding the built-in defaults
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory the verification report is written to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Target repository name (overrides the configured repository)
    #[arg(long, value_name = "NAME")]
    pub repo: Option<String>,
}

/// Run the verifier and return the process exit code.
pub async fn run(cli: Cli) -> Result<i32> {
    let mut cfg = VerifyConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.output_dir {
        cfg.output.dir = dir;
    }
    if let Some(repo) = cli.repo {
        cfg.target.repo = repo;
    }

    let separator = "=".repeat(cfg.output.separator_length);
    println!("{}", separator.muted());
    println!("{}", "Running release verification".emphasis());
    println!("{}", separator.muted());

    let report = verify::run(&cfg).await?;

    if report.outcome.passed {
        println!("\n{}", separator.muted());
        println!("{}", cfg.output.success_message.success());
        for line in &report.lines {
            println!("{line}");
        }
        println!("{}\n", separator.muted());
    }

    Ok(if report.outcome.passed {
        cfg.output.success_exit_code
    } else {
        cfg.output.failure_exit_code
    })
}
