mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use clap::Parser;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::git::GitCli;

#[derive(Parser)]
#[command(
    name = "greener",
    author,
    version,
    about = "Backfill a repository with randomized, backdated activity commits"
)]
struct Cli {
    /// First day of the activity window.
    #[arg(long, default_value = "2024-06-01")]
    start: NaiveDate,
    /// Last instant of the activity window (YYYY-MM-DDTHH:MM:SS); defaults to now.
    #[arg(long)]
    end: Option<NaiveDateTime>,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let config = AppConfig::resolve(cli.start, cli.end, cwd);

    let git = Arc::new(GitCli::new(config.workspace_root.clone()));
    let context = AppContext::new(config, git);

    let outcome = cmd::backfill::run(&context).await?;

    println!(
        "All {} commits have been pushed.",
        outcome.commits_applied
    );

    Ok(())
}
