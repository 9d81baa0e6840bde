//! dig-contest CLI: runs one contest from stdin against a roster file.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dig_contest::session::{RosterBook, Session};

/// Turn-based archaeological dig contest
#[derive(Parser, Debug)]
#[command(name = "dig-contest")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Roster file listing every team and its players
    #[arg(short, long, default_value = "teams.txt")]
    roster: PathBuf,

    /// Log filter (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match &args.log {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let roster = RosterBook::load(&args.roster)
        .with_context(|| format!("loading roster from {}", args.roster.display()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock())
        .run(&roster)
        .context("contest session failed")?;
    Ok(())
}
