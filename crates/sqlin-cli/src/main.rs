//! Sqlin CLI
//!
//! Prints the entries of a directory as a SQL `IN` clause.

use anyhow::{Context, Result};
use clap::Parser;
use sqlin_core::{describe_directory, exit_codes, Config, SqlinError};

mod app;
mod output;

use app::Cli;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG applies on top of the warn default; --verbose forces debug
    let mut filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();
    if cli.verbose {
        filter = filter.add_directive(tracing::Level::DEBUG.into());
    }
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        let code = err
            .downcast_ref::<SqlinError>()
            .map(SqlinError::exit_code)
            .unwrap_or(exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_required(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load()?,
    };

    let directory = config.resolve_directory(cli.dir)?;

    let mut list = config.list_options();
    list.files_only |= cli.files_only;
    list.sort |= cli.sort;

    let mut clause = config.clause_options();
    clause.escape_quotes |= cli.escape_quotes;

    tracing::debug!(directory = %directory.display(), ?list, ?clause, "building IN clause");

    let result = describe_directory(&directory, &list, &clause)?;
    print!("{}", output::format_clause(&result, cli.format)?);

    Ok(())
}
