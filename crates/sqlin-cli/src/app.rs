//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sqlin")]
#[command(
    author,
    version,
    about = "Print the entries of a directory as a SQL IN clause"
)]
pub struct Cli {
    /// Directory to scan (falls back to SQLIN_DIR, then the config file)
    pub dir: Option<PathBuf>,

    /// Only include regular files
    #[arg(long)]
    pub files_only: bool,

    /// Sort entries by name instead of filesystem order
    #[arg(long)]
    pub sort: bool,

    /// Double single quotes inside names
    #[arg(long)]
    pub escape_quotes: bool,

    /// Config file (must exist; without it SQLIN_CONFIG or the default path is tried)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "sql")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Sql,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["sqlin", "/srv/sql"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/srv/sql")));
        assert_eq!(cli.format, OutputFormat::Sql);
        assert!(!cli.files_only && !cli.sort && !cli.escape_quotes);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "sqlin",
            "--files-only",
            "--sort",
            "--escape-quotes",
            "--format",
            "json",
        ])
        .unwrap();
        assert!(cli.dir.is_none());
        assert!(cli.files_only && cli.sort && cli.escape_quotes);
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
