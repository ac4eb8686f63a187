//! Sqlin Core Library
//!
//! Turns the entries of a directory into a SQL `IN` clause.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let clause = sqlin_core::build_in_clause(Path::new("/srv/sql"))?;
//! assert!(clause.starts_with("IN ('"));
//! # Ok::<(), sqlin_core::Error>(())
//! ```

pub mod clause;
pub mod config;
pub mod error;
pub mod lister;

pub use clause::{escape_literal, format_in_clause, ClauseOptions};
pub use config::Config;
pub use error::{exit_codes, Error, Result, SqlinError};
pub use lister::{
    base_name, build_in_clause, build_in_clause_with, describe_directory, list_entry_names,
    InClause, ListOptions,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "sqlin";
