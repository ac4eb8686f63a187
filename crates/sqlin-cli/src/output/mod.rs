//! Output formatters

pub mod json;
pub mod sql;

use crate::app::OutputFormat;
use sqlin_core::{InClause, Result};

/// Render a listed directory in the requested format
pub fn format_clause(result: &InClause, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Sql => Ok(sql::format_clause(result)),
        OutputFormat::Json => json::format_clause(result),
    }
}
