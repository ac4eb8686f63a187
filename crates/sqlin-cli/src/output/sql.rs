//! Plain SQL output

use sqlin_core::InClause;

pub fn format_clause(result: &InClause) -> String {
    format!("{}\n", result.clause)
}
