//! JSON output formatter

use sqlin_core::{InClause, Result};

pub fn format_clause(result: &InClause) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)? + "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_json_shape() {
        let result = InClause {
            directory: PathBuf::from("/srv/sql"),
            names: vec!["alpha".to_string(), "beta".to_string()],
            clause: "IN ('alpha','beta')".to_string(),
        };

        let output = format_clause(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["directory"], "/srv/sql");
        assert_eq!(value["names"], serde_json::json!(["alpha", "beta"]));
        assert_eq!(value["clause"], "IN ('alpha','beta')");
    }
}
