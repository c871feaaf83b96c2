//! Anti-join of freshly scraped rows against stored rows

use rusqlite::types::Value;

/// Rows of `fresh` with no equal row in `existing`, in their original order.
///
/// Rows compare on every column, so a game whose stats changed since the
/// last load is appended as a new row.
pub fn anti_join(fresh: Vec<Vec<Value>>, existing: &[Vec<Value>]) -> Vec<Vec<Value>> {
    fresh
        .into_iter()
        .filter(|row| !existing.contains(row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(week: i64, yards: f64) -> Vec<Value> {
        vec![
            Value::Text("Tom Brady".to_string()),
            Value::Integer(week),
            Value::Real(yards),
            Value::Null,
        ]
    }

    #[test]
    fn test_anti_join_keeps_only_new_rows() {
        let existing = vec![row(1, 276.0), row(2, 379.0)];
        let fresh = vec![row(1, 276.0), row(2, 379.0), row(3, 432.0)];
        assert_eq!(anti_join(fresh, &existing), vec![row(3, 432.0)]);
    }

    #[test]
    fn test_anti_join_unchanged_data_is_empty() {
        let existing = vec![row(1, 276.0), row(2, 379.0)];
        assert!(anti_join(existing.clone(), &existing).is_empty());
    }

    #[test]
    fn test_anti_join_compares_all_columns() {
        let existing = vec![row(1, 276.0)];
        // Same game, corrected stat
        assert_eq!(anti_join(vec![row(1, 281.0)], &existing), vec![row(1, 281.0)]);
        assert_eq!(anti_join(vec![row(1, 276.0)], &[]), vec![row(1, 276.0)]);
    }
}
