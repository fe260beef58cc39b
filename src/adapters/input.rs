//! Scenario Input - Outcome Lists from Files or Stdin
//!
//! Reads a JSON array of outcome records for the CLI. Individual fields
//! are parsed leniently by the domain; only unreadable sources and
//! malformed JSON are errors here.

use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::outcome::Outcome;

/// Failure to obtain an outcome list.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("outcome list is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("too many outcomes: {count} (limit {limit})")]
    TooManyOutcomes { count: usize, limit: usize },
}

/// Parse a JSON array of outcomes, enforcing `limit`.
pub fn parse_outcomes(json: &str, limit: usize) -> Result<Vec<Outcome>, InputError> {
    let outcomes: Vec<Outcome> = serde_json::from_str(json)?;
    check_limit(outcomes.len(), limit)?;
    Ok(outcomes)
}

/// Read outcomes from `path`, or from stdin when `path` is `None`.
pub fn read_outcomes(path: Option<&Path>, limit: usize) -> Result<Vec<Outcome>, InputError> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(InputError::Stdin)?;
            buffer
        }
    };
    parse_outcomes(&json, limit)
}

/// Reject lists longer than `limit`.
pub fn check_limit(count: usize, limit: usize) -> Result<(), InputError> {
    if count > limit {
        return Err(InputError::TooManyOutcomes { count, limit });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_outcome_array() {
        let outcomes = parse_outcomes(
            r#"[{"finalOdd": 2.1}, {"finalOdd": "2.05", "isLayBet": true}]"#,
            16,
        )
        .unwrap();
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[1].is_lay_bet);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_outcomes(r#"{"finalOdd": 2.1}"#, 16).unwrap_err();
        assert!(matches!(err, InputError::Json(_)));
    }

    #[test]
    fn test_parse_enforces_limit() {
        let err = parse_outcomes("[{}, {}, {}]", 2).unwrap_err();
        assert!(matches!(
            err,
            InputError::TooManyOutcomes { count: 3, limit: 2 }
        ));
        assert_eq!(err.to_string(), "too many outcomes: 3 (limit 2)");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_outcomes(Some(Path::new("does/not/exist.json")), 16).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
