//! CSV parsing for per-call records.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::DataError;
use crate::model::{Call, SimTime};

/// Load calls from a CSV file.
///
/// Each row is `arrival,response,priority`. The response column may be empty
/// or `null` for an unanswered call.
///
/// # Example file content
/// ```csv
/// arrival,response,priority
/// 0.0132,0.0061,0
/// 0.0207,,1
/// 0.0315,0.0094,0
/// ```
///
/// # Errors
/// Returns `DataError` if the file cannot be read or a row is malformed.
pub fn load_calls_csv(path: &Path, has_header: bool) -> Result<Vec<Call>, DataError> {
    let file = File::open(path)?;
    parse_calls_csv(BufReader::new(file), has_header)
}

/// Parse calls from any buffered reader. See [`load_calls_csv`].
pub fn parse_calls_csv<R: BufRead>(reader: R, has_header: bool) -> Result<Vec<Call>, DataError> {
    let mut calls = Vec::new();
    let mut header_pending = has_header;

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if header_pending {
            header_pending = false;
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DataError::Parse {
                line: line_num + 1,
                message: format!("Expected 3 columns, got {}", parts.len()),
            });
        }

        let arrival_time = parse_time(parts[0], line_num + 1, "arrival")?;

        let response_time = if parts[1].is_empty() || parts[1].eq_ignore_ascii_case("null") {
            SimTime::NULL
        } else {
            SimTime::new(parse_time(parts[1], line_num + 1, "response")?)
        };

        let priority: usize = parts[2].parse().map_err(|_| DataError::InvalidValue {
            line: line_num + 1,
            field: "priority",
            value: parts[2].to_string(),
        })?;

        calls.push(Call {
            arrival_time,
            response_time,
            priority,
        });
    }

    Ok(calls)
}

fn parse_time(value: &str, line: usize, field: &'static str) -> Result<f64, DataError> {
    match value.parse::<f64>() {
        Ok(t) if t.is_finite() && t >= 0.0 => Ok(t),
        _ => Err(DataError::InvalidValue {
            line,
            field,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_header() {
        let input = "arrival,response,priority\n0.1,0.01,0\n0.2,,1\n0.3,null,0\n";
        let calls = parse_calls_csv(input.as_bytes(), true).unwrap();
        assert_eq!(calls.len(), 3);
        assert!(calls[0].is_answered());
        assert_eq!(calls[0].response_time.get(), Some(0.01));
        assert!(!calls[1].is_answered());
        assert_eq!(calls[1].priority, 1);
        assert!(!calls[2].is_answered());
    }

    #[test]
    fn test_skips_blank_lines() {
        let input = "0.1,0.01,0\n\n0.2,0.02,0\n";
        let calls = parse_calls_csv(input.as_bytes(), false).unwrap();
        assert_eq!(calls.len(), 2);
    }

    #[test]
    fn test_header_after_leading_blank_lines() {
        let input = "\n\narrival,response,priority\n0.1,0.01,0\n";
        let calls = parse_calls_csv(input.as_bytes(), true).unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].arrival_time, 0.1);
    }

    #[test]
    fn test_wrong_column_count() {
        let err = parse_calls_csv("0.1,0.01\n".as_bytes(), false).unwrap_err();
        assert!(matches!(err, DataError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_negative_response_rejected() {
        let err = parse_calls_csv("h\n0.1,-0.5,0\n".as_bytes(), true).unwrap_err();
        assert!(matches!(
            err,
            DataError::InvalidValue {
                line: 2,
                field: "response",
                ..
            }
        ));
    }

    #[test]
    fn test_bad_priority() {
        let err = parse_calls_csv("0.1,0.2,high\n".as_bytes(), false).unwrap_err();
        assert!(matches!(
            err,
            DataError::InvalidValue {
                field: "priority",
                ..
            }
        ));
    }
}
