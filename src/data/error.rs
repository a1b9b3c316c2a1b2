use std::fmt;

/// Why a single data line was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum RowFault {
    /// Fewer than two tokens.
    TooFewTokens(usize),
    /// Token count is odd, so the row cannot be split into pairs.
    OddTokenCount(usize),
    /// Token at `column` (1-based) does not parse as a number.
    NotANumber { column: usize, token: String },
    /// Token at `column` (1-based) parses but is NaN or infinite.
    NonFinite { column: usize, token: String },
}

impl fmt::Display for RowFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowFault::TooFewTokens(n) => write!(f, "expected at least 2 values, found {n}"),
            RowFault::OddTokenCount(n) => {
                write!(f, "odd number of values ({n}); values must come in re/im pairs")
            }
            RowFault::NotANumber { column, token } => {
                write!(f, "value {column} ('{token}') is not a number")
            }
            RowFault::NonFinite { column, token } => {
                write!(f, "value {column} ('{token}') is not finite")
            }
        }
    }
}

/// A rejected data line. `row` is the 1-based position among data lines.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub row: usize,
    pub reason: RowFault,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.reason)
    }
}

fn join_rows(errors: &[RowError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

fn no_valid_suffix(errors: &[RowError]) -> String {
    if errors.is_empty() {
        String::new()
    } else {
        format!(": {}", join_rows(errors))
    }
}

/// Every way turning text into a [`Dataset`](super::model::Dataset) can fail.
/// None of these are fatal; the caller keeps whatever it had before.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    EmptyInput,

    #[error("input contains no non-empty lines")]
    NoDataRows,

    #[error("found a header line but no data lines after it")]
    HeaderOnly,

    #[error("{} invalid row(s): {}", .0.len(), join_rows(.0))]
    RowParse(Vec<RowError>),

    /// Nothing was scanned, or every scanned row was rejected.
    #[error("no valid data rows{}", no_valid_suffix(.0))]
    NoValidRows(Vec<RowError>),

    #[error("row {index} has {found} values, expected {expected}")]
    NonUniformRows {
        index: usize,
        found: usize,
        expected: usize,
    },

    #[error("header has {header} labels but rows have {columns} values")]
    HeaderLengthMismatch { header: usize, columns: usize },

    #[error("column count {0} is odd; values must come in re/im pairs")]
    OddColumnCount(usize),

    /// Final shape assertion failed; indicates a bug in an earlier stage.
    #[error("dataset shape check failed: {0}")]
    Shape(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// The per-row diagnostics carried by [`ParseError::RowParse`] and
    /// [`ParseError::NoValidRows`].
    pub fn row_errors(&self) -> &[RowError] {
        match self {
            ParseError::RowParse(errors) | ParseError::NoValidRows(errors) => errors,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_parse_message_lists_every_row() {
        let err = ParseError::RowParse(vec![
            RowError {
                row: 2,
                reason: RowFault::OddTokenCount(3),
            },
            RowError {
                row: 5,
                reason: RowFault::NotANumber {
                    column: 1,
                    token: "x".into(),
                },
            },
        ]);
        let msg = err.to_string();
        assert!(msg.starts_with("2 invalid row(s)"));
        assert!(msg.contains("row 2: odd number of values (3)"));
        assert!(msg.contains("row 5: value 1 ('x') is not a number"));
        assert_eq!(err.row_errors().len(), 2);
    }

    #[test]
    fn test_non_uniform_message() {
        let err = ParseError::NonUniformRows {
            index: 2,
            found: 4,
            expected: 2,
        };
        assert_eq!(err.to_string(), "row 2 has 4 values, expected 2");
        assert!(err.row_errors().is_empty());
    }
}
