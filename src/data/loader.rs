use std::path::Path;

use log::{debug, info, warn};

use super::error::{ParseError, RowError, RowFault};
use super::model::{pair_row, Dataset, PairedRow};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a whitespace-delimited text dump from disk and parse it.
pub fn load_file(path: &Path) -> Result<Dataset, ParseError> {
    let text = std::fs::read_to_string(path)?;
    debug!("read {} bytes from {}", text.len(), path.display());
    parse_dataset(&text)
}

/// Turn the full content of a text file into a validated [`Dataset`].
///
/// Stages run in order and any failure aborts the whole parse; a partial
/// dataset is never returned. Row-level problems are collected across every
/// line before failing, whereas the later structural checks stop at the first
/// problem.
pub fn parse_dataset(text: &str) -> Result<Dataset, ParseError> {
    let lines = normalize_lines(text)?;
    let HeaderSplit { header, data_lines } = detect_header(&lines)?;
    let rows = parse_rows(data_lines)?;
    let num_cols = check_uniform(&rows)?;
    let paired = split_pairs(header, rows, num_cols)?;
    let dataset = assemble(paired)?;

    info!(
        "parsed {} rows x {} pairs (header: {})",
        dataset.len(),
        dataset.num_pairs(),
        dataset.header().is_some()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Stage 1: text normalisation
// ---------------------------------------------------------------------------

/// Trim the input and return its non-empty lines, each trimmed.
pub fn normalize_lines(text: &str) -> Result<Vec<&str>, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let lines: Vec<&str> = trimmed
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.is_empty() {
        return Err(ParseError::NoDataRows);
    }
    debug!("normalised input into {} lines", lines.len());
    Ok(lines)
}

// ---------------------------------------------------------------------------
// Stage 2: header detection
// ---------------------------------------------------------------------------

/// Result of [`detect_header`].
#[derive(Debug, PartialEq)]
pub struct HeaderSplit<'a> {
    pub header: Option<Vec<String>>,
    pub data_lines: &'a [&'a str],
}

/// Classify the first line as data or header.
///
/// The first line is data when it already looks like a valid data row: an even
/// number (at least two) of finite numbers. Anything else is a header. A
/// header made of numbers that happens to satisfy that rule is read as data;
/// the format has no way to tell the two apart.
pub fn detect_header<'a>(lines: &'a [&'a str]) -> Result<HeaderSplit<'a>, ParseError> {
    let Some(first) = lines.first() else {
        return Err(ParseError::NoDataRows);
    };

    if parse_row(first).is_ok() {
        return Ok(HeaderSplit {
            header: None,
            data_lines: lines,
        });
    }

    let header: Vec<String> = tokenize(first).map(str::to_string).collect();
    let data_lines = &lines[1..];
    if data_lines.is_empty() {
        return Err(ParseError::HeaderOnly);
    }
    debug!("detected header with {} labels: {:?}", header.len(), header);
    Ok(HeaderSplit {
        header: Some(header),
        data_lines,
    })
}

// ---------------------------------------------------------------------------
// Stage 3: row parsing (error-accumulating)
// ---------------------------------------------------------------------------

fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// Parse a single line into numbers, checking count and finiteness.
pub fn parse_row(line: &str) -> Result<Vec<f64>, RowFault> {
    let values = tokenize(line)
        .enumerate()
        .map(|(j, tok)| {
            let v: f64 = tok.parse().map_err(|_| RowFault::NotANumber {
                column: j + 1,
                token: tok.to_string(),
            })?;
            if v.is_finite() {
                Ok(v)
            } else {
                Err(RowFault::NonFinite {
                    column: j + 1,
                    token: tok.to_string(),
                })
            }
        })
        .collect::<Result<Vec<f64>, RowFault>>()?;

    if values.len() < 2 {
        return Err(RowFault::TooFewTokens(values.len()));
    }
    if values.len() % 2 != 0 {
        return Err(RowFault::OddTokenCount(values.len()));
    }
    Ok(values)
}

/// Collects parsed rows and per-row failures, then reports them all at once.
#[derive(Debug, Default)]
struct RowAccumulator {
    rows: Vec<Vec<f64>>,
    errors: Vec<RowError>,
    scanned: usize,
}

impl RowAccumulator {
    fn push(&mut self, row: usize, result: Result<Vec<f64>, RowFault>) {
        self.scanned += 1;
        match result {
            Ok(values) => self.rows.push(values),
            Err(reason) => {
                warn!("rejecting row {row}: {reason}");
                self.errors.push(RowError { row, reason });
            }
        }
    }

    fn finish(self) -> Result<Vec<Vec<f64>>, ParseError> {
        if self.scanned == 0 || self.rows.is_empty() {
            return Err(ParseError::NoValidRows(self.errors));
        }
        if !self.errors.is_empty() {
            return Err(ParseError::RowParse(self.errors));
        }
        Ok(self.rows)
    }
}

/// Parse every data line. Each line is checked even after a failure so the
/// error lists every bad row (1-based among data lines).
pub fn parse_rows(lines: &[&str]) -> Result<Vec<Vec<f64>>, ParseError> {
    let mut acc = RowAccumulator::default();
    for (i, line) in lines.iter().enumerate() {
        acc.push(i + 1, parse_row(line));
    }
    let rows = acc.finish()?;
    debug!("parsed {} numeric rows", rows.len());
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Stage 4: uniformity
// ---------------------------------------------------------------------------

/// Check every row has the width of the first. Returns that width.
pub fn check_uniform(rows: &[Vec<f64>]) -> Result<usize, ParseError> {
    let expected = rows.first().map(Vec::len).ok_or(ParseError::NoValidRows(Vec::new()))?;
    for (i, row) in rows.iter().enumerate() {
        if row.len() != expected {
            return Err(ParseError::NonUniformRows {
                index: i + 1,
                found: row.len(),
                expected,
            });
        }
    }
    Ok(expected)
}

// ---------------------------------------------------------------------------
// Stage 5: pairing
// ---------------------------------------------------------------------------

/// Rows split into complex pairs, not yet shape-checked.
#[derive(Debug, PartialEq)]
pub struct PairedRows {
    pub header: Option<Vec<String>>,
    pub rows: Vec<PairedRow>,
    pub num_pairs: usize,
    pub num_cols: usize,
}

/// Validate header width and column parity, then pair up each row.
pub fn split_pairs(
    header: Option<Vec<String>>,
    rows: Vec<Vec<f64>>,
    num_cols: usize,
) -> Result<PairedRows, ParseError> {
    if let Some(h) = &header {
        if h.len() != num_cols {
            return Err(ParseError::HeaderLengthMismatch {
                header: h.len(),
                columns: num_cols,
            });
        }
    }
    if num_cols % 2 != 0 {
        return Err(ParseError::OddColumnCount(num_cols));
    }

    let rows = rows.iter().map(|r| pair_row(r)).collect();
    Ok(PairedRows {
        header,
        rows,
        num_pairs: num_cols / 2,
        num_cols,
    })
}

// ---------------------------------------------------------------------------
// Stage 6: assembly
// ---------------------------------------------------------------------------

/// Final shape assertion before the dataset leaves the parser.
pub fn assemble(paired: PairedRows) -> Result<Dataset, ParseError> {
    let PairedRows {
        header,
        rows,
        num_pairs,
        num_cols,
    } = paired;

    if rows.is_empty() {
        return Err(ParseError::Shape("no rows".into()));
    }
    if num_cols != 2 * num_pairs {
        return Err(ParseError::Shape(format!(
            "{num_cols} columns is not twice {num_pairs} pairs"
        )));
    }
    if let Some(i) = rows.iter().position(|r| r.len() != num_pairs) {
        return Err(ParseError::Shape(format!(
            "row {} has {} pairs, expected {num_pairs}",
            i + 1,
            rows[i].len()
        )));
    }
    if let Some(h) = &header {
        if h.len() != num_cols {
            return Err(ParseError::Shape(format!(
                "header has {} labels, expected {num_cols}",
                h.len()
            )));
        }
    }
    Ok(Dataset::from_parts(header, rows, num_pairs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ReImPair;

    fn p(re: f64, im: f64) -> ReImPair {
        ReImPair::new(re, im)
    }

    #[test]
    fn test_plain_rows_without_header() {
        let ds = parse_dataset("1 2\n3 4\n5 6").unwrap();
        assert!(ds.header().is_none());
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.num_pairs(), 1);
        assert_eq!(ds.num_cols(), 2);
        assert_eq!(
            ds.rows(),
            &[vec![p(1.0, 2.0)], vec![p(3.0, 4.0)], vec![p(5.0, 6.0)]]
        );
    }

    #[test]
    fn test_header_detected() {
        let ds = parse_dataset("a b\n1 2\n3 4").unwrap();
        assert_eq!(ds.header(), Some(&["a".to_string(), "b".to_string()][..]));
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn test_whitespace_and_blank_lines_tolerated() {
        let ds = parse_dataset("\n\n  time_re\ttime_im  \n\n 1.5\t -2e-3 \r\n\n  3   4\n   \n").unwrap();
        assert_eq!(ds.header().unwrap().len(), 2);
        assert_eq!(ds.rows(), &[vec![p(1.5, -2e-3)], vec![p(3.0, 4.0)]]);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_dataset(""), Err(ParseError::EmptyInput)));
        assert!(matches!(parse_dataset(" \n\t\n "), Err(ParseError::EmptyInput)));
    }

    #[test]
    fn test_header_only() {
        assert!(matches!(parse_dataset("re im\n"), Err(ParseError::HeaderOnly)));
    }

    #[test]
    fn test_odd_first_line_is_treated_as_header() {
        // "1 2 3" looks numeric but cannot be data, so it becomes a header
        // whose width then disagrees with the data.
        let err = parse_dataset("1 2 3\n4 5").unwrap_err();
        assert!(matches!(
            err,
            ParseError::HeaderLengthMismatch {
                header: 3,
                columns: 2
            }
        ));
    }

    #[test]
    fn test_row_errors_accumulate() {
        let err = parse_dataset("1 2\n3 4 5").unwrap_err();
        match err {
            ParseError::RowParse(errors) => {
                assert_eq!(
                    errors,
                    vec![RowError {
                        row: 2,
                        reason: RowFault::OddTokenCount(3)
                    }]
                );
            }
            other => panic!("expected RowParse, got {other:?}"),
        }

        let err = parse_dataset("1 2\nx 4\n5\n7 8\n9 inf").unwrap_err();
        let rows: Vec<usize> = err.row_errors().iter().map(|e| e.row).collect();
        assert_eq!(rows, vec![2, 3, 5]);
        assert_eq!(
            err.row_errors()[2].reason,
            RowFault::NonFinite {
                column: 2,
                token: "inf".into()
            }
        );
    }

    #[test]
    fn test_all_rows_invalid() {
        let err = parse_dataset("re im\nfoo bar\n1 2 3").unwrap_err();
        match err {
            ParseError::NoValidRows(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected NoValidRows, got {other:?}"),
        }
        assert!(matches!(parse_rows(&[]), Err(ParseError::NoValidRows(_))));
    }

    #[test]
    fn test_non_uniform_rows() {
        let err = parse_dataset("1 2\n3 4 5 6").unwrap_err();
        assert!(matches!(
            err,
            ParseError::NonUniformRows {
                index: 2,
                found: 4,
                expected: 2
            }
        ));
    }

    #[test]
    fn test_header_length_mismatch() {
        let err = parse_dataset("a b c\n1 2\n3 4").unwrap_err();
        assert!(matches!(
            err,
            ParseError::HeaderLengthMismatch {
                header: 3,
                columns: 2
            }
        ));
    }

    #[test]
    fn test_parse_row_faults() {
        assert_eq!(parse_row("1"), Err(RowFault::TooFewTokens(1)));
        assert_eq!(parse_row("1 2 3"), Err(RowFault::OddTokenCount(3)));
        assert_eq!(
            parse_row("1 NaN"),
            Err(RowFault::NonFinite {
                column: 2,
                token: "NaN".into()
            })
        );
        assert_eq!(parse_row("-1.5 +2e3"), Ok(vec![-1.5, 2000.0]));
    }

    #[test]
    fn test_split_pairs_rejects_odd_width() {
        let err = split_pairs(None, vec![vec![1.0, 2.0, 3.0]], 3).unwrap_err();
        assert!(matches!(err, ParseError::OddColumnCount(3)));
    }

    #[test]
    fn test_assemble_rejects_ragged_rows() {
        let paired = PairedRows {
            header: None,
            rows: vec![vec![p(1.0, 2.0)], vec![]],
            num_pairs: 1,
            num_cols: 2,
        };
        assert!(matches!(assemble(paired), Err(ParseError::Shape(_))));
    }

    #[test]
    fn test_load_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ch1_re ch1_im ch2_re ch2_im").unwrap();
        writeln!(file, "0.1 0.2 0.3 0.4").unwrap();
        writeln!(file, "0.5 0.6 0.7 0.8").unwrap();

        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.num_pairs(), 2);
        assert_eq!(ds.len(), 2);
    }
}
