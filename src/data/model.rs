use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ReImPair – one complex sample
// ---------------------------------------------------------------------------

/// A (real, imaginary) pair. Both parts are finite once inside a [`Dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReImPair {
    pub re: f64,
    pub im: f64,
}

impl ReImPair {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Euclidean magnitude `sqrt(re² + im²)`.
    pub fn norm(&self) -> f64 {
        self.re.hypot(self.im)
    }
}

impl From<(f64, f64)> for ReImPair {
    fn from((re, im): (f64, f64)) -> Self {
        Self { re, im }
    }
}

/// One input data line split into consecutive (re, im) pairs.
pub type PairedRow = Vec<ReImPair>;

/// Group a flat numeric row into consecutive pairs.
///
/// A trailing odd value is ignored; callers validate the length first.
pub fn pair_row(values: &[f64]) -> PairedRow {
    values
        .chunks_exact(2)
        .map(|c| ReImPair::new(c[0], c[1]))
        .collect()
}

/// Inverse of [`pair_row`].
pub fn flatten_row(row: &[ReImPair]) -> Vec<f64> {
    row.iter().flat_map(|p| [p.re, p.im]).collect()
}

// ---------------------------------------------------------------------------
// Dataset – the validated, immutable parse result
// ---------------------------------------------------------------------------

/// A uniform matrix of complex samples: one row per input line (sample-time
/// order), `num_pairs` complex columns per row.
///
/// Fields are private so a `Dataset` can only come out of the parser with its
/// shape invariants intact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    header: Option<Vec<String>>,
    rows: Vec<PairedRow>,
    num_pairs: usize,
    num_cols: usize,
}

impl Dataset {
    /// Only the loader's assembler calls this, after checking the shape.
    pub(crate) fn from_parts(
        header: Option<Vec<String>>,
        rows: Vec<PairedRow>,
        num_pairs: usize,
    ) -> Self {
        Dataset {
            header,
            rows,
            num_pairs,
            num_cols: num_pairs * 2,
        }
    }

    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    pub fn rows(&self) -> &[PairedRow] {
        &self.rows
    }

    /// Complex values per row.
    pub fn num_pairs(&self) -> usize {
        self.num_pairs
    }

    /// Numeric tokens per input line (always `2 * num_pairs`).
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Number of samples (rows).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false` for a parsed dataset; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The `k`-th complex column in sample-time order, or `None` when out of range.
    pub fn column(&self, k: usize) -> Option<Vec<ReImPair>> {
        if k >= self.num_pairs {
            return None;
        }
        Some(self.rows.iter().map(|row| row[k]).collect())
    }

    /// The `k`-th column as separate real and imaginary buffers, the layout the
    /// transform collaborator expects.
    pub fn split_column(&self, k: usize) -> Option<(Vec<f64>, Vec<f64>)> {
        let col = self.column(k)?;
        Some(col.iter().map(|p| (p.re, p.im)).unzip())
    }

    /// Display label for pair column `k`: header tokens `re/im` when a header
    /// is present, otherwise `pair k`.
    pub fn column_label(&self, k: usize) -> String {
        match &self.header {
            Some(h) if 2 * k + 1 < h.len() => format!("{} / {}", h[2 * k], h[2 * k + 1]),
            _ => format!("pair {k}"),
        }
    }
}
