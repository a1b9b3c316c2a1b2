use log::debug;
use serde::Serialize;

use super::transform::{Transform, TransformError};
use super::{fftfreq, fftshift};
use crate::config::{AnalysisConfig, ConfigError};
use crate::data::model::{Dataset, ReImPair};

/// Errors turning a dataset column into a [`Spectrum`].
#[derive(Debug, thiserror::Error)]
pub enum SpectrumError {
    #[error("column {column} out of range (dataset has {num_pairs} pairs)")]
    ColumnOutOfRange { column: usize, num_pairs: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// The transform of one dataset column, ready for plotting.
///
/// `frequencies`, `magnitudes_db` and `bins` always have the same length and
/// index `k` of each refers to the same DFT bin, centred or not.
#[derive(Debug, Clone, Serialize)]
pub struct Spectrum {
    pub frequencies: Vec<f64>,
    pub magnitudes_db: Vec<f64>,
    pub bins: Vec<ReImPair>,
    pub centered: bool,
}

impl Spectrum {
    /// Transform column `config.column` of `dataset` and label its bins.
    pub fn compute(
        dataset: &Dataset,
        config: &AnalysisConfig,
        transform: &mut dyn Transform,
    ) -> Result<Self, SpectrumError> {
        config.validate()?;
        let (mut real, mut imag) = dataset.split_column(config.column).ok_or(
            SpectrumError::ColumnOutOfRange {
                column: config.column,
                num_pairs: dataset.num_pairs(),
            },
        )?;

        transform.forward(&mut real, &mut imag)?;

        let n = real.len();
        let bins: Vec<ReImPair> = real
            .into_iter()
            .zip(imag)
            .map(ReImPair::from)
            .collect();
        let frequencies = fftfreq(n, config.sample_rate);
        debug!(
            "computed {n}-point spectrum of column {} at {} Hz",
            config.column, config.sample_rate
        );

        Ok(Self::from_bins(frequencies, bins, config.db_floor, config.centered))
    }

    /// Build from natural-order bins and their labels, optionally centring both.
    pub fn from_bins(
        frequencies: Vec<f64>,
        bins: Vec<ReImPair>,
        db_floor: f64,
        centered: bool,
    ) -> Self {
        let (frequencies, bins) = if centered {
            (fftshift(&frequencies), fftshift(&bins))
        } else {
            (frequencies, bins)
        };
        let magnitudes_db = bins.iter().map(|b| to_db(b.norm(), db_floor)).collect();
        Spectrum {
            frequencies,
            magnitudes_db,
            bins,
            centered,
        }
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// `[frequency, dB]` points for the plot.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.frequencies
            .iter()
            .zip(&self.magnitudes_db)
            .map(|(&f, &m)| [f, m])
            .collect()
    }

    /// Bin with the largest magnitude as `(frequency, dB)`.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.frequencies
            .iter()
            .zip(&self.magnitudes_db)
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(&f, &m)| (f, m))
    }
}

/// `20 log10(magnitude)`, never below `floor`.
pub fn to_db(magnitude: f64, floor: f64) -> f64 {
    let db = 20.0 * magnitude.log10();
    if db.is_nan() || db < floor {
        floor
    } else {
        db
    }
}
