use std::io::Write;

use serde::Serialize;

use crate::data::model::Dataset;
use crate::spectral::Spectrum;

/// Errors writing exports.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
struct SpectrumRecord {
    frequency_hz: f64,
    magnitude_db: f64,
    re: f64,
    im: f64,
}

/// Write one CSV row per bin, in the spectrum's current (shifted or natural) order.
pub fn spectrum_csv<W: Write>(writer: W, spectrum: &Spectrum) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for ((&frequency_hz, &magnitude_db), bin) in spectrum
        .frequencies
        .iter()
        .zip(&spectrum.magnitudes_db)
        .zip(&spectrum.bins)
    {
        wtr.serialize(SpectrumRecord {
            frequency_hz,
            magnitude_db,
            re: bin.re,
            im: bin.im,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Pretty-printed JSON of the whole dataset.
pub fn dataset_json<W: Write>(writer: W, dataset: &Dataset) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, dataset)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_dataset;
    use crate::data::model::ReImPair;

    #[test]
    fn test_spectrum_csv() {
        let s = Spectrum::from_bins(
            vec![0.0, -1.0],
            vec![ReImPair::new(1.0, 0.0), ReImPair::new(0.0, 10.0)],
            -100.0,
            true,
        );
        let mut out = Vec::new();
        spectrum_csv(&mut out, &s).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "frequency_hz,magnitude_db,re,im");
        assert_eq!(lines[1], "-1.0,20.0,0.0,10.0");
        assert_eq!(lines[2], "0.0,0.0,1.0,0.0");
    }

    #[test]
    fn test_dataset_json() {
        let ds = parse_dataset("re im\n1 2").unwrap();
        let mut out = Vec::new();
        dataset_json(&mut out, &ds).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["num_pairs"], 1);
        assert_eq!(value["num_cols"], 2);
        assert_eq!(value["header"][1], "im");
        assert_eq!(value["rows"][0][0]["re"], 1.0);
    }
}
