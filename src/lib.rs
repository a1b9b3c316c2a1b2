//! Turn whitespace-delimited text dumps of complex samples into a validated
//! dataset, and label and centre the bins of its Fourier transform.
//!
//! ```
//! use phasorscope::data::parse_dataset;
//! use phasorscope::spectral::{fftfreq, fftshift};
//!
//! let ds = parse_dataset("re im\n1 0\n0 1\n-1 0\n0 -1").unwrap();
//! assert_eq!(ds.num_pairs(), 1);
//!
//! let labels = fftshift(&fftfreq(ds.len(), 8.0));
//! assert_eq!(labels, vec![-4.0, -2.0, 0.0, 2.0]);
//! ```

pub mod config;
pub mod data;
pub mod export;
pub mod spectral;
