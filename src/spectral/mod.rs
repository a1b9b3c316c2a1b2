//! Frequency-bin labels and bin reordering for DFT output.
//!
//! The transform itself lives behind the [`transform::Transform`] trait; this
//! module only knows how natural-order bins map to frequencies and how to move
//! the zero-frequency bin to the centre.

pub mod spectrum;
pub mod transform;

pub use spectrum::Spectrum;
pub use transform::{RustFftTransform, Transform, TransformError};

/// Frequency in Hz of each bin of an `n`-point DFT sampled at `sample_rate`,
/// in natural (non-centred) order.
///
/// Bin `i` maps to `i * fs / n` while `i` is below the real half `n / 2.0`, and
/// to `(i - n) * fs / n` after it. For odd `n` this puts `(n - 1) / 2` positive
/// bins before the negative ones; for even `n` the Nyquist bin is negative.
/// `n == 0` gives an empty vector.
pub fn fftfreq(n: usize, sample_rate: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let step = sample_rate / n as f64;
    let half = n as f64 / 2.0;
    (0..n)
        .map(|i| {
            let k = if (i as f64) < half {
                i as i64
            } else {
                i as i64 - n as i64
            };
            k as f64 * step
        })
        .collect()
}

/// Centre the zero-frequency bin: the last `n / 2` (rounded down) elements
/// move in front of the rest.
///
/// Equivalently the sequence is split at `n / 2` rounded *up*, which is what
/// keeps `fftshift(fftfreq(n, fs))` ascending for odd `n`. Generic so
/// frequency labels and spectrum values always go through the same split.
pub fn fftshift<T: Clone>(seq: &[T]) -> Vec<T> {
    rotate_left(seq, seq.len().div_ceil(2))
}

/// Undo [`fftshift`]: the last `n / 2` rounded up move back to the front.
pub fn ifftshift<T: Clone>(seq: &[T]) -> Vec<T> {
    rotate_left(seq, seq.len() / 2)
}

fn rotate_left<T: Clone>(seq: &[T], split: usize) -> Vec<T> {
    let (head, tail) = seq.split_at(split.min(seq.len()));
    tail.iter().chain(head).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ReImPair;
    use proptest::prelude::*;

    #[test]
    fn test_fftfreq_odd() {
        assert_eq!(fftfreq(5, 100.0), vec![0.0, 20.0, 40.0, -40.0, -20.0]);
        assert_eq!(
            fftshift(&fftfreq(5, 100.0)),
            vec![-40.0, -20.0, 0.0, 20.0, 40.0]
        );
    }

    #[test]
    fn test_fftfreq_even() {
        let f = fftfreq(10, 50.0);
        assert_eq!(
            f,
            vec![0.0, 5.0, 10.0, 15.0, 20.0, -25.0, -20.0, -15.0, -10.0, -5.0]
        );
        assert_eq!(
            fftshift(&f),
            vec![-25.0, -20.0, -15.0, -10.0, -5.0, 0.0, 5.0, 10.0, 15.0, 20.0]
        );
    }

    #[test]
    fn test_fftfreq_small() {
        assert!(fftfreq(0, 10.0).is_empty());
        assert_eq!(fftfreq(1, 10.0), vec![0.0]);
        assert_eq!(fftfreq(2, 10.0), vec![0.0, -5.0]);
    }

    #[test]
    fn test_fftshift_pairs_uses_same_split() {
        let bins: Vec<ReImPair> = (0..5).map(|i| ReImPair::new(i as f64, -(i as f64))).collect();
        let shifted = fftshift(&bins);
        let order: Vec<f64> = shifted.iter().map(|p| p.re).collect();
        assert_eq!(order, vec![3.0, 4.0, 0.0, 1.0, 2.0]);
        assert_eq!(ifftshift(&shifted), bins);
    }

    #[test]
    fn test_fftshift_even_halves_swap() {
        assert_eq!(fftshift(&[0, 1, 2, 3]), vec![2, 3, 0, 1]);
        assert_eq!(ifftshift(&[2, 3, 0, 1]), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_shift_empty_and_single() {
        assert!(fftshift::<f64>(&[]).is_empty());
        assert_eq!(fftshift(&[7]), vec![7]);
        assert_eq!(ifftshift(&[7]), vec![7]);
    }

    proptest! {
        #[test]
        fn prop_shifted_labels_ascend(n in 1usize..512, fs in 1e-3f64..1e6) {
            let shifted = fftshift(&fftfreq(n, fs));
            prop_assert_eq!(shifted.len(), n);
            for w in shifted.windows(2) {
                prop_assert!(w[0] <= w[1], "{} > {}", w[0], w[1]);
            }
        }

        #[test]
        fn prop_ifftshift_inverts(data in proptest::collection::vec(any::<i32>(), 0..64)) {
            prop_assert_eq!(ifftshift(&fftshift(&data)), data);
        }
    }
}
