use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Contract violations when calling a [`Transform`].
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TransformError {
    #[error("real and imaginary buffers differ in length ({real} vs {imag})")]
    LengthMismatch { real: usize, imag: usize },

    #[error("cannot transform an empty signal")]
    Empty,
}

/// A forward DFT working in place on split real/imaginary buffers.
///
/// Output is in natural bin order: bin 0 is DC, then ascending positive
/// frequencies, then the negative ones ascending towards zero. Any positive
/// length is accepted.
pub trait Transform {
    fn forward(&mut self, real: &mut [f64], imag: &mut [f64]) -> Result<(), TransformError>;
}

/// [`Transform`] backed by `rustfft`, reusing plans across calls.
pub struct RustFftTransform {
    planner: FftPlanner<f64>,
}

impl Default for RustFftTransform {
    fn default() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }
}

impl RustFftTransform {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transform for RustFftTransform {
    fn forward(&mut self, real: &mut [f64], imag: &mut [f64]) -> Result<(), TransformError> {
        if real.len() != imag.len() {
            return Err(TransformError::LengthMismatch {
                real: real.len(),
                imag: imag.len(),
            });
        }
        if real.is_empty() {
            return Err(TransformError::Empty);
        }

        let fft = self.planner.plan_fft_forward(real.len());
        let mut buffer: Vec<Complex<f64>> = real
            .iter()
            .zip(imag.iter())
            .map(|(&re, &im)| Complex { re, im })
            .collect();
        fft.process(&mut buffer);

        for ((re, im), c) in real.iter_mut().zip(imag.iter_mut()).zip(&buffer) {
            *re = c.re;
            *im = c.im;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &[f64], b: &[f64]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert!((x - y).abs() < 1e-9, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn test_impulse_is_flat() {
        let mut re = vec![1.0, 0.0, 0.0, 0.0, 0.0];
        let mut im = vec![0.0; 5];
        RustFftTransform::new().forward(&mut re, &mut im).unwrap();
        assert_close(&re, &[1.0; 5]);
        assert_close(&im, &[0.0; 5]);
    }

    #[test]
    fn test_complex_tone_lands_in_natural_bin() {
        // e^{-2πi k/4}: one cycle per 4 samples at negative frequency → bin 3.
        let mut re = vec![1.0, 0.0, -1.0, 0.0];
        let mut im = vec![0.0, -1.0, 0.0, 1.0];
        RustFftTransform::new().forward(&mut re, &mut im).unwrap();
        assert_close(&re, &[0.0, 0.0, 0.0, 4.0]);
        assert_close(&im, &[0.0; 4]);
    }

    #[test]
    fn test_contract_violations() {
        let mut t = RustFftTransform::new();
        assert_eq!(
            t.forward(&mut [1.0, 2.0], &mut [0.0]),
            Err(TransformError::LengthMismatch { real: 2, imag: 1 })
        );
        assert_eq!(t.forward(&mut [], &mut []), Err(TransformError::Empty));
    }
}
