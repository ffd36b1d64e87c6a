use std::f64::consts::{LN_2, PI};

use crate::spectrum::spectrumerror::SpectrumError;

/// Largest kernel span accepted, in samples.
pub const MAX_KERNEL_TAPS: usize = 1 << 20;

/// Converts a full width at half maximum to a standard deviation.
pub fn fwhm_to_sigma(fwhm: f64) -> f64 {
    fwhm / (2.0 * (2.0 * LN_2).sqrt())
}

/// Discrete, normalised Gaussian sampled at integer offsets.
///
/// The kernel spans `8 * sigma` samples, rounded up to an odd count so it has a
/// centre tap. Widths spanning `MAX_KERNEL_TAPS` samples or more are rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel {
    taps: Vec<f64>,
}

impl GaussianKernel {
    pub fn new(sigma: f64) -> Result<GaussianKernel, SpectrumError> {
        let span = (8.0 * sigma).ceil();
        if !(sigma.is_finite() && sigma > 0.0 && span < MAX_KERNEL_TAPS as f64) {
            return Err(SpectrumError::InvalidKernel { fwhm: (sigma / fwhm_to_sigma(1.0)) as f32 });
        }

        let mut size = span as usize;
        if size % 2 == 0 {
            size += 1;
        }
        let half = (size / 2) as f64;
        let amplitude = 1.0 / ((2.0 * PI).sqrt() * sigma);

        let mut taps: Vec<f64> = (0..size)
            .map(|i| {
                let offset = i as f64 - half;
                amplitude * (-0.5 * offset * offset / (sigma * sigma)).exp()
            })
            .collect();
        let total: f64 = taps.iter().sum();
        taps.iter_mut().for_each(|t| *t /= total);

        Ok(GaussianKernel { taps })
    }

    pub fn from_fwhm(fwhm: f64) -> Result<GaussianKernel, SpectrumError> {
        if !(fwhm.is_finite() && fwhm > 0.0) {
            return Err(SpectrumError::InvalidKernel { fwhm: fwhm as f32 });
        }
        GaussianKernel::new(fwhm_to_sigma(fwhm))
    }

    pub fn taps(&self) -> &[f64] {
        &self.taps
    }

    /// Convolves `signal` with the kernel. Samples beyond either edge count as zero,
    /// so the output is the same length as the input.
    pub fn convolve(&self, signal: &[f32]) -> Vec<f32> {
        let half = self.taps.len() / 2;
        let n = signal.len();
        (0..n)
            .map(|i| {
                self.taps
                    .iter()
                    .enumerate()
                    .filter_map(|(k, &tap)| {
                        (i + k)
                            .checked_sub(half)
                            .filter(|&j| j < n)
                            .map(|j| tap * signal[j] as f64)
                    })
                    .sum::<f64>() as f32
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_is_odd_symmetric_and_normalised() {
        let kernel = GaussianKernel::new(1.5).unwrap();
        let taps = kernel.taps();
        assert_eq!(taps.len(), 13);
        let total: f64 = taps.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
        for i in 0..taps.len() / 2 {
            assert!((taps[i] - taps[taps.len() - 1 - i]).abs() < 1e-15);
        }
        assert!(taps[6] > taps[5]);
    }

    #[test]
    fn narrow_kernel_is_identity() {
        let kernel = GaussianKernel::new(0.01).unwrap();
        assert_eq!(kernel.taps(), &[1.0]);
        assert_eq!(kernel.convolve(&[1.0, 2.0, 3.0]), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn convolution_preserves_interior_flux_and_fades_at_edges() {
        let signal = vec![1.0f32; 50];
        let smoothed = GaussianKernel::new(1.0).unwrap().convolve(&signal);
        assert_eq!(smoothed.len(), 50);
        assert!((smoothed[25] - 1.0).abs() < 1e-6);
        assert!(smoothed[0] > 0.65 && smoothed[0] < 0.75);
    }

    #[test]
    fn rejects_bad_widths() {
        assert!(GaussianKernel::from_fwhm(-1.0).is_err());
        assert!(GaussianKernel::from_fwhm(f64::NAN).is_err());
        assert!(GaussianKernel::new(0.0).is_err());
    }

    #[test]
    fn rejects_widths_beyond_tap_limit() {
        assert!(matches!(
            GaussianKernel::from_fwhm(1e30),
            Err(SpectrumError::InvalidKernel { .. })
        ));
        assert!(GaussianKernel::new(MAX_KERNEL_TAPS as f64 / 8.0).is_err());
        let widest = GaussianKernel::new((MAX_KERNEL_TAPS - 2) as f64 / 8.0).unwrap();
        assert_eq!(widest.taps().len(), MAX_KERNEL_TAPS - 1);
    }

    #[test]
    fn fwhm_conversion() {
        let sigma = fwhm_to_sigma(2.354820045);
        assert!((sigma - 1.0).abs() < 1e-6);
    }
}
