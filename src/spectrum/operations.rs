use serde::Deserialize;

use crate::math::convolution::gaussiankernel::GaussianKernel;
use crate::spectrum::spectrum::Spectrum;
use crate::spectrum::spectrumerror::SpectrumError;

/// Wavelength shift, continuum scale and instrumental broadening, applied in that order.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpectrumOperations {
    pub shift: f32,
    pub continuum: f32,
    /// Gaussian FWHM in samples; zero disables the convolution.
    pub convolution_fwhm: f32,
}

impl Default for SpectrumOperations {
    fn default() -> Self {
        SpectrumOperations {
            shift: 0.0,
            continuum: 1.0,
            convolution_fwhm: 0.0,
        }
    }
}

impl Spectrum {
    pub fn shift(&mut self, delta: f32) -> Result<(), SpectrumError> {
        if !delta.is_finite() {
            return Err(SpectrumError::InvalidShift { delta });
        }
        self.x_mut().iter_mut().for_each(|x| *x += delta);
        Ok(())
    }

    pub fn scale(&mut self, factor: f32) {
        self.y_mut().iter_mut().for_each(|y| *y *= factor);
    }

    pub fn convolve(&mut self, fwhm: f32) -> Result<(), SpectrumError> {
        let kernel = GaussianKernel::from_fwhm(fwhm as f64)?;
        let smoothed = kernel.convolve(self.y());
        self.y_mut().copy_from_slice(&smoothed);
        Ok(())
    }

    /// Applies `operations` in place. The spectrum is left untouched on error.
    pub fn apply(&mut self, operations: &SpectrumOperations) -> Result<(), SpectrumError> {
        if !operations.shift.is_finite() {
            return Err(SpectrumError::InvalidShift { delta: operations.shift });
        }
        let kernel = if operations.convolution_fwhm != 0.0 {
            Some(GaussianKernel::from_fwhm(operations.convolution_fwhm as f64)?)
        } else {
            None
        };
        tracing::debug!(?operations, "applying spectrum operations");

        self.shift(operations.shift)?;
        self.scale(operations.continuum);
        if let Some(kernel) = kernel {
            let smoothed = kernel.convolve(self.y());
            self.y_mut().copy_from_slice(&smoothed);
        }
        Ok(())
    }
}
