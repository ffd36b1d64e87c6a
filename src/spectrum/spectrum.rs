use crate::math::curve::nonparametriccurve::piecewiselinear::PiecewiseLinear;
use crate::math::search::bisection::bisec;
use crate::spectrum::spectrumerror::SpectrumError;

/// Validated spectrum: parallel wavelength/flux samples with non-decreasing, finite
/// wavelengths and at least two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    x: Vec<f32>,
    y: Vec<f32>,
}

impl Spectrum {
    pub fn new(x: Vec<f32>, y: Vec<f32>) -> Result<Spectrum, SpectrumError> {
        if x.len() != y.len() {
            return Err(SpectrumError::LengthMismatch { x: x.len(), y: y.len() });
        }
        if x.len() < 2 {
            return Err(SpectrumError::TooShort { len: x.len() });
        }
        if let Some(index) = x.iter().position(|v| !v.is_finite()) {
            return Err(SpectrumError::NonFiniteWavelength { index });
        }
        if let Some(index) = (1..x.len()).find(|&i| x[i] < x[i - 1]) {
            return Err(SpectrumError::Unsorted { index });
        }
        Ok(Spectrum { x, y })
    }

    pub fn from_points(points: &[(f32, f32)]) -> Result<Spectrum, SpectrumError> {
        let (x, y): (Vec<f32>, Vec<f32>) = points.iter().copied().unzip();
        Spectrum::new(x, y)
    }

    pub fn x(&self) -> &[f32] {
        &self.x
    }

    pub fn y(&self) -> &[f32] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn min_x(&self) -> f32 {
        self.x[0]
    }

    pub fn max_x(&self) -> f32 {
        self.x[self.x.len() - 1]
    }

    pub fn as_curve(&self) -> PiecewiseLinear<'_> {
        PiecewiseLinear::new(&self.x, &self.y)
    }

    /// Left bracket index of the cell containing `query`.
    pub fn locate(&self, query: f32) -> Result<usize, SpectrumError> {
        bisec(&self.x, query).ok_or(SpectrumError::OutOfRange {
            query,
            min: self.min_x(),
            max: self.max_x(),
        })
    }

    pub(crate) fn x_mut(&mut self) -> &mut [f32] {
        &mut self.x
    }

    pub(crate) fn y_mut(&mut self) -> &mut [f32] {
        &mut self.y
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> Result<Spectrum, SpectrumError> {
        Spectrum::new(self.x[start..end].to_vec(), self.y[start..end].to_vec())
    }
}
