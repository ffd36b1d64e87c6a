use serde::Deserialize;

use crate::math::curve::curve::Curve;
use crate::math::curve::nonparametriccurve::piecewiselinear::PiecewiseLinear;
use crate::spectrum::spectrum::Spectrum;
use crate::spectrum::spectrumerror::SpectrumError;

/// What to do with a sample point whose flux is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroSamplePolicy {
    /// Divide anyway; the statistic becomes infinite or NaN.
    #[default]
    Propagate,
    Skip,
    Error,
}

// The term is formed in f64 and the sum narrowed back to f32 after each step.
#[inline]
fn accumulate(chi: f32, interpolated: f32, observed: f32) -> f32 {
    let diff = (interpolated - observed) as f64;
    (chi as f64 + diff * diff / observed as f64) as f32
}

/// Chi-squared between a reference curve and a sample curve.
///
/// Each sample point is located on the reference grid `ref_x`. The reference flux is
/// linearly interpolated there and `(interpolated - sample_y)^2 / sample_y` is added.
/// Sample points outside `[ref_x[0], ref_x[last]]` are skipped. The divisor is the
/// *sample* flux; a zero sample flux yields inf or NaN.
///
/// `ref_x` must be sorted in non-decreasing order.
pub fn chi2(ref_x: &[f32], ref_y: &[f32], sample_x: &[f32], sample_y: &[f32]) -> f32 {
    let reference = PiecewiseLinear::new(ref_x, ref_y);
    sample_x
        .iter()
        .zip(sample_y.iter())
        .fold(0.0, |chi, (&x, &observed)| match reference.value(x) {
            Some(interpolated) => accumulate(chi, interpolated, observed),
            None => chi,
        })
}

/// Chi-squared over validated spectra, with explicit handling of zero sample flux.
pub fn chi2_checked(
    reference: &Spectrum,
    sample: &Spectrum,
    policy: ZeroSamplePolicy,
) -> Result<f32, SpectrumError> {
    let curve = reference.as_curve();
    let mut chi = 0.0;
    for (index, (&x, &observed)) in sample.x().iter().zip(sample.y().iter()).enumerate() {
        let Some(interpolated) = curve.value(x) else {
            continue;
        };
        if observed == 0.0 {
            match policy {
                ZeroSamplePolicy::Propagate => {}
                ZeroSamplePolicy::Skip => continue,
                ZeroSamplePolicy::Error => {
                    return Err(SpectrumError::DegenerateSample { index });
                }
            }
        }
        chi = accumulate(chi, interpolated, observed);
    }
    Ok(chi)
}
