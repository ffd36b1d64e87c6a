use crate::math::curve::curve::Curve;
use crate::math::curve::nonparametriccurve::nonparametriccurve::Point2D;
use crate::spectrum::spectrum::Spectrum;

/// Residual curve `(x, sample_y - interpolated)` over the sample points that fall
/// inside the reference grid, in sample order.
///
/// Returns `None` when no sample point lands on the reference grid.
pub fn residuals(reference: &Spectrum, sample: &Spectrum) -> Option<Vec<Point2D>> {
    let curve = reference.as_curve();
    let points: Vec<Point2D> = sample
        .x()
        .iter()
        .zip(sample.y().iter())
        .filter_map(|(&x, &observed)| {
            curve
                .value(x)
                .map(|interpolated| Point2D::new(x, observed - interpolated))
        })
        .collect();

    if points.is_empty() {
        None
    } else {
        Some(points)
    }
}
