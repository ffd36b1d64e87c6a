use crate::math::curve::curve::Curve;
use crate::math::curve::nonparametriccurve::nonparametriccurve::{
    NonparametricCurve,
    Point2D
};
use crate::math::search::bisection::bisec;

/// Piecewise-linear view over parallel `x`/`y` samples.
///
/// Borrows the samples; nothing is copied or precomputed. Only the common prefix of
/// `x_data` and `y_data` is used, so mismatched lengths never index out of bounds.
pub struct PiecewiseLinear<'a> {
    x_data: &'a [f32],
    y_data: &'a [f32],
}

impl<'a> PiecewiseLinear<'a> {
    pub fn new(x_data: &'a [f32], y_data: &'a [f32]) -> PiecewiseLinear<'a> {
        let len = x_data.len().min(y_data.len());
        PiecewiseLinear {
            x_data: &x_data[..len],
            y_data: &y_data[..len],
        }
    }

    pub fn len(&self) -> usize {
        self.x_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_data.is_empty()
    }

    /// Left bracket index of the segment containing `x`.
    pub fn find_segment(&self, x: f32) -> Option<usize> {
        bisec(self.x_data, x)
    }

    fn segment(&self, i: usize) -> (Point2D, Point2D) {
        (
            Point2D::new(self.x_data[i], self.y_data[i]),
            Point2D::new(self.x_data[i + 1], self.y_data[i + 1]),
        )
    }
}

impl NonparametricCurve for PiecewiseLinear<'_> {
    fn points(&self) -> Vec<Point2D> {
        self.x_data
            .iter()
            .zip(self.y_data.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect()
    }

    fn min_x(&self) -> f32 {
        self.x_data.first().copied().unwrap_or(f32::NAN)
    }

    fn max_x(&self) -> f32 {
        self.x_data.last().copied().unwrap_or(f32::NAN)
    }
}

impl Curve for PiecewiseLinear<'_> {
    fn value(&self, x: f32) -> Option<f32> {
        let i = self.find_segment(x)?;
        let (lhs, rhs) = self.segment(i);
        Some(Point2D::interpolate(&lhs, &rhs, x))
    }

    fn derivative(&self, x: f32) -> Option<f32> {
        let i = self.find_segment(x)?;
        let (lhs, rhs) = self.segment(i);
        Some(Point2D::slope(&lhs, &rhs))
    }
}
