#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    x: f32,
    y: f32
}

impl Point2D {
    pub fn new(x: f32, y: f32) -> Point2D {
        Point2D { x, y }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn slope(lhs_pt: &Point2D, rhs_pt: &Point2D) -> f32 {
        (rhs_pt.y - lhs_pt.y) / (rhs_pt.x - lhs_pt.x)
    }

    /// Linear blend between `lhs_pt` and `rhs_pt` evaluated at `x`.
    ///
    /// Evaluated as `y0 + slope * (x - x0)`, in that order, so a query on `lhs_pt`
    /// returns `lhs_pt.y()` exactly.
    pub fn interpolate(lhs_pt: &Point2D, rhs_pt: &Point2D, x: f32) -> f32 {
        lhs_pt.y + Point2D::slope(lhs_pt, rhs_pt) * (x - lhs_pt.x)
    }
}

pub trait NonparametricCurve {
    fn points(&self) -> Vec<Point2D>;

    fn min_x(&self) -> f32;

    fn max_x(&self) -> f32;
}

#[cfg(test)]
mod tests {
    use super::Point2D;

    #[test]
    fn interpolate_hits_nodes_and_midpoints() {
        let lhs = Point2D::new(2.0, 20.0);
        let rhs = Point2D::new(3.0, 30.0);
        assert_eq!(Point2D::interpolate(&lhs, &rhs, 2.0), 20.0);
        assert_eq!(Point2D::interpolate(&lhs, &rhs, 2.5), 25.0);
        assert_eq!(Point2D::slope(&lhs, &rhs), 10.0);
    }
}
