/// A sampled curve evaluated inside its domain only.
///
/// Both methods return `None` for `x` outside the sampled range.
pub trait Curve {
    fn value(&self, x: f32) -> Option<f32>;

    fn derivative(&self, x: f32) -> Option<f32>;
}
