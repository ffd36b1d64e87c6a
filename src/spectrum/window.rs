use crate::math::search::bisection::bisec;
use crate::math::statistics::continuum::{
    fit_continuum,
    ContinuumParameters
};
use crate::spectrum::spectrum::Spectrum;
use crate::spectrum::spectrumerror::SpectrumError;

impl Spectrum {
    /// Restricts the spectrum to `[center - half_width, center + half_width]`.
    ///
    /// Starts at the cell containing the lower edge (or at 0 if the lower edge is
    /// below the grid). Ends after the left point of the cell containing the upper
    /// edge (or at the last point if the upper edge is above the grid).
    pub fn cut(&self, center: f32, half_width: f32) -> Result<Spectrum, SpectrumError> {
        let lower = center - half_width;
        let upper = center + half_width;
        if !(lower <= self.max_x() && upper >= self.min_x() && lower <= upper) {
            return Err(SpectrumError::WindowOutsideGrid { lower, upper });
        }

        let start = bisec(self.x(), lower).unwrap_or(0);
        let end = bisec(self.x(), upper).map_or(self.len(), |i| i + 1);
        tracing::debug!(lower, upper, start, end, "cut spectrum window");
        self.slice(start, end)
    }
}

/// Index range of the absorption line around `center`.
///
/// Walks outwards from the cell containing `center` until the flux recovers to
/// `threshold` times the continuum level, or the spectrum edge is reached.
pub fn line_boundaries(
    spectrum: &Spectrum,
    center: f32,
    threshold: f64,
    parameters: &ContinuumParameters,
) -> Result<(usize, usize), SpectrumError> {
    let position = spectrum.locate(center)?;
    let continuum = fit_continuum(spectrum.y(), parameters)?;
    let cutoff = continuum.level * threshold;
    let flux = spectrum.y();
    let last = flux.len() - 1;

    let mut min_line = position;
    while min_line > 0 {
        min_line -= 1;
        if flux[min_line] as f64 >= cutoff {
            break;
        }
    }

    let mut max_line = position;
    while max_line < last {
        max_line += 1;
        if flux[max_line] as f64 >= cutoff {
            break;
        }
    }

    Ok((min_line, max_line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Spectrum {
        let x: Vec<f32> = (0..n).map(|i| i as f32).collect();
        let y = vec![1.0; n];
        Spectrum::new(x, y).unwrap()
    }

    #[test]
    fn cut_inside_grid() {
        let window = ramp(11).cut(5.0, 1.0).unwrap();
        assert_eq!(window.x(), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn cut_clamps_at_edges() {
        let spectrum = ramp(11);
        assert_eq!(spectrum.cut(0.5, 2.0).unwrap().x(), &[0.0, 1.0, 2.0]);
        assert_eq!(spectrum.cut(9.5, 2.0).unwrap().x(), &[7.0, 8.0, 9.0, 10.0]);
        assert_eq!(spectrum.cut(5.0, 100.0).unwrap().len(), 11);
    }

    #[test]
    fn cut_outside_grid_fails() {
        let spectrum = ramp(11);
        assert!(matches!(
            spectrum.cut(20.0, 1.0),
            Err(SpectrumError::WindowOutsideGrid { .. })
        ));
        assert!(matches!(
            spectrum.cut(5.0, -1.0),
            Err(SpectrumError::WindowOutsideGrid { .. })
        ));
    }

    #[test]
    fn cut_too_narrow_fails() {
        assert!(matches!(
            ramp(11).cut(5.5, 0.1),
            Err(SpectrumError::TooShort { len: 1 })
        ));
    }

    #[test]
    fn finds_line_walls() {
        let x: Vec<f32> = (0..30).map(|i| i as f32).collect();
        let mut y = vec![1.0f32; 30];
        for (i, depth) in [(12, 0.8), (13, 0.5), (14, 0.3), (15, 0.5), (16, 0.9)] {
            y[i] = depth;
        }
        let spectrum = Spectrum::new(x, y).unwrap();
        let bounds = line_boundaries(&spectrum, 14.0, 0.98, &ContinuumParameters::default()).unwrap();
        assert_eq!(bounds, (11, 17));
    }

    #[test]
    fn line_walk_stops_at_edges() {
        let x: Vec<f32> = (0..20).map(|i| i as f32).collect();
        let mut y = vec![1.0f32; 20];
        y[0] = 0.2;
        y[1] = 0.3;
        let spectrum = Spectrum::new(x, y).unwrap();
        let bounds = line_boundaries(&spectrum, 1.0, 0.98, &ContinuumParameters::default()).unwrap();
        assert_eq!(bounds, (0, 2));
    }

    #[test]
    fn line_center_outside_grid() {
        assert!(matches!(
            line_boundaries(&ramp(5), 7.0, 0.98, &ContinuumParameters::default()),
            Err(SpectrumError::OutOfRange { .. })
        ));
    }
}
