use serde::Deserialize;

use crate::spectrum::spectrumerror::SpectrumError;

/// Parameters of the sigma-clipping continuum estimate.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContinuumParameters {
    /// Clipping half-width in units of the standard deviation.
    pub alpha: f64,
    /// Convergence tolerance is `10^-eps_exponent`.
    pub eps_exponent: f64,
    pub max_iterations: usize,
}

impl Default for ContinuumParameters {
    fn default() -> Self {
        ContinuumParameters {
            alpha: 0.5,
            eps_exponent: 20.0,
            max_iterations: 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Continuum {
    /// Median of the retained fluxes.
    pub level: f64,
    /// Population standard deviation of the retained fluxes.
    pub scatter: f64,
    pub iterations: usize,
}

fn median(values: &mut [f64]) -> f64 {
    values.sort_by(|a, b| a.total_cmp(b));
    let n = values.len();
    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    }
}

fn std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    var.sqrt()
}

/// Estimates the continuum level of `flux` by iterative sigma clipping.
///
/// Each pass drops the values outside `median ± alpha * std` and recomputes both
/// statistics. Iteration stops once the relative decrease of `std` falls below the
/// tolerance, once `std` reaches zero, or after `max_iterations` passes. A pass that
/// would drop every value is discarded.
pub fn fit_continuum(flux: &[f32], parameters: &ContinuumParameters) -> Result<Continuum, SpectrumError> {
    if flux.is_empty() {
        return Err(SpectrumError::EmptyInput);
    }

    let eps = 10f64.powf(-parameters.eps_exponent);
    let mut retained: Vec<f64> = flux.iter().map(|&v| v as f64).collect();
    let mut level = median(&mut retained);
    let mut scatter = std_dev(&retained);
    let mut iterations = 0;

    while scatter > 0.0 {
        let band = parameters.alpha * scatter;
        let clipped: Vec<f64> = retained
            .iter()
            .copied()
            .filter(|&v| v >= level - band && v <= level + band)
            .collect();
        iterations += 1;
        if clipped.is_empty() {
            break;
        }

        retained = clipped;
        let scatter_old = scatter;
        level = median(&mut retained);
        scatter = std_dev(&retained);

        if iterations >= parameters.max_iterations {
            tracing::warn!(max_iterations = parameters.max_iterations, "continuum fit did not converge");
            break;
        }
        if scatter == 0.0 || (scatter_old - scatter) / scatter <= eps {
            break;
        }
    }

    Ok(Continuum { level, scatter, iterations })
}
