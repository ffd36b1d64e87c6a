use std::io::Read;

use serde::Deserialize;

use crate::math::statistics::chisquared::{
    chi2_checked,
    ZeroSamplePolicy
};
use crate::math::statistics::continuum::{
    fit_continuum,
    Continuum,
    ContinuumParameters
};
use crate::spectrum::operations::SpectrumOperations;
use crate::spectrum::spectrum::Spectrum;
use crate::spectrum::spectrumerror::SpectrumError;
use crate::spectrum::window::line_boundaries;

const DEFAULT_CUT_HALF_WIDTH: f32 = 1.0;
const DEFAULT_LINE_THRESHOLD: f64 = 0.98;

/// Parameter bundle for spectrum comparison. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub continuum: ContinuumParameters,
    pub zero_sample_policy: ZeroSamplePolicy,
    pub operations: SpectrumOperations,
    pub cut_half_width: f32,
    pub line_threshold: f64,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            continuum: ContinuumParameters::default(),
            zero_sample_policy: ZeroSamplePolicy::default(),
            operations: SpectrumOperations::default(),
            cut_half_width: DEFAULT_CUT_HALF_WIDTH,
            line_threshold: DEFAULT_LINE_THRESHOLD,
        }
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Configuration, SpectrumError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_value(json_value: serde_json::Value) -> Result<Configuration, SpectrumError> {
        Ok(serde_json::from_value(json_value)?)
    }

    /// Chi-squared of `sample` against `reference` under the configured zero-flux policy.
    pub fn compare(&self, reference: &Spectrum, sample: &Spectrum) -> Result<f32, SpectrumError> {
        chi2_checked(reference, sample, self.zero_sample_policy)
    }

    /// Copy of `spectrum` with the configured operations applied.
    pub fn prepare(&self, spectrum: &Spectrum) -> Result<Spectrum, SpectrumError> {
        let mut prepared = spectrum.clone();
        prepared.apply(&self.operations)?;
        Ok(prepared)
    }

    pub fn cut(&self, spectrum: &Spectrum, center: f32) -> Result<Spectrum, SpectrumError> {
        spectrum.cut(center, self.cut_half_width)
    }

    pub fn continuum(&self, spectrum: &Spectrum) -> Result<Continuum, SpectrumError> {
        fit_continuum(spectrum.y(), &self.continuum)
    }

    pub fn line_boundaries(&self, spectrum: &Spectrum, center: f32) -> Result<(usize, usize), SpectrumError> {
        line_boundaries(spectrum, center, self.line_threshold, &self.continuum)
    }
}
