use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpectrumError {
    #[error("wavelength and flux lengths differ ({x} vs {y})")]
    LengthMismatch { x: usize, y: usize },
    #[error("spectrum needs at least 2 points, got {len}")]
    TooShort { len: usize },
    #[error("wavelength at index {index} is not finite")]
    NonFiniteWavelength { index: usize },
    #[error("wavelengths decrease at index {index}")]
    Unsorted { index: usize },
    #[error("{query} lies outside [{min}, {max}]")]
    OutOfRange { query: f32, min: f32, max: f32 },
    #[error("window [{lower}, {upper}] does not overlap the spectrum")]
    WindowOutsideGrid { lower: f32, upper: f32 },
    #[error("sample flux is zero at index {index}")]
    DegenerateSample { index: usize },
    #[error("invalid wavelength shift {delta}")]
    InvalidShift { delta: f32 },
    #[error("invalid convolution width {fwhm}")]
    InvalidKernel { fwhm: f32 },
    #[error("no values to estimate from")]
    EmptyInput,
    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),
}
