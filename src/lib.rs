pub mod configuration;

pub mod math {
    pub mod search {
        pub mod bisection;
    }

    pub mod curve {
        pub mod curve;
        pub mod nonparametriccurve {
            pub mod nonparametriccurve;
            pub mod piecewiselinear;
        }
    }

    pub mod statistics {
        pub mod chisquared;
        pub mod continuum;
        pub mod residuals;
    }

    pub mod convolution {
        pub mod gaussiankernel;
    }
}

pub mod spectrum {
    pub mod spectrumerror;
    pub mod spectrum;
    pub mod window;
    pub mod operations;
}

pub use crate::math::search::bisection::bisec;
pub use crate::math::statistics::chisquared::{
    chi2,
    chi2_checked,
    ZeroSamplePolicy
};
pub use crate::math::statistics::residuals::residuals;
pub use crate::spectrum::spectrum::Spectrum;
pub use crate::spectrum::spectrumerror::SpectrumError;
