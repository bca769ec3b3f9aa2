// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with slit-model construction and spectrum synthesis.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Slit width {0} is not a positive, finite value")]
    InvalidSlitWidth(f64),

    #[error("Profile FWHM {0} is not a positive, finite value")]
    InvalidFwhm(f64),

    #[error("Profile truncation threshold {0} must lie strictly between 0 and 1")]
    InvalidThreshold(f64),

    #[error("A line spectrum needs at least 2 samples, but {0} were requested")]
    TooFewSamples(usize),

    #[error("The dispersion polynomial is not finite at pixel {pixel}")]
    NonFiniteWavelength { pixel: usize },

    #[error("The dispersion polynomial is not strictly increasing at pixel {pixel}; catalog lines have no consistent pixel position")]
    NonMonotone { pixel: usize },
}
