// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Photometric spectrum synthesis: the blackbody radiance of a source at a
//! known temperature, used to model continuum lamps and standard stars.

#[cfg(test)]
mod tests;

use ndarray::{Array1, ArrayView1};
use thiserror::Error;

use crate::constants::{BOLTZMANN_K, PLANCK_H, VEL_C};

#[derive(Error, Debug)]
pub enum PhotomError {
    #[error("Temperature {0} K is not a positive, finite value")]
    InvalidTemperature(f64),

    #[error("No wavelengths were supplied")]
    NoWavelengths,

    #[error("Wavelength {wavelength} at index {index} is not a positive, finite value")]
    InvalidWavelength { index: usize, wavelength: f64 },
}

/// Fill a spectrum with the Planck spectral radiance of a blackbody at
/// `temperature` \[K\], evaluated at each of `wavelengths` \[m\]. The result
/// is in SI units \[W sr^-1 m^-3\].
///
/// Inputs are validated up front; no partial spectrum is ever returned.
pub fn fill_blackbody(
    wavelengths: ArrayView1<f64>,
    temperature: f64,
) -> Result<Array1<f64>, PhotomError> {
    if !(temperature.is_finite() && temperature > 0.0) {
        return Err(PhotomError::InvalidTemperature(temperature));
    }
    if wavelengths.is_empty() {
        return Err(PhotomError::NoWavelengths);
    }
    if let Some((index, &wavelength)) = wavelengths
        .iter()
        .enumerate()
        .find(|(_, w)| !(w.is_finite() && **w > 0.0))
    {
        return Err(PhotomError::InvalidWavelength { index, wavelength });
    }

    Ok(wavelengths.mapv(|lambda| {
        let hc = PLANCK_H * VEL_C;
        (2.0 * hc * VEL_C / lambda.powi(5)) / ((hc / (lambda * BOLTZMANN_K * temperature)).exp_m1())
    }))
}
