// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Useful constants.
//!
//! All constants *must* be double precision. `wavecal` does every calculation
//! in double precision; callers may downconvert afterwards if they need to.

// Things that should never change.

/// Speed of light \[metres/second\]
pub const VEL_C: f64 = 299_792_458.0;

/// The Planck constant \[joule seconds\]
pub const PLANCK_H: f64 = 6.626_070_15e-34;

/// The Boltzmann constant \[joules/kelvin\]
pub const BOLTZMANN_K: f64 = 1.380_649e-23;

/// Wien's displacement constant \[metre kelvins\]. The wavelength at which a
/// blackbody's spectral radiance peaks is this value divided by the
/// temperature.
pub const WIEN_B: f64 = 2.897_771_955e-3;
