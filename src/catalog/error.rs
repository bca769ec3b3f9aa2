// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with building a line catalog.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("The line catalog contained no lines")]
    NoLines,

    #[error("Line {index}: wavelength {wavelength} is not a positive, finite value")]
    InvalidWavelength { index: usize, wavelength: f64 },

    #[error("Line {index}: intensity {intensity} is negative or not finite")]
    InvalidIntensity { index: usize, intensity: f64 },

    #[error("Catalog wavelengths must be strictly increasing, but line {index} ({next}) does not exceed the line before it ({prev})")]
    NotSorted { index: usize, prev: f64, next: f64 },
}
