// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Line catalogs: the known spectral lines (wavelength and relative
//! intensity) of a calibration lamp or sky reference.

mod error;
#[cfg(test)]
mod tests;

pub use error::CatalogError;

use std::ops::Deref;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use vec1::Vec1;

/// A single catalog line: where it is and how bright it is, relative to the
/// other lines in the same catalog. The wavelength unit is whatever the
/// dispersion solutions are expressed in; the catalog and the polynomials
/// must simply agree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralLine {
    pub wavelength: f64,
    pub intensity: f64,
}

impl SpectralLine {
    pub fn new(wavelength: f64, intensity: f64) -> SpectralLine {
        SpectralLine {
            wavelength,
            intensity,
        }
    }
}

/// A validated, non-empty collection of [`SpectralLine`]s, sorted strictly
/// ascending in wavelength.
///
/// Construction is the validation boundary: wavelengths must be positive,
/// finite and strictly increasing, and intensities non-negative and finite.
/// A catalog that fails validation is a user input error, not something to
/// silently fix up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SpectralLine>", into = "Vec<SpectralLine>")]
pub struct LineCatalog(Vec1<SpectralLine>);

impl LineCatalog {
    pub fn new(lines: Vec1<SpectralLine>) -> Result<LineCatalog, CatalogError> {
        for (index, line) in lines.iter().enumerate() {
            if !(line.wavelength.is_finite() && line.wavelength > 0.0) {
                return Err(CatalogError::InvalidWavelength {
                    index,
                    wavelength: line.wavelength,
                });
            }
            if !(line.intensity.is_finite() && line.intensity >= 0.0) {
                return Err(CatalogError::InvalidIntensity {
                    index,
                    intensity: line.intensity,
                });
            }
        }
        if let Some((index, (prev, next))) = lines
            .iter()
            .tuple_windows()
            .enumerate()
            .find(|(_, (a, b))| b.wavelength <= a.wavelength)
        {
            return Err(CatalogError::NotSorted {
                index: index + 1,
                prev: prev.wavelength,
                next: next.wavelength,
            });
        }
        Ok(LineCatalog(lines))
    }

    /// The wavelengths of the first and last lines. As the catalog is sorted,
    /// this is the span the catalog can calibrate.
    pub fn wavelength_range(&self) -> (f64, f64) {
        (self.0.first().wavelength, self.0.last().wavelength)
    }
}

impl TryFrom<Vec<SpectralLine>> for LineCatalog {
    type Error = CatalogError;

    fn try_from(lines: Vec<SpectralLine>) -> Result<LineCatalog, CatalogError> {
        let lines = Vec1::try_from_vec(lines).map_err(|_| CatalogError::NoLines)?;
        LineCatalog::new(lines)
    }
}

impl From<LineCatalog> for Vec<SpectralLine> {
    fn from(catalog: LineCatalog) -> Vec<SpectralLine> {
        catalog.0.into()
    }
}

impl Deref for LineCatalog {
    type Target = [SpectralLine];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}
