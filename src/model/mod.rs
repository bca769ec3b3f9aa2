// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The slit model: given a trial dispersion solution, synthesize the line
//! spectrum the detector would record.
//!
//! Each catalog line is placed at the (sub-)pixel position where the
//! dispersion polynomial maps pixel to the line's wavelength, then broadened
//! by the instrument profile. The profile combines the slit width and the
//! optics' transfer function into a single Gaussian; its tails are truncated
//! once they drop below a configurable fraction of the line's peak.

mod error;

pub use error::ModelError;

use std::f64::consts::LN_2;

use itertools::Itertools;
use log::trace;
use ndarray::Array1;

use crate::{catalog::LineCatalog, polynomial::Polynomial};

/// Anything that can turn a trial dispersion polynomial into a synthetic
/// spectrum. [`SlitModel`] is the only synthesizer wavecal ships, but the
/// dispersion search only needs this capability, not the concrete model.
pub trait SpectrumSynthesizer {
    fn synthesize(&self, dispersion: &Polynomial) -> Result<Array1<f64>, ModelError>;
}

/// A model of how a spectrograph's slit and optics spread each spectral line
/// over detector pixels. Immutable once built; building it is the validation
/// boundary for its scalar parameters.
#[derive(Debug, Clone)]
pub struct SlitModel {
    catalog: LineCatalog,

    /// The width of the slit's geometric image on the detector \[pixels\].
    slit_width: f64,

    /// FWHM of the optics' Gaussian transfer function \[pixels\].
    profile_fwhm: f64,

    /// Profile contributions below this fraction of a line's peak intensity
    /// are dropped.
    threshold: f64,

    /// The number of detector pixels a synthetic spectrum spans.
    num_samples: usize,
}

impl SlitModel {
    pub fn new(
        catalog: LineCatalog,
        slit_width: f64,
        profile_fwhm: f64,
        threshold: f64,
        num_samples: usize,
    ) -> Result<SlitModel, ModelError> {
        if !(slit_width.is_finite() && slit_width > 0.0) {
            return Err(ModelError::InvalidSlitWidth(slit_width));
        }
        if !(profile_fwhm.is_finite() && profile_fwhm > 0.0) {
            return Err(ModelError::InvalidFwhm(profile_fwhm));
        }
        if !(threshold.is_finite() && threshold > 0.0 && threshold < 1.0) {
            return Err(ModelError::InvalidThreshold(threshold));
        }
        if num_samples < 2 {
            return Err(ModelError::TooFewSamples(num_samples));
        }
        Ok(SlitModel {
            catalog,
            slit_width,
            profile_fwhm,
            threshold,
            num_samples,
        })
    }

    pub fn catalog(&self) -> &LineCatalog {
        &self.catalog
    }

    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// The sigma of the effective line profile \[pixels\]: the optics'
    /// Gaussian combined in quadrature with the slit's top-hat image (a
    /// top-hat of width w has variance w^2 / 12).
    fn profile_sigma(&self) -> f64 {
        let sigma_fwhm = self.profile_fwhm / (8.0 * LN_2).sqrt();
        (sigma_fwhm.powi(2) + self.slit_width.powi(2) / 12.0).sqrt()
    }

    /// Synthesize the line spectrum this model predicts for a trial
    /// dispersion solution.
    ///
    /// The polynomial must map the sampled pixel range to strictly increasing
    /// wavelengths; if it does not, no consistent pixel position exists for
    /// the catalog lines and an error is returned for the caller (usually the
    /// dispersion search) to treat as a failed candidate. Lines falling
    /// outside the sampled wavelength range are skipped. The result is a
    /// deterministic, non-negative superposition of line profiles.
    pub fn fill_line_spectrum(&self, dispersion: &Polynomial) -> Result<Array1<f64>, ModelError> {
        let n = self.num_samples;
        let wavelengths: Vec<f64> = (0..n).map(|i| dispersion.eval(i as f64)).collect();

        if let Some(pixel) = wavelengths.iter().position(|w| !w.is_finite()) {
            return Err(ModelError::NonFiniteWavelength { pixel });
        }
        if let Some((pixel, _)) = wavelengths
            .iter()
            .tuple_windows()
            .enumerate()
            .find(|(_, (a, b))| b <= a)
        {
            return Err(ModelError::NonMonotone { pixel: pixel + 1 });
        }

        let sigma = self.profile_sigma();
        // The pixel distance at which a Gaussian falls to `threshold` of its
        // peak.
        let half_width = sigma * (-2.0 * self.threshold.ln()).sqrt();

        let mut spectrum = Array1::zeros(n);
        for line in self.catalog.iter() {
            if line.wavelength < wavelengths[0] || line.wavelength > wavelengths[n - 1] {
                trace!(
                    "Line at {} is outside the sampled wavelength range [{}, {}]; skipping",
                    line.wavelength,
                    wavelengths[0],
                    wavelengths[n - 1]
                );
                continue;
            }

            // The wavelengths are strictly increasing, so the line sits in
            // exactly one bracketing pixel pair; interpolate to a sub-pixel
            // centre.
            let k = wavelengths.partition_point(|&w| w < line.wavelength);
            let centre = if k == 0 {
                0.0
            } else {
                let (w0, w1) = (wavelengths[k - 1], wavelengths[k]);
                (k - 1) as f64 + (line.wavelength - w0) / (w1 - w0)
            };

            let lo = ((centre - half_width).ceil().max(0.0)) as usize;
            let hi = ((centre + half_width).floor() as usize).min(n - 1);
            for p in lo..=hi {
                let d = p as f64 - centre;
                spectrum[p] += line.intensity * (-d * d / (2.0 * sigma * sigma)).exp();
            }
        }

        Ok(spectrum)
    }
}

impl SpectrumSynthesizer for SlitModel {
    fn synthesize(&self, dispersion: &Polynomial) -> Result<Array1<f64>, ModelError> {
        self.fill_line_spectrum(dispersion)
    }
}
