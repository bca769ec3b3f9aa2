// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Wavelength calibration for astronomical spectrographs.

`wavecal` finds the 1-D polynomial "dispersion solution" (detector pixel
position -> physical wavelength) that best explains an observed arc-lamp
spectrum. Candidate polynomials are turned into synthetic line spectra using a
catalog of known lines and a model of the instrument's broadening, and each
synthetic spectrum is scored against the observed one with a normalised
cross-correlation over a bounded pixel-shift window. The highest-scoring
candidate wins.

Spectra are plain `ndarray` vectors; reading them from disk (and writing
solutions back out) is the calling pipeline's job.
 */

pub mod catalog;
pub mod constants;
pub mod correlate;
mod error;
pub mod model;
pub mod photom;
pub mod polynomial;
pub mod solver;

// Re-exports.
pub use catalog::{LineCatalog, SpectralLine};
pub use correlate::{correlate, Correlation};
pub use error::WavecalError;
pub use model::{SlitModel, SpectrumSynthesizer};
pub use polynomial::Polynomial;
pub use solver::{find_best_1d, CorrelationResult};

use crossbeam_utils::atomic::AtomicCell;

/// Are progress bars being drawn during dispersion searches?
pub static PROGRESS_BARS: AtomicCell<bool> = AtomicCell::new(false);
