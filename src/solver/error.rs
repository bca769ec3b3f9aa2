// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for the dispersion search.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("Expected one search step per polynomial coefficient ({expected}), but {got} were supplied")]
    StepCountMismatch { expected: usize, got: usize },

    #[error("At least one sample per coefficient is needed to search")]
    NoSamples,

    #[error("A search grid of {nsamples}^{num_coeffs} candidates is too large to enumerate")]
    SearchTooLarge { nsamples: usize, num_coeffs: usize },

    #[error("No candidate dispersion produced a valid correlation; the initial guess may not map pixels to monotonically increasing wavelengths")]
    NoValidCandidates,

    #[error(transparent)]
    Correlate(#[from] crate::correlate::CorrelateError),

    #[error(transparent)]
    Model(#[from] crate::model::ModelError),
}
