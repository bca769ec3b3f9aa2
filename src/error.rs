// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all wavecal-related errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WavecalError {
    #[error("{0}")]
    Catalog(#[from] crate::catalog::CatalogError),

    #[error("{0}")]
    Model(#[from] crate::model::ModelError),

    #[error("{0}")]
    Correlate(#[from] crate::correlate::CorrelateError),

    #[error("{0}")]
    Solve(#[from] crate::solver::SolveError),

    #[error("{0}")]
    Photom(#[from] crate::photom::PhotomError),
}
