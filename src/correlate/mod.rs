// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Normalized cross-correlation of two spectra over a bounded window of
//! integer pixel shifts.


use ndarray::{Array1, ArrayView1};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorrelateError {
    #[error("Cannot correlate spectra of different lengths ({a} and {b})")]
    DimensionMismatch { a: usize, b: usize },

    #[error("Cannot correlate spectra of length {0}; at least 2 samples are needed")]
    TooShort(usize),
}

/// The correlation coefficients of two spectra across a window of integer
/// shifts.
#[derive(Debug, Clone)]
pub struct Correlation {
    /// One coefficient per shift, in shift order. `xcorrs[delta]` is the
    /// zero-shift coefficient; entries whose overlap is degenerate (fewer
    /// than two samples, or zero variance) are NaN.
    pub xcorrs: Array1<f64>,

    /// The index offset of zero shift; always the `half_search` the window
    /// was built with.
    pub delta: usize,
}

impl Correlation {
    /// The largest finite coefficient and its shift index, if any coefficient
    /// is finite at all.
    pub fn peak(&self) -> Option<(usize, f64)> {
        self.xcorrs
            .iter()
            .enumerate()
            .filter(|(_, xc)| xc.is_finite())
            .fold(None, |best, (i, &xc)| match best {
                Some((_, best_xc)) if best_xc >= xc => best,
                _ => Some((i, xc)),
            })
    }
}

/// Correlate `a` against shifted copies of `b` for every integer shift in
/// `[-half_search, +half_search]`.
///
/// Each coefficient is the Pearson correlation of the samples the two
/// spectra overlap in at that shift, so a spectrum correlated against itself
/// scores 1 at zero shift (up to floating-point rounding) and every
/// coefficient lies in [-1, 1]. A positive shift means the features of `b`
/// sit at higher pixel positions than the matching features of `a`.
pub fn correlate(
    a: ArrayView1<f64>,
    b: ArrayView1<f64>,
    half_search: usize,
) -> Result<Correlation, CorrelateError> {
    if a.len() != b.len() {
        return Err(CorrelateError::DimensionMismatch {
            a: a.len(),
            b: b.len(),
        });
    }
    let n = a.len();
    if n < 2 {
        return Err(CorrelateError::TooShort(n));
    }

    let mut xcorrs = Array1::from_elem(2 * half_search + 1, f64::NAN);
    for (k, xc) in xcorrs.iter_mut().enumerate() {
        let shift = k as isize - half_search as isize;

        // The overlapping sample range: a[i] pairs with b[i + shift].
        let i_start = (-shift).max(0) as usize;
        let i_end = (n as isize - shift.max(0)).max(0) as usize;
        if i_end.saturating_sub(i_start) < 2 {
            continue;
        }
        let m = (i_end - i_start) as f64;

        let mut mean_a = 0.0;
        let mut mean_b = 0.0;
        for i in i_start..i_end {
            mean_a += a[i];
            mean_b += b[(i as isize + shift) as usize];
        }
        mean_a /= m;
        mean_b /= m;

        let mut cov = 0.0;
        let mut var_a = 0.0;
        let mut var_b = 0.0;
        for i in i_start..i_end {
            let da = a[i] - mean_a;
            let db = b[(i as isize + shift) as usize] - mean_b;
            cov += da * db;
            var_a += da * da;
            var_b += db * db;
        }

        let denom = (var_a * var_b).sqrt();
        if denom > 0.0 {
            *xc = cov / denom;
        }
    }

    Ok(Correlation {
        xcorrs,
        delta: half_search,
    })
}
