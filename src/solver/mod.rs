// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The dispersion search: find the polynomial whose synthetic spectrum best
//! cross-correlates with an observed one.
//!
//! This is a local grid search around a first-guess solution, not a global
//! optimiser. If the search space is multimodal and the steps are too coarse,
//! the best candidate found here may not be the best candidate that exists;
//! tighten the guess or the steps rather than expecting miracles.

mod error;

pub use error::SolveError;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::{debug, trace};
use ndarray::{Array1, ArrayView1};
use rayon::prelude::*;

use crate::{
    correlate::correlate,
    model::SpectrumSynthesizer,
    polynomial::Polynomial,
    PROGRESS_BARS,
};

/// The outcome of a dispersion search: the winning polynomial together with
/// the evidence for it.
#[derive(Debug, Clone)]
pub struct CorrelationResult {
    /// The winning candidate's correlation curve against the observed
    /// spectrum, one coefficient per shift.
    pub xcorrs: Array1<f64>,

    /// The largest correlation coefficient found across all candidates and
    /// shifts. Never exceeds 1 (up to floating-point rounding).
    pub xcmax: f64,

    /// The winning candidate.
    pub result: Polynomial,

    /// The index offset of zero shift in `xcorrs`; equals the `half_size`
    /// the search ran with.
    pub delta: usize,
}

/// Search perturbations of `guess` for the dispersion solution whose
/// synthetic spectrum best matches `observed`.
///
/// Every coefficient `i` of `guess` is varied across `nsamples` values
/// centred on the guess and spaced by `search_steps[i]` (so with an odd
/// `nsamples` the guess itself is among the candidates), and the full
/// Cartesian grid of those variations is scored. A candidate's score is the
/// maximum of its correlation curve against `observed` over shifts in
/// `[-half_size, +half_size]`; `half_size` of 0 scores the zero-shift
/// coefficient only. Ties go to the earliest candidate in enumeration order
/// (coefficient 0 varies fastest), which keeps the search deterministic.
///
/// Candidates that cannot be synthesized (e.g. a perturbation is not monotone
/// over the detector) or that produce no finite correlation are skipped. If
/// *every* candidate is skipped (typically because the guess itself maps
/// pixels to wavelengths non-monotonically), the search fails with
/// [`SolveError::NoValidCandidates`]: calibration not found, for the caller
/// to handle.
///
/// The grid is scored in parallel; the scoring is stateless and the
/// reduction deterministic, so repeated calls return identical results.
pub fn find_best_1d(
    observed: ArrayView1<f64>,
    search_steps: &[f64],
    nsamples: usize,
    half_size: usize,
    model: &(dyn SpectrumSynthesizer + Sync),
    guess: &Polynomial,
) -> Result<CorrelationResult, SolveError> {
    let num_coeffs = guess.degree() + 1;
    if search_steps.len() != num_coeffs {
        return Err(SolveError::StepCountMismatch {
            expected: num_coeffs,
            got: search_steps.len(),
        });
    }
    if nsamples == 0 {
        return Err(SolveError::NoSamples);
    }
    let num_trials = nsamples
        .checked_pow(num_coeffs as u32)
        .ok_or(SolveError::SearchTooLarge {
            nsamples,
            num_coeffs,
        })?;

    debug!(
        "Searching {num_trials} candidate dispersions ({nsamples} samples per coefficient, \
         degree {}, correlation half-window {half_size})",
        guess.degree()
    );
    let progress_bar = make_search_progress_bar(num_trials);

    let best = (0..num_trials)
        .into_par_iter()
        .map(|trial| -> Result<Option<(usize, f64)>, SolveError> {
            let candidate = perturbed_candidate(guess, search_steps, nsamples, trial);
            let synthetic = match model.synthesize(&candidate) {
                Ok(synthetic) => synthetic,
                Err(e) => {
                    trace!("Trial {trial}: synthesis failed: {e}");
                    progress_bar.inc(1);
                    return Ok(None);
                }
            };
            let corr = correlate(observed, synthetic.view(), half_size)?;
            progress_bar.inc(1);
            match corr.peak() {
                Some((_, xc)) => Ok(Some((trial, xc))),
                None => {
                    trace!("Trial {trial}: no finite correlation coefficient");
                    Ok(None)
                }
            }
        })
        .try_reduce(
            || None,
            |a, b| {
                Ok(match (a, b) {
                    (None, b) => b,
                    (a, None) => a,
                    (Some((trial_a, xc_a)), Some((trial_b, xc_b))) => {
                        // Higher correlation wins; equal correlations go to
                        // the earlier trial.
                        if xc_b > xc_a || (xc_b == xc_a && trial_b < trial_a) {
                            Some((trial_b, xc_b))
                        } else {
                            Some((trial_a, xc_a))
                        }
                    }
                })
            },
        );
    progress_bar.abandon();
    let (best_trial, xcmax) = best?.ok_or(SolveError::NoValidCandidates)?;

    // Rebuild the winner and its correlation curve. Synthesis is
    // deterministic, so this cannot fail where the scoring pass succeeded.
    let result = perturbed_candidate(guess, search_steps, nsamples, best_trial);
    let synthetic = model.synthesize(&result)?;
    let corr = correlate(observed, synthetic.view(), half_size)?;

    debug!("Best candidate was trial {best_trial} with correlation {xcmax:.6}");

    Ok(CorrelationResult {
        xcorrs: corr.xcorrs,
        xcmax,
        result,
        delta: corr.delta,
    })
}

/// Decode a trial index into a candidate polynomial. The index is read as a
/// base-`nsamples` number whose digit `i` selects the offset applied to
/// coefficient `i` (so coefficient 0 varies fastest as the index counts up),
/// and the offsets are centred on the guess.
fn perturbed_candidate(
    guess: &Polynomial,
    search_steps: &[f64],
    nsamples: usize,
    trial: usize,
) -> Polynomial {
    let centre = (nsamples - 1) as f64 / 2.0;
    let mut candidate = guess.clone();
    let mut digits = trial;
    for (power, step) in search_steps.iter().enumerate() {
        let sample = (digits % nsamples) as f64;
        digits /= nsamples;
        candidate.set_coeff(power, guess.coeff(power) + (sample - centre) * step);
    }
    candidate
}

/// Convenience function to make a progress bar for the candidate grid.
fn make_search_progress_bar(num_trials: usize) -> ProgressBar {
    ProgressBar::with_draw_target(
        Some(num_trials as _),
        if PROGRESS_BARS.load() {
            ProgressDrawTarget::stdout()
        } else {
            ProgressDrawTarget::hidden()
        },
    )
    .with_style(
        ProgressStyle::default_bar()
            .template("{msg}: [{wide_bar:.blue}] {pos:6}/{len:6} ({elapsed_precise}<{eta_precise})")
            .unwrap()
            .progress_chars("=> "),
    )
    .with_position(0)
    .with_message("Searching dispersions")
}
