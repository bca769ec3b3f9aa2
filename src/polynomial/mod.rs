// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! 1-D polynomials. A dispersion solution is one of these, mapping a detector
//! pixel position to a wavelength.


use serde::{Deserialize, Serialize};
use vec1::Vec1;

/// A 1-D polynomial with real coefficients, indexed by power (coefficient 0
/// is the constant term). There is always at least a constant term, even if
/// it is zero.
///
/// While a solution is being assembled coefficients may be set one at a time
/// with [`Polynomial::set_coeff`]; once handed to the search it is treated as
/// an immutable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polynomial {
    coeffs: Vec1<f64>,
}

impl Polynomial {
    /// A polynomial of the given degree with all coefficients zero.
    pub fn new(degree: usize) -> Polynomial {
        Polynomial {
            coeffs: Vec1::try_from_vec(vec![0.0; degree + 1])
                .expect("degree + 1 is always at least 1"),
        }
    }

    /// Set the coefficient of `x.powi(power)`. Powers beyond the current
    /// degree grow the polynomial, zero-filling any gaps.
    pub fn set_coeff(&mut self, power: usize, value: f64) {
        while self.coeffs.len() <= power {
            self.coeffs.push(0.0);
        }
        self.coeffs[power] = value;
    }

    /// The coefficient of `x.powi(power)`. Powers beyond the degree are zero.
    pub fn coeff(&self, power: usize) -> f64 {
        self.coeffs.get(power).copied().unwrap_or(0.0)
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// All coefficients, constant term first.
    pub fn coeffs(&self) -> &[f64] {
        self.coeffs.as_slice()
    }

    /// Evaluate the polynomial at `x` with Horner's scheme.
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }
}

impl From<Vec1<f64>> for Polynomial {
    fn from(coeffs: Vec1<f64>) -> Polynomial {
        Polynomial { coeffs }
    }
}

#[cfg(test)]
impl approx::AbsDiffEq for Polynomial {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.coeffs.len() == other.coeffs.len()
            && self
                .coeffs
                .iter()
                .zip(other.coeffs.iter())
                .all(|(a, b)| f64::abs_diff_eq(a, b, epsilon))
    }
}
