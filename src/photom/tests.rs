// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Blackbody synthesis tests.

use approx::assert_abs_diff_eq;
use ndarray::Array1;

use super::{fill_blackbody, PhotomError};
use crate::constants::WIEN_B;

/// Wavelengths from 100 nm to 3 um in 1 nm steps.
fn uv_to_ir_grid() -> Array1<f64> {
    Array1::from_shape_fn(2900, |i| (100 + i) as f64 * 1e-9)
}

#[test]
fn peak_obeys_wiens_displacement_law() {
    for temperature in [3000.0, 5778.0, 10000.0] {
        let wavelengths = uv_to_ir_grid();
        let radiance = fill_blackbody(wavelengths.view(), temperature).unwrap();
        let (peak_index, _) = radiance
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |(bi, bv), (i, &v)| {
                if v > bv {
                    (i, v)
                } else {
                    (bi, bv)
                }
            });
        let expected = WIEN_B / temperature;
        // The grid resolution is 1 nm; the peak must land within one step.
        assert_abs_diff_eq!(wavelengths[peak_index], expected, epsilon = 1e-9);
    }
}

#[test]
fn radiance_increases_with_temperature() {
    let wavelengths = uv_to_ir_grid();
    let cooler = fill_blackbody(wavelengths.view(), 5000.0).unwrap();
    let hotter = fill_blackbody(wavelengths.view(), 6000.0).unwrap();
    assert!(cooler
        .iter()
        .zip(hotter.iter())
        .all(|(c, h)| h > c && c.is_finite() && *c > 0.0));
}

#[test]
fn solar_radiance_at_500nm_matches_the_textbook_value() {
    let wavelengths = Array1::from_elem(1, 500e-9);
    let radiance = fill_blackbody(wavelengths.view(), 5778.0).unwrap();
    // B_500nm(5778 K) is about 2.64e13 W sr^-1 m^-3.
    assert_abs_diff_eq!(radiance[0], 2.64e13, epsilon = 0.01e13);
}

#[test]
fn non_positive_temperature_is_rejected() {
    let wavelengths = uv_to_ir_grid();
    for temperature in [0.0, -273.15, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            fill_blackbody(wavelengths.view(), temperature),
            Err(PhotomError::InvalidTemperature(_))
        ));
    }
}

#[test]
fn empty_wavelength_vector_is_rejected() {
    let wavelengths = Array1::zeros(0);
    assert!(matches!(
        fill_blackbody(wavelengths.view(), 5778.0),
        Err(PhotomError::NoWavelengths)
    ));
}

#[test]
fn non_positive_wavelengths_are_rejected() {
    let wavelengths = Array1::from_vec(vec![500e-9, 0.0, 600e-9]);
    assert!(matches!(
        fill_blackbody(wavelengths.view(), 5778.0),
        Err(PhotomError::InvalidWavelength { index: 1, .. })
    ));
}
