// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Line catalog tests.

use vec1::vec1;

use super::{CatalogError, LineCatalog, SpectralLine};

#[test]
fn sorted_catalog_is_accepted() {
    let catalog = LineCatalog::new(vec1![
        SpectralLine::new(5460.74, 1.0),
        SpectralLine::new(5769.60, 0.5),
        SpectralLine::new(6562.85, 1.2),
    ])
    .unwrap();
    assert_eq!(catalog.len(), 3);
    let (lo, hi) = catalog.wavelength_range();
    assert_eq!(lo, 5460.74);
    assert_eq!(hi, 6562.85);
}

#[test]
fn out_of_order_wavelengths_are_rejected() {
    let result = LineCatalog::new(vec1![
        SpectralLine::new(5460.74, 1.0),
        SpectralLine::new(6562.85, 1.2),
        SpectralLine::new(5769.60, 0.5),
    ]);
    match result {
        Err(CatalogError::NotSorted { index, prev, next }) => {
            assert_eq!(index, 2);
            assert_eq!(prev, 6562.85);
            assert_eq!(next, 5769.60);
        }
        other => panic!("expected NotSorted, got {other:?}"),
    }
}

#[test]
fn duplicate_wavelengths_are_rejected() {
    // "Strictly increasing" means a repeated wavelength is also an error.
    let result = LineCatalog::new(vec1![
        SpectralLine::new(5460.74, 1.0),
        SpectralLine::new(5460.74, 0.5),
    ]);
    assert!(matches!(result, Err(CatalogError::NotSorted { .. })));
}

#[test]
fn negative_intensity_is_rejected() {
    let result = LineCatalog::new(vec1![
        SpectralLine::new(5460.74, 1.0),
        SpectralLine::new(5769.60, -0.5),
    ]);
    match result {
        Err(CatalogError::InvalidIntensity { index, intensity }) => {
            assert_eq!(index, 1);
            assert_eq!(intensity, -0.5);
        }
        other => panic!("expected InvalidIntensity, got {other:?}"),
    }
}

#[test]
fn non_positive_wavelength_is_rejected() {
    let result = LineCatalog::new(vec1![SpectralLine::new(0.0, 1.0)]);
    assert!(matches!(
        result,
        Err(CatalogError::InvalidWavelength { index: 0, .. })
    ));

    let result = LineCatalog::new(vec1![SpectralLine::new(f64::NAN, 1.0)]);
    assert!(matches!(
        result,
        Err(CatalogError::InvalidWavelength { index: 0, .. })
    ));
}

#[test]
fn empty_catalog_is_rejected() {
    let result = LineCatalog::try_from(Vec::<SpectralLine>::new());
    assert!(matches!(result, Err(CatalogError::NoLines)));
}
