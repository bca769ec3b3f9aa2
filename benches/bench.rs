// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::*;
use vec1::vec1;

use wavecal::{find_best_1d, LineCatalog, Polynomial, SlitModel, SpectralLine};

fn dispersion_search(c: &mut Criterion) {
    let catalog = LineCatalog::new(vec1![
        SpectralLine::new(5168.61, 1.0),
        SpectralLine::new(5460.74, 0.6),
        SpectralLine::new(5769.60, 0.9),
        SpectralLine::new(6096.16, 0.4),
        SpectralLine::new(6562.85, 1.2),
        SpectralLine::new(6907.00, 0.5),
    ])
    .unwrap();
    let model = SlitModel::new(catalog, 3.0, 4.0, 1e-4, 1024).unwrap();
    let truth = Polynomial::from(vec1![5000.0, 2.0]);
    let observed = model.fill_line_spectrum(&truth).unwrap();

    c.bench_function("synthesize line spectrum", |b| {
        b.iter(|| model.fill_line_spectrum(&truth).unwrap())
    });

    let guess = Polynomial::from(vec1![5004.0, 1.98]);
    c.bench_function("find_best_1d, 25 candidates", |b| {
        b.iter(|| find_best_1d(observed.view(), &[2.0, 0.01], 5, 10, &model, &guess).unwrap())
    });
}

criterion_group!(benches, dispersion_search);
criterion_main!(benches);
