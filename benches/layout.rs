// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cabinview::layout::layout_deck;

mod fixtures;

// Benchmark identity (keep stable):
// - Group name in this file: `layout.deck`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `narrow_body`, `wide_body`).
fn benches_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout.deck");
    for case in [
        fixtures::Case::NarrowBody,
        fixtures::Case::WideBody,
        fixtures::Case::WideBodyTwoDecks,
    ] {
        let seatmap = fixtures::fixture(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let mut rows = 0usize;
                for (idx, deck) in seatmap.decks().iter().enumerate() {
                    let layout = layout_deck(
                        black_box(seatmap.deck_seats(idx)),
                        black_box(deck.deck_configuration()),
                    )
                    .expect("layout_deck");
                    rows += layout.row_count();
                }
                black_box(rows)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, benches_layout);
criterion_main!(benches);
