//! Benchmarks for snippet scoring.
//!
//! Run with: cargo bench
//!
//! Resolution scores every block of a source per request, so the scorer
//! dominates end-to-end latency on large documents.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pincite::score;

/// Builds synthetic block texts resembling parsed insurance documents.
fn synthetic_blocks(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            format!(
                "Section {i}: coverage item {i} carries a limit of ${},000 per \
                 occurrence with a deductible of ${} applying to claim {i}.",
                (i % 90) + 10,
                (i % 9 + 1) * 100
            )
        })
        .collect()
}

fn bench_score(c: &mut Criterion) {
    let blocks = synthetic_blocks(200);

    c.bench_function("score_substring_hit", |b| {
        b.iter(|| {
            for block in &blocks {
                black_box(score(black_box(block), black_box("per occurrence")));
            }
        })
    });

    c.bench_function("score_fuzzy_miss", |b| {
        b.iter(|| {
            for block in &blocks {
                black_box(score(
                    black_box(block),
                    black_box("per ocurrence with a deductable"),
                ));
            }
        })
    });

    c.bench_function("score_markup_stripping", |b| {
        let block = "<table><tr><td>Total Premium</td><td>$1,200</td></tr></table>";
        b.iter(|| black_box(score(black_box(block), black_box("$1,200"))))
    });
}

criterion_group!(benches, bench_score);
criterion_main!(benches);
