use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use glean_complete::{candidate_repository, filter_and_sort_candidates, IdentifierCompleter};

fn unique_identifiers(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("candidate_{i:05}")).collect()
}

fn bench_candidates_for_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidates_for_query");
    for count in [1, 16, 256, 4096] {
        candidate_repository().clear();
        let completer = IdentifierCompleter::with_identifiers(unique_identifiers(count)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| completer.candidates_for_query("cand", 10).unwrap());
        });
    }
    group.finish();
}

fn bench_filter_and_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_and_sort_candidates");
    for count in [16, 256, 4096] {
        candidate_repository().clear();
        let identifiers = unique_identifiers(count);

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                filter_and_sort_candidates(identifiers.clone(), "cand", 10, |text| text.as_str())
                    .unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_candidates_for_query, bench_filter_and_sort);
criterion_main!(benches);
