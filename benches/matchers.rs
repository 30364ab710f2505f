use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use genematch::{
    CandidateBounds, CpuMatcher, GeneSequence, GpuMatcher, ParallelMatcher, SequenceGenerator,
    SequenceMatcher,
};

const MIN_LENGTH: usize = 9;
const LENGTHS: [usize; 3] = [500, 1_000, 2_000];

fn generate_input(len: usize) -> (GeneSequence, GeneSequence) {
    let mut g = SequenceGenerator::from_seed(len as u64);
    (g.random_sequence(len), g.random_sequence(len))
}

fn bench_matchers(c: &mut Criterion) {
    let mut group = c.benchmark_group("All-pairs matching on random sequences");
    group.sample_size(10);

    let cpu = CpuMatcher::default();
    let par = ParallelMatcher::new(CandidateBounds::Baseline, 64).unwrap();
    let gpu = GpuMatcher::new(CandidateBounds::Baseline, 64).unwrap();

    for len in LENGTHS {
        let input = generate_input(len);
        let matchers: [(&str, &dyn SequenceMatcher); 3] =
            [("cpu", &cpu), ("parallel", &par), ("accelerated", &gpu)];
        for (label, matcher) in matchers {
            group.bench_with_input(BenchmarkId::new(label, len), &input, |bch, (a, b)| {
                bch.iter(|| black_box(matcher.find_matches(black_box(a), black_box(b), MIN_LENGTH)))
            });
        }
    }

    group.finish();
}

criterion_group!(matching, bench_matchers);
criterion_main!(matching);
