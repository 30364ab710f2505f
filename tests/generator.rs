use genematch::{SequenceGenerator, BASES};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn same_seed_same_sequences() {
    let mut g1 = SequenceGenerator::from_seed(42);
    let mut g2 = SequenceGenerator::from_seed(42);
    assert_eq!(g1.random_sequence(500), g2.random_sequence(500));
    assert_eq!(g1.random_sequence(500), g2.random_sequence(500));
}

#[test]
fn different_seeds_differ() {
    let a = SequenceGenerator::from_seed(1).random_sequence(200);
    let b = SequenceGenerator::from_seed(2).random_sequence(200);
    assert_ne!(a, b);
}

#[test]
fn requested_length_is_exact() {
    let mut g = SequenceGenerator::new(StdRng::seed_from_u64(7));
    assert!(g.random_sequence(0).is_empty());
    assert_eq!(g.random_sequence(1).len(), 1);
    assert_eq!(g.random_sequence(10_000).len(), 10_000);
}

#[test]
fn every_base_is_drawn() {
    let seq = SequenceGenerator::from_seed(9).random_sequence(4_000);
    for base in BASES {
        let count = seq.as_slice().iter().filter(|b| **b == base).count();
        // Uniform draws put roughly 1000 of each; allow a wide margin.
        assert!(count > 800 && count < 1200, "{base}: {count}");
    }
}
