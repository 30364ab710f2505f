use genematch::{Base, CandidateBounds, CpuMatcher, GeneSequence, SequenceMatcher, BASES};
use quickcheck::quickcheck;

fn to_sequence(raw: &[u8]) -> GeneSequence {
    raw.iter().map(|b| BASES[(*b % 4) as usize]).collect()
}

// Sequences over {A, C} only, to get plenty of long runs.
fn to_dense_sequence(raw: &[u8]) -> GeneSequence {
    raw.iter().map(|b| if b % 2 == 0 { Base::A } else { Base::C }).collect()
}

fn min_from(raw: u8) -> usize {
    (raw % 6) as usize + 1
}

quickcheck! {
    fn every_match_is_a_maximal_common_run(x: Vec<u8>, y: Vec<u8>, min: u8, inclusive: bool) -> bool {
        let a = to_dense_sequence(&x);
        let b = to_dense_sequence(&y);
        let min = min_from(min);
        let bounds = if inclusive { CandidateBounds::Inclusive } else { CandidateBounds::Baseline };
        let matches = CpuMatcher::new(bounds).find_matches(&a, &b, min).unwrap();
        matches.iter().all(|m| {
            let fits = m.start1 + m.length <= a.len() && m.start2 + m.length <= b.len();
            fits
                && m.length >= min
                && (0..m.length).all(|i| a[m.start1 + i] == b[m.start2 + i])
                && (m.start1 + m.length == a.len()
                    || m.start2 + m.length == b.len()
                    || a[m.start1 + m.length] != b[m.start2 + m.length])
        })
    }
}

quickcheck! {
    fn starts_stay_inside_candidate_range(x: Vec<u8>, y: Vec<u8>, min: u8) -> bool {
        let a = to_sequence(&x);
        let b = to_sequence(&y);
        let min = min_from(min);
        let matches = CpuMatcher::default().find_matches(&a, &b, min).unwrap();
        matches.iter().all(|m| m.start1 + min < a.len() && m.start2 + min < b.len())
    }
}

quickcheck! {
    fn raising_min_length_only_removes_matches(x: Vec<u8>, y: Vec<u8>, min: u8) -> bool {
        let a = to_dense_sequence(&x);
        let b = to_dense_sequence(&y);
        let k = min_from(min);
        let cpu = CpuMatcher::new(CandidateBounds::Inclusive);
        let looser = cpu.find_matches(&a, &b, k).unwrap();
        let stricter = cpu.find_matches(&a, &b, k + 1).unwrap();
        stricter.iter().all(|m| looser.contains(m))
    }
}

quickcheck! {
    fn short_inputs_give_no_matches(x: Vec<u8>, y: Vec<u8>) -> bool {
        let a = to_sequence(&x);
        let b = to_sequence(&y);
        let min = a.len().min(b.len()) + 1;
        [CandidateBounds::Baseline, CandidateBounds::Inclusive]
            .iter()
            .all(|bounds| CpuMatcher::new(*bounds).find_matches(&a, &b, min).unwrap().is_empty())
    }
}

quickcheck! {
    fn matching_is_deterministic(x: Vec<u8>, y: Vec<u8>, min: u8) -> bool {
        let a = to_sequence(&x);
        let b = to_sequence(&y);
        let min = min_from(min);
        let cpu = CpuMatcher::default();
        cpu.find_matches(&a, &b, min).unwrap().as_slice()
            == cpu.find_matches(&a, &b, min).unwrap().as_slice()
    }
}
