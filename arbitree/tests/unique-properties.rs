//! Uniqueness combinator properties.
//!
//! End-to-end checks that unique vector generation reconciles length
//! bounds, deduplication, and minimum-length re-enforcement without
//! breaking the shrink contract.

use arbitree::*;

fn assert_pairwise_unique<T: PartialEq + std::fmt::Debug>(items: &[T]) {
    for i in 0..items.len() {
        for j in i + 1..items.len() {
            assert_ne!(items[i], items[j], "duplicate at {i} and {j} in {items:?}");
        }
    }
}

#[test]
fn generated_lengths_respect_the_normalized_bounds() {
    let gen = Gen::unique_vec(Gen::int_range(0, 1000).unwrap(), (3usize, 8usize)).unwrap();
    for seed in 0..100u64 {
        let mut source = Source::from_u64(seed);
        let tree = gen.generate(&mut source).unwrap();
        assert!((3..=8).contains(&tree.value.len()));
        assert_pairwise_unique(&tree.value);
    }
}

#[test]
fn every_shrink_candidate_is_deduplicated_and_long_enough() {
    let gen = Gen::unique_vec(Gen::int_range(0, 50).unwrap(), (2usize, 6usize)).unwrap();
    for seed in 0..20u64 {
        let mut source = Source::from_u64(seed);
        let tree = gen.generate(&mut source).unwrap();
        for candidate in tree.shrink().take(30) {
            assert!(candidate.value.len() >= 2);
            assert_pairwise_unique(&candidate.value);
            for grandchild in candidate.shrink().take(10) {
                assert!(grandchild.value.len() >= 2);
                assert_pairwise_unique(&grandchild.value);
            }
        }
    }
}

#[test]
fn custom_equivalence_drives_uniqueness() {
    let constraints = UniqueConstraints::new()
        .with_max_length(8)
        .with_equivalence(|a: &String, b: &String| a.len() == b.len());
    let element = Gen::int_range(0, 99999).unwrap().map(|n| n.to_string());
    let gen = Gen::unique_vec(element, constraints).unwrap();

    for seed in 0..30u64 {
        let mut source = Source::from_u64(seed);
        let tree = gen.generate(&mut source).unwrap();
        let lengths: Vec<usize> = tree.value.iter().map(|s| s.len()).collect();
        assert_pairwise_unique(&lengths);
    }
}

#[test]
fn positional_shapes_generate_identically() {
    let bare_max = Gen::unique_vec(Gen::int_range(0, 50).unwrap(), 3usize).unwrap();
    let pair = Gen::unique_vec(Gen::int_range(0, 50).unwrap(), (0usize, 3usize)).unwrap();
    let record = Gen::unique_vec(
        Gen::int_range(0, 50).unwrap(),
        UniqueConstraints::new().with_max_length(3),
    )
    .unwrap();

    for seed in 0..30u64 {
        let a = bare_max
            .generate(&mut Source::from_u64(seed))
            .unwrap()
            .value;
        let b = pair.generate(&mut Source::from_u64(seed)).unwrap().value;
        let c = record.generate(&mut Source::from_u64(seed)).unwrap().value;
        assert_eq!(a, b);
        assert_eq!(b, c);
    }
}

#[test]
fn dedup_filter_contract_examples() {
    assert_eq!(
        dedup_first(&["a", "b", "a", "c"], |x, y| x == y),
        vec!["a", "b", "c"]
    );

    let once = dedup_first(&[5, 5, 1, 2, 1, 5, 3], |x, y| x == y);
    assert_eq!(once, vec![5, 1, 2, 3]);
    assert_eq!(dedup_first(&once, |x, y| x == y), once);
}

#[test]
fn deduplication_survives_element_shrinking() {
    // Shrinking an element toward zero may collide with another slot; the
    // post-processing hook must collapse such candidates.
    let gen = Gen::unique_vec(Gen::int_range(0, 10).unwrap(), 6usize).unwrap();
    for seed in 0..20u64 {
        let mut source = Source::from_u64(seed);
        let tree = gen.generate(&mut source).unwrap();
        for candidate in tree.shrink().take(50) {
            assert_pairwise_unique(&candidate.value);
        }
    }
}

#[test]
fn minimum_reenforcement_resamples_until_satisfied() {
    // Only four distinct elements exist, so raw draws frequently collapse
    // below the minimum and must be retried.
    let gen = Gen::unique_vec(Gen::int_range(0, 3).unwrap(), (3usize, 8usize)).unwrap();
    for seed in 0..30u64 {
        let mut source = Source::from_u64(seed);
        let tree = gen.generate(&mut source).unwrap();
        assert!(tree.value.len() >= 3);
        assert_pairwise_unique(&tree.value);
    }
}

#[test]
fn unsatisfiable_minimum_surfaces_exhaustion() {
    let gen = Gen::unique_vec(Gen::int_range(0, 1).unwrap(), (3usize, 10usize)).unwrap();
    let mut source = Source::from_u64(2);
    assert!(matches!(
        gen.generate(&mut source),
        Err(ArbitreeError::Exhausted { .. })
    ));
}
