//! Property tests for the random integer source
//!
//! Property 1: Draws stay inside the inclusive range
//! Property 2: Ranges spanning two or more integers produce more than one value

use proptest::prelude::*;
use std::collections::HashSet;

use crate::random::{random_int_inclusive, seeded_rng};

proptest! {
    /// Property 1: 1000 draws never leave [min, max]
    #[test]
    fn prop_draws_within_range(
        seed in any::<u64>(),
        min in -1000..=1000i32,
        span in 0..=200i32
    ) {
        let max = min + span;
        let mut rng = seeded_rng(seed);
        for _ in 0..1000 {
            let val = random_int_inclusive(&mut rng, min, max);
            prop_assert!(val >= min && val <= max, "{} outside [{}, {}]", val, min, max);
        }
    }

    /// Property 2: wide ranges are not degenerate
    #[test]
    fn prop_wide_ranges_vary(
        seed in any::<u64>(),
        min in -100..=100i32,
        span in 1..=50i32
    ) {
        let mut rng = seeded_rng(seed);
        let distinct: HashSet<i32> = (0..1000)
            .map(|_| random_int_inclusive(&mut rng, min, min + span))
            .collect();
        prop_assert!(distinct.len() > 1, "only {:?} drawn from [{}, {}]", distinct, min, min + span);
    }
}
