//! Property tests for the scoring math.

use proptest::prelude::*;

use test_fixtures::message;
use thermal_retrieval::heat::heat_density;
use thermal_retrieval::vector::cosine_similarity;

fn nondegenerate_vec() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(0.1f32..1.0, 1..32)
}

proptest! {
    #[test]
    fn self_similarity_is_one(v in nondegenerate_vec()) {
        let sim = cosine_similarity(&v, &v).unwrap();
        prop_assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn negated_similarity_is_minus_one(v in nondegenerate_vec()) {
        let neg: Vec<f32> = v.iter().map(|x| -x).collect();
        let sim = cosine_similarity(&v, &neg).unwrap();
        prop_assert!((sim + 1.0).abs() < 1e-6);
    }

    #[test]
    fn similarity_is_symmetric(
        (a, b) in (1usize..32).prop_flat_map(|len| (
            prop::collection::vec(0.1f32..1.0, len),
            prop::collection::vec(0.1f32..1.0, len),
        )),
    ) {
        let ab = cosine_similarity(&a, &b).unwrap();
        let ba = cosine_similarity(&b, &a).unwrap();
        prop_assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn density_stays_in_unit_interval_and_grows(
        ranges in prop::collection::vec((0usize..100, 0usize..100), 0..20),
    ) {
        let mut m = message(&"x".repeat(100), vec![1.0, 0.0]);
        let mut last = heat_density(&m);
        prop_assert_eq!(last, 0.0);
        for (a, b) in ranges {
            let (start, end) = if a <= b { (a, b) } else { (b, a) };
            m.try_add_range(start, end).unwrap();
            let d = heat_density(&m);
            prop_assert!((0.0..=1.0).contains(&d));
            prop_assert!(d >= last);
            last = d;
        }
    }

    #[test]
    fn heat_never_decreases_a_non_negative_base(
        base in 0.0f64..=1.0,
        density in 0.0f64..=1.0,
    ) {
        let alpha = 0.5;
        let final_score = base * (1.0 + alpha * density);
        prop_assert!(final_score >= base);
        // And the boost is bounded by alpha.
        prop_assert!(final_score <= base * (1.0 + alpha) + 1e-12);
    }
}
