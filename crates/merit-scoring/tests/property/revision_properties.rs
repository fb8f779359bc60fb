use merit_scoring::cyclic_revision;
use proptest::prelude::*;

// ── Identity on empty history ────────────────────────────────────────────

proptest! {
    #[test]
    fn empty_history_is_identity(score in -100.0f64..100.0, weight in 0.0f64..=1.0) {
        let mut history = Vec::new();
        let result = cyclic_revision(&mut history, score, weight);
        prop_assert_eq!(result, score);
        prop_assert_eq!(history, vec![score]);
    }
}

// ── EMA contract ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn blend_matches_ema(last in -100.0f64..100.0, score in -100.0f64..100.0) {
        let mut history = vec![last];
        let result = cyclic_revision(&mut history, score, 0.5);
        prop_assert!((result - (0.5 * last + 0.5 * score)).abs() < 1e-9);
    }

    #[test]
    fn exactly_one_append_per_call(
        seed in prop::collection::vec(-10.0f64..10.0, 0..20),
        score in -10.0f64..10.0,
    ) {
        let mut history = seed.clone();
        cyclic_revision(&mut history, score, 0.5);
        prop_assert_eq!(history.len(), seed.len() + 1);
        // Prior entries are never reordered or rewritten.
        prop_assert_eq!(&history[..seed.len()], &seed[..]);
    }

    #[test]
    fn blend_stays_between_last_and_new(
        last in -10.0f64..10.0,
        score in -10.0f64..10.0,
        weight in 0.0f64..=1.0,
    ) {
        let mut history = vec![last];
        let result = cyclic_revision(&mut history, score, weight);
        let (lo, hi) = if last <= score { (last, score) } else { (score, last) };
        prop_assert!(result >= lo - 1e-9 && result <= hi + 1e-9);
    }
}
