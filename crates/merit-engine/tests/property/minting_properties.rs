use merit_engine::EcosystemEngine;
use proptest::prelude::*;

const USERS: [&str; 3] = ["alice", "bob", "carol"];
const TAGS: [&str; 4] = ["success", "aha", "note", "question"];

fn arb_interaction() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (0..USERS.len(), prop::collection::vec(0..TAGS.len(), 0..3))
}

// ── Tokens track positive composite deltas exactly ───────────────────────

proptest! {
    #[test]
    fn supply_equals_sum_of_positive_deltas(
        interactions in prop::collection::vec(arb_interaction(), 1..30),
    ) {
        let mut eco = EcosystemEngine::new();
        let mut expected_supply = 0.0;
        let mut last_composite = 0.0;

        for (user, tag_indices) in interactions {
            let tags: Vec<&str> = tag_indices.iter().map(|&i| TAGS[i]).collect();
            eco.add_interaction("idea", USERS[user], &tags, "interaction");

            let composite = eco.overall_score("idea");
            let delta = composite - last_composite;
            if delta > 0.0 {
                expected_supply += delta;
            }
            last_composite = composite;

            prop_assert!(
                (eco.ledger().total_supply() - expected_supply).abs() < 1e-9,
                "supply {} != sum of positive deltas {}",
                eco.ledger().total_supply(),
                expected_supply
            );
        }
    }

    #[test]
    fn no_interaction_ever_reduces_a_balance(
        interactions in prop::collection::vec(arb_interaction(), 1..30),
    ) {
        let mut eco = EcosystemEngine::new();
        for (user, tag_indices) in interactions {
            let before: Vec<f64> = USERS.iter().map(|u| eco.ledger().balance_of(u)).collect();
            let tags: Vec<&str> = tag_indices.iter().map(|&i| TAGS[i]).collect();
            eco.add_interaction("idea", USERS[user], &tags, "interaction");

            for (u, prev) in USERS.iter().zip(before) {
                prop_assert!(eco.ledger().balance_of(u) >= prev - 1e-12);
            }
        }
    }

    #[test]
    fn baseline_always_matches_last_composite(
        interactions in prop::collection::vec(arb_interaction(), 1..20),
    ) {
        let mut eco = EcosystemEngine::new();
        for (user, tag_indices) in interactions {
            let tags: Vec<&str> = tag_indices.iter().map(|&i| TAGS[i]).collect();
            eco.add_interaction("idea", USERS[user], &tags, "interaction");

            // The recorded baseline tracks the composite even when it falls.
            let state = eco.idea("idea").unwrap();
            prop_assert!(
                (state.last_score.value() - eco.overall_score("idea")).abs() < 1e-12
            );
        }
    }
}
