use merit_ledger::TokenLedger;
use proptest::prelude::*;

const USERS: [&str; 3] = ["alice", "bob", "carol"];

#[derive(Debug, Clone)]
enum Op {
    Mint { user: usize, amount: f64 },
    Transfer { from: usize, to: usize, amount: f64 },
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..USERS.len(), -10.0f64..10.0).prop_map(|(user, amount)| Op::Mint { user, amount }),
        (0..USERS.len(), 0..USERS.len(), -10.0f64..10.0)
            .prop_map(|(from, to, amount)| Op::Transfer { from, to, amount }),
    ]
}

// ── Non-negativity ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn balances_stay_non_negative(ops in prop::collection::vec(arb_op(), 0..200)) {
        let mut ledger = TokenLedger::new();
        for op in ops {
            match op {
                Op::Mint { user, amount } => ledger.mint(USERS[user], amount),
                Op::Transfer { from, to, amount } => {
                    ledger.transfer(USERS[from], USERS[to], amount);
                }
            }
            for user in USERS {
                prop_assert!(ledger.balance_of(user) >= 0.0);
            }
        }
    }
}

// ── Supply conservation ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn transfer_conserves_total_supply(
        initial in 0.0f64..100.0,
        amount in -10.0f64..110.0,
    ) {
        let mut ledger = TokenLedger::new();
        ledger.mint("alice", initial);
        let before = ledger.total_supply();

        ledger.transfer("alice", "bob", amount);

        let after = ledger.total_supply();
        prop_assert!((after - before).abs() < 1e-9, "supply drifted: {before} -> {after}");
    }

    #[test]
    fn positive_mint_grows_supply_exactly(
        initial in 0.0f64..100.0,
        amount in f64::EPSILON..50.0,
    ) {
        let mut ledger = TokenLedger::new();
        ledger.mint("alice", initial);
        let before = ledger.total_supply();

        ledger.mint("bob", amount);

        prop_assert!((ledger.total_supply() - before - amount).abs() < 1e-9);
    }
}

// ── Pairwise conservation on success ─────────────────────────────────────

proptest! {
    #[test]
    fn successful_transfer_moves_exactly_amount(
        initial in 1.0f64..100.0,
        fraction in 0.01f64..1.0,
    ) {
        let mut ledger = TokenLedger::new();
        ledger.mint("alice", initial);
        let amount = initial * fraction;

        prop_assert!(ledger.transfer("alice", "bob", amount));
        prop_assert!((ledger.balance_of("alice") - (initial - amount)).abs() < 1e-9);
        prop_assert!((ledger.balance_of("bob") - amount).abs() < 1e-9);
    }
}
