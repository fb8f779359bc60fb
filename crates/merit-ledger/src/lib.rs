//! # merit-ledger
//!
//! Per-user balances of a fungible reputation token.
//!
//! Invariants:
//! - every balance stays >= 0 for all call sequences
//! - mint only increases a balance
//! - a successful transfer conserves total supply exactly
//!
//! Business-rule violations (non-positive amounts, insufficient balance)
//! resolve to a no-op or a `false` result, never an error. Non-finite
//! amounts take the same invalid branch as non-positive ones.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tracks balances of intangible reputation tokens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenLedger {
    balances: HashMap<String, f64>,
}

impl TokenLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` to `user`, creating the account at 0 if absent.
    /// No-op when `amount` is non-positive or non-finite.
    pub fn mint(&mut self, user: &str, amount: f64) {
        if !Self::valid_amount(amount) {
            debug!(user, amount, "mint skipped: invalid amount");
            return;
        }
        *self.balances.entry(user.to_string()).or_insert(0.0) += amount;
        debug!(user, amount, "minted");
    }

    /// Move `amount` from one account to another.
    ///
    /// Returns `false` without mutation when the amount is invalid or the
    /// source balance is insufficient. Debit and credit are applied
    /// together; no partial transfer state is observable.
    pub fn transfer(&mut self, from_user: &str, to_user: &str, amount: f64) -> bool {
        if !Self::valid_amount(amount) || self.balance_of(from_user) < amount {
            return false;
        }
        *self.balances.entry(from_user.to_string()).or_insert(0.0) -= amount;
        *self.balances.entry(to_user.to_string()).or_insert(0.0) += amount;
        debug!(from_user, to_user, amount, "transferred");
        true
    }

    /// 0.0 for users never seen.
    pub fn balance_of(&self, user: &str) -> f64 {
        self.balances.get(user).copied().unwrap_or(0.0)
    }

    /// Sum of all balances.
    pub fn total_supply(&self) -> f64 {
        self.balances.values().sum()
    }

    fn valid_amount(amount: f64) -> bool {
        amount.is_finite() && amount > 0.0
    }
}
