//! User type
//!
//! A user couples an identity (ID, PIN, display name) with exactly one
//! account and an append-only transaction log.

use crate::types::{Account, Transaction};
use rust_decimal::Decimal;

/// One known user of the ATM
///
/// The ID and PIN are immutable after construction; the owned account and
/// transaction log are mutated only through the session controller. The log
/// preserves insertion order, which is the chronological order of events.
///
/// PINs are plaintext and compared by exact match. This mirrors the system
/// being simulated and is a known limitation, not a design goal.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    user_id: String,
    pin: String,
    name: String,
    account: Account,
    transactions: Vec<Transaction>,
}

impl User {
    /// Create a user with an empty transaction log
    pub fn new(user_id: &str, pin: &str, name: &str, opening_balance: Decimal) -> Self {
        User {
            user_id: user_id.to_string(),
            pin: pin.to_string(),
            name: name.to_string(),
            account: Account::new(opening_balance),
            transactions: Vec::new(),
        }
    }

    /// Unique user identifier
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check a PIN attempt by exact string equality
    ///
    /// No trimming or normalization is applied; case and whitespace are
    /// significant.
    pub fn verify_pin(&self, pin: &str) -> bool {
        self.pin == pin
    }

    /// The user's account
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Mutable access to the user's account, for ledger operations
    pub fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    /// The transaction log, oldest entry first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Append a log entry
    ///
    /// Called only after the corresponding ledger mutation succeeded.
    pub fn record_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new("123456", "1234", "John Doe", Decimal::ZERO)
    }

    #[test]
    fn test_new_user_starts_with_empty_log() {
        let user = sample_user();

        assert_eq!(user.user_id(), "123456");
        assert_eq!(user.name(), "John Doe");
        assert_eq!(user.account().balance(), Decimal::ZERO);
        assert!(user.transactions().is_empty());
    }

    #[test]
    fn test_verify_pin_exact_match() {
        let user = sample_user();

        assert!(user.verify_pin("1234"));
        assert!(!user.verify_pin("4321"));
    }

    #[test]
    fn test_verify_pin_is_literal() {
        let user = sample_user();

        // No trimming or case folding
        assert!(!user.verify_pin(" 1234"));
        assert!(!user.verify_pin("1234 "));
        assert!(!user.verify_pin(""));
    }

    #[test]
    fn test_record_transaction_preserves_order() {
        let mut user = sample_user();

        user.record_transaction(Transaction::deposit(Decimal::new(10000, 2)));
        user.record_transaction(Transaction::withdrawal(Decimal::new(4000, 2)));

        let log = user.transactions();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], Transaction::deposit(Decimal::new(10000, 2)));
        assert_eq!(log[1], Transaction::withdrawal(Decimal::new(4000, 2)));
    }
}
