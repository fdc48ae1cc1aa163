//! Account ledger type
//!
//! This module defines the Account structure holding a single user's balance
//! and the two ledger primitives, withdraw and deposit.

use crate::types::AtmError;
use rust_decimal::Decimal;

/// A single user's account balance
///
/// Each user owns exactly one account. The balance is a currency value and
/// the withdraw primitive never lets it go negative. There is no upper bound
/// beyond the `Decimal` range, which is guarded with checked arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    balance: Decimal,
}

impl Account {
    /// Create a new account with the given opening balance
    pub fn new(opening_balance: Decimal) -> Self {
        Account {
            balance: opening_balance,
        }
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Withdraw funds from the account
    ///
    /// Fails without mutating the balance if the requested amount exceeds it.
    /// The amount is assumed to be non-negative; the session controller
    /// validates user input before calling in.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount exceeds the current balance
    /// - Subtracting the amount would cause underflow
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AtmError> {
        if amount > self.balance {
            return Err(AtmError::insufficient_funds(self.balance, amount));
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| AtmError::arithmetic_underflow("withdrawal"))?;

        Ok(())
    }

    /// Deposit funds into the account
    ///
    /// Has no business-rule failure path; the only error condition is
    /// `Decimal` overflow, which leaves the balance unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if adding the amount would cause overflow.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AtmError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| AtmError::arithmetic_overflow("deposit"))?;

        Ok(())
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_holds_opening_balance() {
        let account = Account::new(Decimal::new(10000, 2)); // 100.00
        assert_eq!(account.balance(), Decimal::new(10000, 2));
    }

    #[test]
    fn test_default_account_starts_at_zero() {
        let account = Account::default();
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_deposit_increases_balance() {
        let mut account = Account::default();

        account.deposit(Decimal::new(10000, 2)).unwrap();

        assert_eq!(account.balance(), Decimal::new(10000, 2));
    }

    #[test]
    fn test_deposit_multiple_times_accumulates() {
        let mut account = Account::default();

        account.deposit(Decimal::new(1000, 2)).unwrap();
        account.deposit(Decimal::new(2500, 2)).unwrap();
        account.deposit(Decimal::new(500, 2)).unwrap();

        assert_eq!(account.balance(), Decimal::new(4000, 2));
    }

    #[test]
    fn test_withdraw_decreases_balance() {
        let mut account = Account::new(Decimal::new(10000, 2));

        account.withdraw(Decimal::new(4000, 2)).unwrap();

        assert_eq!(account.balance(), Decimal::new(6000, 2));
    }

    #[test]
    fn test_withdraw_entire_balance_succeeds() {
        let mut account = Account::new(Decimal::new(10000, 2));

        account.withdraw(Decimal::new(10000, 2)).unwrap();

        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_withdraw_with_insufficient_funds() {
        let mut account = Account::new(Decimal::new(5000, 2));

        let result = account.withdraw(Decimal::new(10000, 2));

        assert_eq!(
            result.unwrap_err(),
            AtmError::InsufficientFunds {
                balance: Decimal::new(5000, 2),
                requested: Decimal::new(10000, 2),
            }
        );

        // Balance must be unchanged
        assert_eq!(account.balance(), Decimal::new(5000, 2));
    }

    #[test]
    fn test_withdraw_from_empty_account_fails() {
        let mut account = Account::default();

        let result = account.withdraw(Decimal::new(1, 2));

        assert!(matches!(
            result.unwrap_err(),
            AtmError::InsufficientFunds { .. }
        ));
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_deposit_then_withdraw_restores_balance() {
        let mut account = Account::new(Decimal::new(7500, 2));

        account.deposit(Decimal::new(12345, 2)).unwrap();
        account.withdraw(Decimal::new(12345, 2)).unwrap();

        assert_eq!(account.balance(), Decimal::new(7500, 2));
    }

    #[test]
    fn test_deposit_overflow_leaves_balance_unchanged() {
        let mut account = Account::new(Decimal::MAX);

        let result = account.deposit(Decimal::ONE);

        assert!(matches!(
            result.unwrap_err(),
            AtmError::ArithmeticOverflow { .. }
        ));
        assert_eq!(account.balance(), Decimal::MAX);
    }
}
