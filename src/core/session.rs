//! Session controller
//!
//! This module provides the `Session` that owns the user registry and the
//! authenticated-user state for one interactive run. It exposes the four
//! user-facing operations (history, withdraw, deposit, transfer), delegating
//! balance arithmetic to the account ledger and lookups to the registry.
//!
//! The controller enforces the rules the original system left implicit:
//! - Every operation requires an authenticated user
//! - Amounts must not be negative
//! - Transfers are all-or-nothing and reject the sender's own account

use crate::core::registry::{UserHandle, UserRegistry};
use crate::types::{AtmError, Transaction, User};
use rust_decimal::Decimal;

/// Authentication state of a session
///
/// A session starts `Unauthenticated` and becomes `Authenticated` only via a
/// successful credential check. There is no logout; the state lasts until the
/// process ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No user has authenticated yet; every operation fails
    Unauthenticated,

    /// A user is active; operations act on this user's ledger
    Authenticated(UserHandle),
}

/// The authenticated-user context for one interactive run
///
/// Owns the registry outright: the roster is constructed once at startup and
/// handed to the session, so no other code path can reach the mutable user
/// state.
pub struct Session {
    registry: UserRegistry,
    state: SessionState,
}

impl Session {
    /// Create an unauthenticated session over a fixed roster
    pub fn new(registry: UserRegistry) -> Self {
        Session {
            registry,
            state: SessionState::Unauthenticated,
        }
    }

    /// Current authentication state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether a user is currently authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// Shared access to the roster
    pub fn registry(&self) -> &UserRegistry {
        &self.registry
    }

    /// Authenticate a user and activate the session
    ///
    /// Delegates the credential check to the registry. On success the session
    /// transitions to `Authenticated`; on failure the state is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` if no user matches both ID and PIN.
    pub fn login(&mut self, user_id: &str, pin: &str) -> Result<(), AtmError> {
        let handle = self.registry.authenticate(user_id, pin)?;
        self.state = SessionState::Authenticated(handle);
        Ok(())
    }

    /// The currently authenticated user
    ///
    /// # Errors
    ///
    /// Returns `NotAuthenticated` if no user has logged in.
    pub fn current_user(&self) -> Result<&User, AtmError> {
        let handle = self.current_handle()?;
        Ok(self.registry.get(handle))
    }

    /// The current user's transaction log, oldest entry first
    ///
    /// Read-only projection; the log itself is never reordered or trimmed.
    ///
    /// # Errors
    ///
    /// Returns `NotAuthenticated` if no user has logged in.
    pub fn transaction_history(&self) -> Result<&[Transaction], AtmError> {
        Ok(self.current_user()?.transactions())
    }

    /// Withdraw funds from the current user's account
    ///
    /// On success a `Withdrawal` entry with the negated amount is appended to
    /// the log. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No user is authenticated
    /// - The amount is negative
    /// - The amount exceeds the current balance
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AtmError> {
        let handle = self.current_handle()?;
        validate_amount(amount)?;

        let user = self.registry.get_mut(handle);
        user.account_mut().withdraw(amount)?;
        user.record_transaction(Transaction::withdrawal(amount));

        Ok(())
    }

    /// Deposit funds into the current user's account
    ///
    /// On success a `Deposit` entry is appended to the log. Deposits have no
    /// business-rule failure path; only input validation and `Decimal`
    /// overflow can reject one.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No user is authenticated
    /// - The amount is negative
    /// - Adding the amount would overflow
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AtmError> {
        let handle = self.current_handle()?;
        validate_amount(amount)?;

        let user = self.registry.get_mut(handle);
        user.account_mut().deposit(amount)?;
        user.record_transaction(Transaction::deposit(amount));

        Ok(())
    }

    /// Transfer funds from the current user to another known user
    ///
    /// All-or-nothing: both post-transfer balances are validated before
    /// either account is touched, so a failure on any step leaves both
    /// parties exactly as they were, with no log entries. On success exactly
    /// two entries are appended: a `TransferOut` on the sender annotated with
    /// the recipient's name, and a `TransferIn` on the recipient annotated
    /// with the sender's name.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No user is authenticated
    /// - The amount is negative
    /// - The recipient ID matches no known user
    /// - The recipient is the current user's own account
    /// - The amount exceeds the sender's balance
    /// - The recipient's balance would overflow
    pub fn transfer(&mut self, recipient_id: &str, amount: Decimal) -> Result<(), AtmError> {
        let sender_handle = self.current_handle()?;
        validate_amount(amount)?;

        let recipient_handle = self
            .registry
            .handle_of(recipient_id)
            .ok_or_else(|| AtmError::recipient_not_found(recipient_id))?;

        if recipient_handle == sender_handle {
            return Err(AtmError::self_transfer(recipient_id));
        }

        let (sender, recipient) = self.registry.get_pair_mut(sender_handle, recipient_handle);

        // Validate both sides before committing anything
        let sender_balance = sender.account().balance();
        if amount > sender_balance {
            return Err(AtmError::insufficient_funds(sender_balance, amount));
        }
        if recipient.account().balance().checked_add(amount).is_none() {
            return Err(AtmError::arithmetic_overflow("transfer"));
        }

        let sender_name = sender.name().to_string();
        let recipient_name = recipient.name().to_string();

        // Commit; neither call can fail after the checks above
        sender.account_mut().withdraw(amount)?;
        recipient.account_mut().deposit(amount)?;

        sender.record_transaction(Transaction::transfer_out(amount, &recipient_name));
        recipient.record_transaction(Transaction::transfer_in(amount, &sender_name));

        Ok(())
    }

    fn current_handle(&self) -> Result<UserHandle, AtmError> {
        match self.state {
            SessionState::Authenticated(handle) => Ok(handle),
            SessionState::Unauthenticated => Err(AtmError::NotAuthenticated),
        }
    }
}

/// Reject negative amounts before they reach the ledger
///
/// The ledger primitives assume validated input; this is the single place
/// that enforces it for all user-facing operations.
fn validate_amount(amount: Decimal) -> Result<(), AtmError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AtmError::invalid_amount(amount));
    }
    Ok(())
}
