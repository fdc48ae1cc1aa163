//! Transaction log types
//!
//! This module defines the immutable log entries appended to a user's
//! transaction history as a side effect of successful ledger operations.

use rust_decimal::Decimal;
use std::fmt;

/// Kinds of log entries a session can produce
///
/// Withdrawal and Deposit record direct ledger operations. TransferOut and
/// TransferIn record the two sides of a transfer and carry the counterparty's
/// display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Cash withdrawal from the user's own account
    Withdrawal,

    /// Cash deposit into the user's own account
    Deposit,

    /// Outgoing side of a transfer (recorded on the sender)
    TransferOut,

    /// Incoming side of a transfer (recorded on the recipient)
    TransferIn,
}

/// An immutable record of one balance-affecting event
///
/// Created only when a ledger-mutating operation succeeds, appended to the
/// owning user's log, and never mutated or removed afterwards. The amount is
/// signed: negative for outgoing kinds (Withdrawal, TransferOut), positive
/// for incoming kinds (Deposit, TransferIn).
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Decimal,
    counterparty: Option<String>,
}

/// Negate an outgoing amount without giving zero a negative sign flag
fn outgoing(amount: Decimal) -> Decimal {
    if amount.is_zero() {
        amount
    } else {
        -amount
    }
}

impl Transaction {
    /// Record a withdrawal of `amount` (stored as a negative value)
    pub fn withdrawal(amount: Decimal) -> Self {
        Transaction {
            kind: TransactionKind::Withdrawal,
            amount: outgoing(amount),
            counterparty: None,
        }
    }

    /// Record a deposit of `amount` (stored as a positive value)
    pub fn deposit(amount: Decimal) -> Self {
        Transaction {
            kind: TransactionKind::Deposit,
            amount,
            counterparty: None,
        }
    }

    /// Record the sender's side of a transfer to `recipient_name`
    pub fn transfer_out(amount: Decimal, recipient_name: &str) -> Self {
        Transaction {
            kind: TransactionKind::TransferOut,
            amount: outgoing(amount),
            counterparty: Some(recipient_name.to_string()),
        }
    }

    /// Record the recipient's side of a transfer from `sender_name`
    pub fn transfer_in(amount: Decimal, sender_name: &str) -> Self {
        Transaction {
            kind: TransactionKind::TransferIn,
            amount,
            counterparty: Some(sender_name.to_string()),
        }
    }

    /// The kind of event this entry records
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Signed amount: negative for outgoing, positive for incoming
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Counterparty display name, set only for transfer kinds
    pub fn counterparty(&self) -> Option<&str> {
        self.counterparty.as_deref()
    }
}

impl fmt::Display for Transaction {
    /// Render an entry as a single history line, e.g. `Deposit: $100.00`
    /// or `Transfer to Jane Smith: $-40.00`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.counterparty.as_deref()) {
            (TransactionKind::Withdrawal, _) => write!(f, "Withdrawal: ${}", self.amount),
            (TransactionKind::Deposit, _) => write!(f, "Deposit: ${}", self.amount),
            (TransactionKind::TransferOut, Some(name)) => {
                write!(f, "Transfer to {}: ${}", name, self.amount)
            }
            (TransactionKind::TransferIn, Some(name)) => {
                write!(f, "Transfer from {}: ${}", name, self.amount)
            }
            // Transfer entries always carry a counterparty; constructors enforce it
            (TransactionKind::TransferOut, None) => write!(f, "Transfer: ${}", self.amount),
            (TransactionKind::TransferIn, None) => write!(f, "Transfer: ${}", self.amount),
        }
    }
}
