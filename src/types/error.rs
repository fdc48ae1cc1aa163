//! Error types for the ATM engine
//!
//! This module defines all error types that can occur during a session.
//! Errors are designed to be descriptive and user-friendly for console output.
//!
//! # Error Categories
//!
//! - **Session Errors**: Failed authentication, operations without a session
//! - **Ledger Errors**: Insufficient funds, arithmetic overflow/underflow
//! - **Transfer Errors**: Unknown recipient, transfer to own account
//! - **Roster Errors**: Missing roster file, malformed rows, duplicate IDs

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ATM engine
///
/// This enum represents all possible errors that can occur while loading the
/// user roster or operating on a session. Each variant includes relevant
/// context so the console view can render a helpful message.
///
/// Every session-level error is recoverable: the caller re-prompts and the
/// ledger state is unchanged. Roster errors are fatal at startup only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AtmError {
    /// No user matched the supplied ID/PIN pair
    ///
    /// This is a recoverable error - the console re-prompts for credentials.
    /// Intentionally does not reveal whether the ID or the PIN was wrong.
    #[error("Authentication failed: unknown user ID or incorrect PIN")]
    AuthenticationFailed,

    /// A ledger operation was attempted with no active session
    ///
    /// The original system left this case undefined; here it is an explicit,
    /// checked condition on every operation.
    #[error("No user is currently authenticated")]
    NotAuthenticated,

    /// Insufficient funds for a withdrawal or transfer
    ///
    /// This is a recoverable error - the operation is rejected and the
    /// account state remains unchanged.
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Current account balance
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Transfer recipient ID did not match any known user
    ///
    /// This is a recoverable error - no balance or log is touched.
    #[error("No user found with ID '{user_id}'")]
    RecipientNotFound {
        /// The recipient ID that was not found
        user_id: String,
    },

    /// Transfer addressed to the sender's own account
    ///
    /// Rejected explicitly rather than logging a no-op pair of transactions.
    #[error("Cannot transfer to your own account ('{user_id}')")]
    SelfTransfer {
        /// The sender's (and recipient's) user ID
        user_id: String,
    },

    /// A negative amount was supplied for a withdrawal, deposit, or transfer
    ///
    /// This is a recoverable error - the operation is rejected.
    #[error("Invalid amount {amount}: amounts must not be negative")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Arithmetic overflow would occur
    ///
    /// This is a recoverable error - the operation is rejected to maintain
    /// account integrity.
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// Arithmetic underflow would occur
    ///
    /// This is a recoverable error - the operation is rejected to maintain
    /// account integrity.
    #[error("Arithmetic underflow in {operation}")]
    ArithmeticUnderflow {
        /// Operation that would underflow
        operation: String,
    },

    /// Roster file not found at the specified path
    ///
    /// This is a fatal error that prevents startup.
    #[error("Roster file not found: {path}")]
    RosterNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading the roster file
    ///
    /// This is a fatal startup error (file permissions, disk issues, etc.).
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Roster CSV parsing error occurred
    ///
    /// This is a fatal startup error - a broken roster row means the seed
    /// data cannot be trusted.
    #[error("Roster parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Two roster rows share the same user ID
    ///
    /// User IDs must be unique; this is a fatal startup error.
    #[error("Duplicate user ID '{user_id}' in roster")]
    DuplicateUser {
        /// The user ID that appeared more than once
        user_id: String,
    },
}

// Conversion from io::Error to AtmError
impl From<std::io::Error> for AtmError {
    fn from(error: std::io::Error) -> Self {
        AtmError::IoError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl AtmError {
    /// Create an InsufficientFunds error
    pub fn insufficient_funds(balance: Decimal, requested: Decimal) -> Self {
        AtmError::InsufficientFunds { balance, requested }
    }

    /// Create a RecipientNotFound error
    pub fn recipient_not_found(user_id: &str) -> Self {
        AtmError::RecipientNotFound {
            user_id: user_id.to_string(),
        }
    }

    /// Create a SelfTransfer error
    pub fn self_transfer(user_id: &str) -> Self {
        AtmError::SelfTransfer {
            user_id: user_id.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        AtmError::InvalidAmount { amount }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        AtmError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create an ArithmeticUnderflow error
    pub fn arithmetic_underflow(operation: &str) -> Self {
        AtmError::ArithmeticUnderflow {
            operation: operation.to_string(),
        }
    }

    /// Create a DuplicateUser error
    pub fn duplicate_user(user_id: &str) -> Self {
        AtmError::DuplicateUser {
            user_id: user_id.to_string(),
        }
    }
}
