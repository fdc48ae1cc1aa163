//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account ledger type and its primitives
//! - `user`: User identity plus owned account and transaction log
//! - `transaction`: Immutable transaction log entries
//! - `error`: Error types for the ATM engine

pub mod account;
pub mod error;
pub mod transaction;
pub mod user;

pub use account::Account;
pub use error::AtmError;
pub use transaction::{Transaction, TransactionKind};
pub use user::User;
