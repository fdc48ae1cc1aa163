//! Console ATM Engine Library
//! # Overview
//!
//! This library provides a single-session console ATM simulator: a fixed
//! in-memory roster of users, plaintext PIN authentication, and the four
//! account operations (history, withdraw, deposit, transfer).
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, User, Transaction, errors)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::registry`] - The fixed user roster and credential checks
//!   - [`core::session`] - Session state machine and operation orchestration
//! - [`io`] - Roster CSV loading
//! - [`console`] - The line-oriented text interface
//!
//! # Session Model
//!
//! A session starts unauthenticated and activates through one successful
//! ID/PIN check. Every operation requires the authenticated state; there is
//! no logout, and the process runs single-threaded with exactly one session.
//!
//! # Operations
//!
//! - **History**: read-only, insertion-ordered view of the user's log
//! - **Withdraw**: debits the balance; rejected if it would go negative
//! - **Deposit**: credits the balance; no business-rule failure path
//! - **Transfer**: all-or-nothing move to another known user, logging both
//!   sides with counterparty names

// Module declarations
pub mod cli;
pub mod console;
pub mod core;
pub mod io;
pub mod types;

pub use crate::console::{Console, MenuAction};
pub use crate::core::{Session, SessionState, UserHandle, UserRegistry};
pub use crate::io::load_roster;
pub use crate::types::{Account, AtmError, Transaction, TransactionKind, User};
