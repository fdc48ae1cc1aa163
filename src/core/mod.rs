//! Core business logic module
//!
//! This module contains the core session components:
//! - `registry` - The fixed roster of known users and credential checks
//! - `session` - The session controller and its state machine

pub mod registry;
pub mod session;

pub use registry::{UserHandle, UserRegistry};
pub use session::{Session, SessionState};
