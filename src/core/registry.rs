//! User registry
//!
//! This module provides the `UserRegistry` which holds the fixed roster of
//! known users. Membership is immutable after construction; each user's
//! nested account and transaction log are mutated only through the session
//! controller.
//!
//! The registry is an explicitly constructed value owned by the top-level
//! session assembly, never a hidden global.

use crate::types::{AtmError, User};
use rust_decimal::Decimal;

/// Index-based handle to a user inside the registry
///
/// Handles stay valid for the registry's whole lifetime because membership
/// never changes after construction.
pub type UserHandle = usize;

/// The fixed collection of known users, queryable by identifier
///
/// Lookups are linear scans over the roster; equality on the identifier
/// string is exact (no trimming or normalization). The roster is small and
/// fixed at startup, so no keyed index is kept.
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    /// Create a registry from seed users
    ///
    /// # Errors
    ///
    /// Returns `DuplicateUser` if two seed users share a user ID.
    pub fn new(users: Vec<User>) -> Result<Self, AtmError> {
        for (i, user) in users.iter().enumerate() {
            if users[..i].iter().any(|u| u.user_id() == user.user_id()) {
                return Err(AtmError::duplicate_user(user.user_id()));
            }
        }

        Ok(UserRegistry { users })
    }

    /// Create the built-in demonstration roster
    ///
    /// Two zero-balance users, used when no roster file is supplied at
    /// startup. These are the seed users of the system being simulated.
    pub fn demo() -> Self {
        let users = vec![
            User::new("123456", "1234", "John Doe", Decimal::ZERO),
            User::new("654321", "5678", "Jane Smith", Decimal::ZERO),
        ];

        // The hardcoded roster has unique IDs
        UserRegistry { users }
    }

    /// Number of users in the roster
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the roster is empty
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Find a user by ID
    ///
    /// Linear scan with exact string equality. Never mutates the registry.
    pub fn find_by_id(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.user_id() == user_id)
    }

    /// Find a user's handle by ID
    pub fn handle_of(&self, user_id: &str) -> Option<UserHandle> {
        self.users.iter().position(|user| user.user_id() == user_id)
    }

    /// Authenticate a user by ID and PIN
    ///
    /// Scans for a user whose identifier AND PIN both match exactly. There
    /// is no rate limiting, lockout, or hashing; PINs are plaintext by
    /// design of the system being simulated.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` if no user matches both fields.
    pub fn authenticate(&self, user_id: &str, pin: &str) -> Result<UserHandle, AtmError> {
        self.users
            .iter()
            .position(|user| user.user_id() == user_id && user.verify_pin(pin))
            .ok_or(AtmError::AuthenticationFailed)
    }

    /// Shared access to a user by handle
    pub fn get(&self, handle: UserHandle) -> &User {
        &self.users[handle]
    }

    /// Mutable access to a user by handle
    ///
    /// Restricted to the crate so all mutation flows through the session
    /// controller.
    pub(crate) fn get_mut(&mut self, handle: UserHandle) -> &mut User {
        &mut self.users[handle]
    }

    /// Mutable access to two distinct users at once
    ///
    /// Used by transfers, which commit to both parties in one operation.
    ///
    /// # Panics
    ///
    /// Panics if both handles refer to the same user; callers reject
    /// self-transfers before reaching this point.
    pub(crate) fn get_pair_mut(
        &mut self,
        a: UserHandle,
        b: UserHandle,
    ) -> (&mut User, &mut User) {
        assert_ne!(a, b, "get_pair_mut requires distinct handles");

        if a < b {
            let (left, right) = self.users.split_at_mut(b);
            (&mut left[a], &mut right[0])
        } else {
            let (left, right) = self.users.split_at_mut(a);
            (&mut right[0], &mut left[b])
        }
    }
}
