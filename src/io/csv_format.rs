//! CSV format handling for roster records
//!
//! This module centralizes the roster file format concerns:
//! - RosterRecord structure for deserialization
//! - Conversion from CSV records to seed users
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Roster Format
//!
//! One row per user with columns: `user_id,pin,name,balance`. The balance
//! column is optional and defaults to zero, matching the simulated system's
//! zero-balance seed users.

use crate::types::User;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// CSV record structure for roster deserialization
///
/// Matches the roster file columns. The balance field is optional because
/// seed users commonly start at zero.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RosterRecord {
    pub user_id: String,
    pub pin: String,
    pub name: String,
    pub balance: Option<String>,
}

/// Convert a RosterRecord to a seed User
///
/// This function:
/// - Rejects empty user IDs, PINs, and names
/// - Parses the balance string into a Decimal (defaulting to zero)
/// - Rejects negative opening balances
///
/// # Arguments
///
/// * `record` - The deserialized roster record
///
/// # Returns
///
/// Result containing either:
/// - Ok(User) - Successfully converted seed user
/// - Err(String) - Error message describing the conversion failure
pub fn convert_roster_record(record: RosterRecord) -> Result<User, String> {
    if record.user_id.is_empty() {
        return Err("Roster row has an empty user ID".to_string());
    }
    if record.pin.is_empty() {
        return Err(format!("User '{}' has an empty PIN", record.user_id));
    }
    if record.name.is_empty() {
        return Err(format!("User '{}' has an empty name", record.user_id));
    }

    // Parse balance if present, default to zero
    let balance = match record.balance {
        Some(balance_str) if !balance_str.trim().is_empty() => {
            match Decimal::from_str(balance_str.trim()) {
                Ok(decimal) => decimal,
                Err(_) => {
                    return Err(format!(
                        "Invalid balance '{}' for user '{}'",
                        balance_str, record.user_id
                    ))
                }
            }
        }
        _ => Decimal::ZERO,
    };

    if balance.is_sign_negative() && !balance.is_zero() {
        return Err(format!(
            "Negative opening balance {} for user '{}'",
            balance, record.user_id
        ));
    }

    Ok(User::new(&record.user_id, &record.pin, &record.name, balance))
}
