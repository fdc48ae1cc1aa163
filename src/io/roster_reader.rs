//! Roster CSV reader with iterator interface
//!
//! Provides a streaming iterator over seed users from a roster CSV file and
//! the strict `load_roster` entry point used at startup. Delegates CSV format
//! concerns to the csv_format module.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record parsing errors are yielded as Err variants in the
//!   iterator, carrying the offending line number
//! - `load_roster` treats any bad row as fatal: a broken roster means the
//!   seed data cannot be trusted
//!
//! # Field Handling
//!
//! Identity fields are deliberately NOT trimmed. IDs and PINs are compared
//! literally during authentication, so the roster must preserve them
//! literally too.

use crate::io::csv_format::{convert_roster_record, RosterRecord};
use crate::types::{AtmError, User};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

/// Streaming reader over roster rows
///
/// Implements the Iterator trait, yielding `Result<User, AtmError>` for
/// each CSV row, so callers can decide how strictly to treat bad rows.
#[derive(Debug)]
pub struct RosterReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl RosterReader {
    /// Create a new RosterReader from a file path
    ///
    /// Opens the roster file and prepares it for streaming iteration. The
    /// CSV reader allows a missing balance column (flexible field counts)
    /// and preserves field contents byte-for-byte.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the roster CSV file
    ///
    /// # Returns
    ///
    /// * `Ok(RosterReader)` if the file opened successfully
    /// * `Err(AtmError)` if the file is missing or could not be opened
    pub fn new(path: &Path) -> Result<Self, AtmError> {
        if !path.exists() {
            return Err(AtmError::RosterNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;

        let reader = ReaderBuilder::new().flexible(true).from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for RosterReader {
    type Item = Result<User, AtmError>;

    /// Get the next seed user from the roster file
    ///
    /// Reads the next CSV row, deserializes it to a RosterRecord, and
    /// converts it to a User. Errors carry the offending line number
    /// (line 1 is the header row).
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<RosterRecord>();

        match deserializer.next()? {
            Ok(record) => {
                self.line_num += 1;
                let line = self.line_num as u64 + 1;
                Some(
                    convert_roster_record(record).map_err(|message| AtmError::ParseError {
                        line: Some(line),
                        message,
                    }),
                )
            }
            Err(e) => {
                self.line_num += 1;
                Some(Err(AtmError::ParseError {
                    line: Some(self.line_num as u64 + 1),
                    message: format!("CSV parse error: {}", e),
                }))
            }
        }
    }
}

/// Load the complete seed roster from a CSV file
///
/// Strict startup loader: any unreadable or malformed row aborts the load.
/// Duplicate IDs are caught later by `UserRegistry::new`.
///
/// # Arguments
///
/// * `path` - Path to the roster CSV file
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be opened
/// - Any row fails to parse or convert
pub fn load_roster(path: &Path) -> Result<Vec<User>, AtmError> {
    let reader = RosterReader::new(path)?;

    let mut users = Vec::new();
    for result in reader {
        users.push(result?);
    }

    Ok(users)
}
