//! I/O module
//!
//! Handles roster CSV parsing.
//!
//! # Components
//!
//! - `csv_format` - Roster file format handling (record conversion)
//! - `roster_reader` - Streaming roster reader and the strict startup loader

pub mod csv_format;
pub mod roster_reader;

pub use csv_format::{convert_roster_record, RosterRecord};
pub use roster_reader::{load_roster, RosterReader};
