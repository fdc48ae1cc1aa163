//! Console ATM Engine CLI
//!
//! Interactive console ATM simulator over a fixed in-memory user roster.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --users roster.csv
//! ```
//!
//! With no arguments the built-in two-user demonstration roster is used.
//! A roster CSV has columns `user_id,pin,name,balance` (balance optional,
//! defaults to zero).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (roster file missing or malformed, I/O failure, etc.)

use rust_atm_engine::cli;
use rust_atm_engine::core::{Session, UserRegistry};
use rust_atm_engine::io::load_roster;
use rust_atm_engine::types::AtmError;
use rust_atm_engine::Console;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Build the roster: from the given file, or the built-in demo seed
    let registry = match build_registry(&args) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // One session per process run; the registry is owned by the session
    let mut session = Session::new(registry);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    if let Err(e) = console.run(&mut session) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn build_registry(args: &cli::CliArgs) -> Result<UserRegistry, AtmError> {
    match &args.users_file {
        Some(path) => {
            let users = load_roster(path)?;
            UserRegistry::new(users)
        }
        None => Ok(UserRegistry::demo()),
    }
}
