//! End-to-end integration tests
//!
//! These tests validate the complete assembly the binary performs: loading a
//! roster (from file or the demo seed), building a session, and driving it
//! either through the controller API or through a scripted console run.

use rust_atm_engine::core::{Session, UserRegistry};
use rust_atm_engine::io::load_roster;
use rust_atm_engine::types::{AtmError, TransactionKind};
use rust_atm_engine::Console;
use rust_decimal::Decimal;
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

/// Write a roster CSV to a temp file
fn write_roster(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

/// Run a scripted console session against the demo roster
fn run_console(script: &str) -> String {
    let mut session = Session::new(UserRegistry::demo());
    let mut output = Vec::new();

    Console::new(Cursor::new(script.as_bytes()), &mut output)
        .run(&mut session)
        .expect("console run failed");

    String::from_utf8(output).expect("console output should be UTF-8")
}

#[test]
fn test_roster_file_to_working_session() {
    let file = write_roster(
        "user_id,pin,name,balance\n111111,0000,Alice Example,250.00\n222222,9999,Bob Example,\n",
    );

    let users = load_roster(file.path()).unwrap();
    let registry = UserRegistry::new(users).unwrap();
    let mut session = Session::new(registry);

    session.login("111111", "0000").unwrap();
    session.transfer("222222", Decimal::new(5000, 2)).unwrap();

    let alice = session.registry().find_by_id("111111").unwrap();
    let bob = session.registry().find_by_id("222222").unwrap();
    assert_eq!(alice.account().balance(), Decimal::new(20000, 2));
    assert_eq!(bob.account().balance(), Decimal::new(5000, 2));
}

#[test]
fn test_roster_with_duplicate_ids_fails_at_registry() {
    let file = write_roster(
        "user_id,pin,name,balance\n111111,0000,Alice Example,\n111111,9999,Bob Example,\n",
    );

    let users = load_roster(file.path()).unwrap();
    let result = UserRegistry::new(users);

    assert_eq!(
        result.err(),
        Some(AtmError::DuplicateUser {
            user_id: "111111".to_string()
        })
    );
}

#[test]
fn test_malformed_roster_fails_at_load() {
    let file = write_roster("user_id,pin,name,balance\n111111,0000,Alice Example,not-a-number\n");

    let result = load_roster(file.path());

    assert!(matches!(result.err(), Some(AtmError::ParseError { .. })));
}

/// The reference walkthrough, driven through the session controller:
/// authenticate A, deposit 100, transfer 40 to B, fail a 1000 withdrawal.
#[test]
fn test_reference_scenario_through_controller() {
    let mut session = Session::new(UserRegistry::demo());

    session.login("123456", "1234").unwrap();

    session.deposit(Decimal::new(10000, 2)).unwrap();
    session.transfer("654321", Decimal::new(4000, 2)).unwrap();

    let result = session.withdraw(Decimal::new(100000, 2));
    assert!(matches!(
        result.unwrap_err(),
        AtmError::InsufficientFunds { .. }
    ));

    let john = session.registry().find_by_id("123456").unwrap();
    let jane = session.registry().find_by_id("654321").unwrap();

    assert_eq!(john.account().balance(), Decimal::new(6000, 2));
    assert_eq!(jane.account().balance(), Decimal::new(4000, 2));

    // Exactly two entries on the sender, one on the recipient; the failed
    // withdrawal left no trace
    let john_log = john.transactions();
    assert_eq!(john_log.len(), 2);
    assert_eq!(john_log[0].kind(), TransactionKind::Deposit);
    assert_eq!(john_log[1].kind(), TransactionKind::TransferOut);
    assert_eq!(john_log[1].counterparty(), Some("Jane Smith"));

    let jane_log = jane.transactions();
    assert_eq!(jane_log.len(), 1);
    assert_eq!(jane_log[0].kind(), TransactionKind::TransferIn);
    assert_eq!(jane_log[0].counterparty(), Some("John Doe"));
}

/// The same walkthrough, driven through the scripted console:
/// login, deposit 100, transfer 40, failed 1000 withdrawal, history, quit.
#[test]
fn test_reference_scenario_through_console() {
    let script = "123456\n1234\n\
                  3\n100.00\n\
                  4\n654321\n40.00\n\
                  2\n1000.00\n\
                  1\n\
                  5\n";

    let output = run_console(script);

    assert!(output.contains("Authentication successful."));
    assert!(output.contains("Deposit successful."));
    assert!(output.contains("Transfer successful."));
    assert!(output.contains("Insufficient funds: balance 60.00, requested 1000.00"));
    assert!(output.contains("Withdrawal failed."));
    assert!(output.contains("Deposit: $100.00"));
    assert!(output.contains("Transfer to Jane Smith: $-40.00"));
    assert!(output.contains("Thank you for using the ATM. Goodbye!"));
}

#[test]
fn test_console_credentials_are_literal() {
    // Trailing space in the PIN must not authenticate
    let output = run_console("123456\n1234 \n");

    assert!(output.contains("Authentication failed"));
    assert!(!output.contains("Authentication successful."));
}
