//! Line-oriented console view
//!
//! The interactive text interface over the session controller. It collects
//! credentials, dispatches menu actions, and renders operation results as
//! human-readable lines. All amounts and results come from the core; exact
//! wording lives here.
//!
//! The view is generic over `BufRead` and `Write`, so complete sessions can
//! be scripted in tests with in-memory buffers.

mod menu;

pub use menu::MenuAction;

use crate::core::Session;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// The interactive console loop
///
/// Owns the input and output streams for one run. Recoverable operation
/// errors are rendered to the user and the loop continues; only I/O errors
/// on the streams themselves end the run early.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given streams
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Run the interactive session until the user quits or input ends
    ///
    /// Outer loop: prompt for credentials until authentication succeeds.
    /// Inner loop: render the menu and dispatch the chosen action until
    /// `Quit`. End of input (EOF) ends the run cleanly at any prompt.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading from or writing to the streams
    /// fails.
    pub fn run(&mut self, session: &mut Session) -> std::io::Result<()> {
        writeln!(self.output, "Welcome to the ATM!")?;

        loop {
            let Some(user_id) = self.prompt("Enter User ID: ")? else {
                return Ok(());
            };
            let Some(pin) = self.prompt("Enter PIN: ")? else {
                return Ok(());
            };

            match session.login(&user_id, &pin) {
                Ok(()) => {
                    writeln!(self.output, "Authentication successful.")?;
                    return self.run_menu(session);
                }
                Err(e) => {
                    writeln!(self.output, "{}. Please try again.", e)?;
                }
            }
        }
    }

    /// The authenticated menu loop
    fn run_menu(&mut self, session: &mut Session) -> std::io::Result<()> {
        loop {
            self.show_menu()?;

            let Some(choice) = self.read_line()? else {
                return Ok(());
            };

            let Some(action) = MenuAction::from_choice(&choice) else {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };

            match action {
                MenuAction::ShowHistory => self.show_history(session)?,
                MenuAction::Withdraw => self.perform_withdrawal(session)?,
                MenuAction::Deposit => self.perform_deposit(session)?,
                MenuAction::Transfer => self.perform_transfer(session)?,
                MenuAction::Quit => {
                    writeln!(self.output, "Thank you for using the ATM. Goodbye!")?;
                    return Ok(());
                }
            }
        }
    }

    fn show_menu(&mut self) -> std::io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "ATM Menu:")?;
        for (i, action) in MenuAction::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, action)?;
        }
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()
    }

    fn show_history(&mut self, session: &Session) -> std::io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Transaction History:")?;

        match session.transaction_history() {
            Ok(transactions) if transactions.is_empty() => {
                writeln!(self.output, "No transactions found.")
            }
            Ok(transactions) => {
                for transaction in transactions {
                    writeln!(self.output, "{}", transaction)?;
                }
                Ok(())
            }
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn perform_withdrawal(&mut self, session: &mut Session) -> std::io::Result<()> {
        let Some(amount) = self.prompt_amount("Enter amount to withdraw: ")? else {
            return Ok(());
        };

        match session.withdraw(amount) {
            Ok(()) => writeln!(self.output, "Withdrawal successful. Please take your cash."),
            Err(e) => writeln!(self.output, "{}. Withdrawal failed.", e),
        }
    }

    fn perform_deposit(&mut self, session: &mut Session) -> std::io::Result<()> {
        let Some(amount) = self.prompt_amount("Enter amount to deposit: ")? else {
            return Ok(());
        };

        match session.deposit(amount) {
            Ok(()) => writeln!(self.output, "Deposit successful."),
            Err(e) => writeln!(self.output, "{}. Deposit failed.", e),
        }
    }

    fn perform_transfer(&mut self, session: &mut Session) -> std::io::Result<()> {
        let Some(recipient_id) = self.prompt("Enter recipient's User ID: ")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Enter amount to transfer: ")? else {
            return Ok(());
        };

        match session.transfer(&recipient_id, amount) {
            Ok(()) => writeln!(self.output, "Transfer successful."),
            Err(e) => writeln!(self.output, "{}. Transfer failed.", e),
        }
    }

    /// Print a prompt and read one line
    ///
    /// Credentials and IDs are returned with only the line ending stripped;
    /// no other trimming, since the core compares them literally.
    fn prompt(&mut self, text: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompt for a currency amount, re-prompting until it parses
    ///
    /// Returns `None` on end of input. Sign validation is left to the
    /// session controller; this only handles unparsable text.
    fn prompt_amount(&mut self, text: &str) -> std::io::Result<Option<Decimal>> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };

            match Decimal::from_str(line.trim()) {
                Ok(amount) => return Ok(Some(amount)),
                Err(_) => {
                    writeln!(self.output, "Invalid amount '{}'. Please try again.", line)?;
                }
            }
        }
    }

    /// Read one line, stripping the trailing newline
    ///
    /// Returns `None` at end of input.
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        let bytes_read = self.input.read_line(&mut line)?;

        if bytes_read == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }
}
