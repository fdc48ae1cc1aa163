use clap::Parser;
use std::path::PathBuf;

/// Console ATM simulator over a fixed in-memory user roster
#[derive(Parser, Debug)]
#[command(name = "atm-engine")]
#[command(about = "Console ATM simulator over a fixed in-memory user roster", long_about = None)]
pub struct CliArgs {
    /// Optional roster CSV file with columns: user_id,pin,name,balance
    ///
    /// When omitted, the built-in two-user demonstration roster is used.
    #[arg(
        long = "users",
        value_name = "FILE",
        help = "Path to a roster CSV file (user_id,pin,name,balance); defaults to the demo roster"
    )]
    pub users_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::no_roster(&["program"], None)]
    #[case::with_roster(&["program", "--users", "users.csv"], Some("users.csv"))]
    fn test_users_file_parsing(#[case] args: &[&str], #[case] expected: Option<&str>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(
            parsed.users_file.as_deref(),
            expected.map(std::path::Path::new)
        );
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let result = CliArgs::try_parse_from(["program", "--strategy", "sync"]);
        assert!(result.is_err());
    }
}
