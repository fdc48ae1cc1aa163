//! Menu action parsing
//!
//! Maps the user's numeric menu selection onto a tagged action enum, so the
//! console loop dispatches on variants instead of magic numbers.

use std::fmt;

/// The five actions offered by the ATM menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// View the current user's transaction history
    ShowHistory,

    /// Withdraw cash from the current user's account
    Withdraw,

    /// Deposit cash into the current user's account
    Deposit,

    /// Transfer funds to another known user
    Transfer,

    /// End the session and exit
    Quit,
}

impl MenuAction {
    /// All actions in menu order; position + 1 is the numeric choice
    pub const ALL: [MenuAction; 5] = [
        MenuAction::ShowHistory,
        MenuAction::Withdraw,
        MenuAction::Deposit,
        MenuAction::Transfer,
        MenuAction::Quit,
    ];

    /// Parse a menu selection
    ///
    /// Accepts the menu's numeric choices with surrounding whitespace
    /// tolerated (menu input is a view concern, unlike credentials, which
    /// are compared literally).
    pub fn from_choice(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuAction::ShowHistory),
            "2" => Some(MenuAction::Withdraw),
            "3" => Some(MenuAction::Deposit),
            "4" => Some(MenuAction::Transfer),
            "5" => Some(MenuAction::Quit),
            _ => None,
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuAction::ShowHistory => "View Transaction History",
            MenuAction::Withdraw => "Withdraw",
            MenuAction::Deposit => "Deposit",
            MenuAction::Transfer => "Transfer",
            MenuAction::Quit => "Quit",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::history("1", MenuAction::ShowHistory)]
    #[case::withdraw("2", MenuAction::Withdraw)]
    #[case::deposit("3", MenuAction::Deposit)]
    #[case::transfer("4", MenuAction::Transfer)]
    #[case::quit("5", MenuAction::Quit)]
    #[case::with_whitespace(" 3 ", MenuAction::Deposit)]
    fn test_from_choice_valid(#[case] input: &str, #[case] expected: MenuAction) {
        assert_eq!(MenuAction::from_choice(input), Some(expected));
    }

    #[test]
    fn test_choices_follow_menu_order() {
        for (i, action) in MenuAction::ALL.iter().enumerate() {
            let choice = (i + 1).to_string();
            assert_eq!(MenuAction::from_choice(&choice), Some(*action));
        }
    }

    #[rstest]
    #[case::zero("0")]
    #[case::out_of_range("6")]
    #[case::word("deposit")]
    #[case::empty("")]
    fn test_from_choice_invalid(#[case] input: &str) {
        assert_eq!(MenuAction::from_choice(input), None);
    }
}
