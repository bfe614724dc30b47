//! The six actions an account accepts.
//!
//! Actions carry no payload; the amounts they move are fixed by
//! [`AccountTerms`](crate::terms::AccountTerms).

use crate::error::MachineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user-triggered request against the account.
///
/// On the wire an action is a tagged object, `{"type": "deposit"}`, and its
/// kind is the camelCase literal returned by [`Action::kind`].
///
/// # Example
///
/// ```rust
/// use passbook::core::Action;
///
/// let action: Action = "requestLoan".parse().unwrap();
/// assert_eq!(action, Action::RequestLoan);
/// assert_eq!(action.kind(), "requestLoan");
///
/// assert!("transfer".parse::<Action>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    OpenAccount,
    Deposit,
    Withdraw,
    RequestLoan,
    PayLoan,
    CloseAccount,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 6] = [
        Action::OpenAccount,
        Action::Deposit,
        Action::Withdraw,
        Action::RequestLoan,
        Action::PayLoan,
        Action::CloseAccount,
    ];

    /// The wire literal for this action.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::OpenAccount => "openAccount",
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
            Self::RequestLoan => "requestLoan",
            Self::PayLoan => "payLoan",
            Self::CloseAccount => "closeAccount",
        }
    }

    /// Whether the action skips the inactive-account gate.
    pub const fn bypasses_gate(&self) -> bool {
        matches!(self, Self::OpenAccount)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

impl FromStr for Action {
    type Err = MachineError;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.kind() == kind)
            .ok_or_else(|| MachineError::UnknownAction {
                kind: kind.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_parses_back_to_its_action() {
        for action in Action::ALL {
            assert_eq!(action.kind().parse::<Action>().unwrap(), action);
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "transfer".parse::<Action>().unwrap_err();
        assert!(matches!(err, MachineError::UnknownAction { ref kind } if kind == "transfer"));
    }

    #[test]
    fn kinds_are_case_sensitive() {
        assert!("Deposit".parse::<Action>().is_err());
        assert!("open_account".parse::<Action>().is_err());
        assert!("".parse::<Action>().is_err());
    }

    #[test]
    fn only_open_bypasses_gate() {
        let bypassing: Vec<_> = Action::ALL
            .into_iter()
            .filter(Action::bypasses_gate)
            .collect();
        assert_eq!(bypassing, vec![Action::OpenAccount]);
    }

    #[test]
    fn action_serializes_as_tagged_object() {
        let json = serde_json::to_string(&Action::PayLoan).unwrap();
        assert_eq!(json, r#"{"type":"payLoan"}"#);

        let action: Action = serde_json::from_str(r#"{"type":"closeAccount"}"#).unwrap();
        assert_eq!(action, Action::CloseAccount);
    }

    #[test]
    fn unknown_tag_fails_to_deserialize() {
        let result = serde_json::from_str::<Action>(r#"{"type":"overdraft"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn display_uses_wire_literal() {
        assert_eq!(Action::OpenAccount.to_string(), "openAccount");
    }
}
