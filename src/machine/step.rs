//! Outcome of applying one action.

use crate::core::{AccountState, Action};
use serde::Serialize;
use std::fmt;

/// Why an action left the state unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Rejection {
    /// Only opening is allowed on an inactive account.
    AccountInactive,
    /// Withdrawal requires a positive balance.
    NoFunds,
    /// A loan is already outstanding.
    LoanOutstanding,
    /// There is no loan to pay.
    NoLoan,
    /// Closing requires no loan and a zero balance.
    NotSettled,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::AccountInactive => "account is not active",
            Self::NoFunds => "balance is not positive",
            Self::LoanOutstanding => "a loan is already outstanding",
            Self::NoLoan => "no loan is outstanding",
            Self::NotSettled => "loan or balance remains",
        };
        f.write_str(reason)
    }
}

/// Whether the machine took the action.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase", tag = "outcome", content = "reason")]
pub enum Outcome {
    Accepted,
    Rejected(Rejection),
}

/// Result of a single step: the next state and how it was reached.
///
/// A rejected step always carries the state it was given.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Step {
    pub action: Action,
    pub state: AccountState,
    pub outcome: Outcome,
}

impl Step {
    pub(crate) const fn accepted(action: Action, state: AccountState) -> Self {
        Self {
            action,
            state,
            outcome: Outcome::Accepted,
        }
    }

    pub(crate) const fn rejected(action: Action, state: AccountState, reason: Rejection) -> Self {
        Self {
            action,
            state,
            outcome: Outcome::Rejected(reason),
        }
    }

    pub const fn is_accepted(&self) -> bool {
        matches!(self.outcome, Outcome::Accepted)
    }

    /// The rule that refused the action, if any.
    pub const fn rejection(&self) -> Option<Rejection> {
        match self.outcome {
            Outcome::Accepted => None,
            Outcome::Rejected(reason) => Some(reason),
        }
    }
}
