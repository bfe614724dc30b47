//! Account state and the `State` trait it implements.
//!
//! All state machine states implement `State`, which provides pure
//! methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States represent immutable
/// values that describe the current position in a state machine.
///
/// # Required Traits
///
/// - `Clone`: States are replaced wholesale, never mutated in place
/// - `PartialEq`: "Unchanged" is checked by comparing values
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States are rendered as JSON by the teller
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// The single bank account modeled by the machine.
///
/// `AccountState` is a plain `Copy` value: every accepted action produces a
/// fresh value and a rejected action hands back the value it was given.
///
/// # Example
///
/// ```rust
/// use passbook::core::{AccountState, State};
///
/// let state = AccountState::INITIAL;
/// assert_eq!(state.name(), "Inactive");
/// assert!(!state.has_loan());
/// assert_eq!(state, AccountState::default());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountState {
    /// Current balance. Goes negative only after paying off a loan that
    /// exceeds the balance.
    pub balance: i64,
    /// Outstanding loan principal, 0 when there is no loan.
    pub loan_amount: i64,
    /// Whether the account is open.
    pub is_active: bool,
}

impl AccountState {
    /// The state every account lifecycle starts from and returns to on close.
    pub const INITIAL: AccountState = AccountState {
        balance: 0,
        loan_amount: 0,
        is_active: false,
    };

    /// An open account with the given balance and loan.
    pub const fn active(balance: i64, loan_amount: i64) -> Self {
        Self {
            balance,
            loan_amount,
            is_active: true,
        }
    }

    /// Whether a loan is outstanding.
    pub const fn has_loan(&self) -> bool {
        self.loan_amount != 0
    }

    /// No loan and nothing left in the account: the only state close accepts.
    pub const fn is_settled(&self) -> bool {
        self.loan_amount == 0 && self.balance == 0
    }
}

impl Default for AccountState {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl State for AccountState {
    fn name(&self) -> &str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }

    fn is_error(&self) -> bool {
        self.balance < 0
    }
}
