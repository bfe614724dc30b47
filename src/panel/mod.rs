//! Headless presentation layer for the account.
//!
//! The panel is a teller screen without the pixels: a balance and loan
//! readout plus one control per action. [`availability`] reports *every*
//! reason a control is disabled instead of stopping at the first, using
//! Stillwater's `Validation`.
//!
//! These rules only decide what the screen offers. The machine re-checks
//! every action itself, so a disabled control that is pressed anyway is
//! still handled correctly.
//!
//! # Example
//!
//! ```rust
//! use passbook::core::AccountState;
//! use passbook::panel::{availability, Control, DisabledReason};
//!
//! let reasons = availability(&AccountState::INITIAL, Control::Withdraw);
//! assert!(reasons.is_failure());
//!
//! let opened = AccountState::active(500, 0);
//! assert!(availability(&opened, Control::Withdraw).is_success());
//! assert_eq!(
//!     passbook::panel::disabled_reasons(&opened, Control::Open),
//!     vec![DisabledReason::AlreadyOpen]
//! );
//! ```

mod screen;
mod teller;

pub use screen::{ControlView, Screen};
pub use teller::Teller;

use crate::core::{AccountState, Action};
use crate::terms::AccountTerms;
use serde::Serialize;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// One button on the teller screen.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Control {
    Open,
    Deposit,
    Withdraw,
    RequestLoan,
    PayLoan,
    Close,
}

impl Control {
    /// Every control, in screen order.
    pub const ALL: [Control; 6] = [
        Control::Open,
        Control::Deposit,
        Control::Withdraw,
        Control::RequestLoan,
        Control::PayLoan,
        Control::Close,
    ];

    /// The action this control forwards.
    pub const fn action(&self) -> Action {
        match self {
            Self::Open => Action::OpenAccount,
            Self::Deposit => Action::Deposit,
            Self::Withdraw => Action::Withdraw,
            Self::RequestLoan => Action::RequestLoan,
            Self::PayLoan => Action::PayLoan,
            Self::Close => Action::CloseAccount,
        }
    }

    /// The control that forwards `action`.
    pub const fn for_action(action: Action) -> Self {
        match action {
            Action::OpenAccount => Self::Open,
            Action::Deposit => Self::Deposit,
            Action::Withdraw => Self::Withdraw,
            Action::RequestLoan => Self::RequestLoan,
            Action::PayLoan => Self::PayLoan,
            Action::CloseAccount => Self::Close,
        }
    }

    /// Button caption, with amounts taken from `terms`.
    pub fn label(&self, terms: &AccountTerms) -> String {
        match self {
            Self::Open => "Open account".to_string(),
            Self::Deposit => format!("Deposit {}", terms.deposit()),
            Self::Withdraw => format!("Withdraw {}", terms.withdrawal()),
            Self::RequestLoan => format!("Request a loan of {}", terms.loan()),
            Self::PayLoan => "Pay loan".to_string(),
            Self::Close => "Close account".to_string(),
        }
    }
}

/// Why a control is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DisabledReason {
    #[error("account is already open")]
    AlreadyOpen,

    #[error("account is not open")]
    AccountInactive,

    #[error("balance is zero")]
    NoFunds,

    #[error("a loan is outstanding")]
    LoanOutstanding,

    #[error("there is no loan to pay")]
    NoLoan,

    #[error("balance is not zero")]
    BalanceNotZero,
}

type Availability = Validation<(), NonEmptyVec<DisabledReason>>;

fn require(condition: bool, reason: DisabledReason) -> Availability {
    if condition {
        Validation::success(())
    } else {
        Validation::fail(reason)
    }
}

/// Check whether `control` is enabled in `state`, accumulating ALL reasons
/// it is not.
pub fn availability(state: &AccountState, control: Control) -> Availability {
    let active = || require(state.is_active, DisabledReason::AccountInactive);

    let checks: Vec<Availability> = match control {
        Control::Open => vec![require(!state.is_active, DisabledReason::AlreadyOpen)],
        Control::Deposit => vec![active()],
        Control::Withdraw => vec![
            active(),
            require(state.balance != 0, DisabledReason::NoFunds),
        ],
        Control::RequestLoan => vec![
            active(),
            require(!state.has_loan(), DisabledReason::LoanOutstanding),
        ],
        Control::PayLoan => vec![active(), require(state.has_loan(), DisabledReason::NoLoan)],
        // The screen only looks at the balance here; the machine still
        // refuses to close while a loan is outstanding.
        Control::Close => vec![
            active(),
            require(state.balance == 0, DisabledReason::BalanceNotZero),
        ],
    };

    Validation::all_vec(checks).map(|_| ())
}

/// Whether `control` is enabled in `state`.
pub fn is_enabled(state: &AccountState, control: Control) -> bool {
    availability(state, control).is_success()
}

/// Every reason `control` is disabled in `state`; empty when enabled.
pub fn disabled_reasons(state: &AccountState, control: Control) -> Vec<DisabledReason> {
    match availability(state, control) {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(reasons) => reasons.iter().copied().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_account_only_enables_open() {
        let state = AccountState::INITIAL;
        for control in Control::ALL {
            assert_eq!(is_enabled(&state, control), control == Control::Open);
        }
    }

    #[test]
    fn open_is_disabled_once_active() {
        assert_eq!(
            disabled_reasons(&AccountState::active(500, 0), Control::Open),
            vec![DisabledReason::AlreadyOpen]
        );
    }

    #[test]
    fn withdraw_accumulates_all_reasons() {
        let state = AccountState::INITIAL;
        assert_eq!(
            disabled_reasons(&state, Control::Withdraw),
            vec![DisabledReason::AccountInactive, DisabledReason::NoFunds]
        );
    }

    #[test]
    fn withdraw_disabled_at_zero_balance() {
        assert_eq!(
            disabled_reasons(&AccountState::active(0, 0), Control::Withdraw),
            vec![DisabledReason::NoFunds]
        );
        assert!(is_enabled(&AccountState::active(50, 0), Control::Withdraw));
    }

    #[test]
    fn loan_controls_follow_loan_slot() {
        let without = AccountState::active(600, 0);
        let with = AccountState::active(5600, 5000);

        assert!(is_enabled(&without, Control::RequestLoan));
        assert!(!is_enabled(&without, Control::PayLoan));
        assert_eq!(
            disabled_reasons(&with, Control::RequestLoan),
            vec![DisabledReason::LoanOutstanding]
        );
        assert!(is_enabled(&with, Control::PayLoan));
    }

    #[test]
    fn close_requires_zero_balance() {
        assert!(is_enabled(&AccountState::active(0, 0), Control::Close));
        assert_eq!(
            disabled_reasons(&AccountState::active(-4400, 0), Control::Close),
            vec![DisabledReason::BalanceNotZero]
        );
    }

    #[test]
    fn close_control_ignores_loan_but_machine_refuses() {
        let state = AccountState::active(0, 5000);
        assert!(is_enabled(&state, Control::Close));
        assert!(!crate::machine::permits(&state, Control::Close.action()));
    }

    #[test]
    fn controls_map_one_to_one_onto_actions() {
        for control in Control::ALL {
            assert_eq!(Control::for_action(control.action()), control);
        }
        for action in Action::ALL {
            assert_eq!(Control::for_action(action).action(), action);
        }
    }

    #[test]
    fn labels_use_terms_amounts() {
        let terms = AccountTerms::default();
        assert_eq!(Control::Deposit.label(&terms), "Deposit 150");
        assert_eq!(Control::Withdraw.label(&terms), "Withdraw 50");
        assert_eq!(Control::RequestLoan.label(&terms), "Request a loan of 5000");
        assert_eq!(Control::Close.label(&terms), "Close account");
    }
}
