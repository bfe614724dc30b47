//! The account state machine.
//!
//! A pure reducer: `(state, action) -> state`. Accepted actions produce a
//! fresh [`AccountState`]; refused actions hand back the state they were
//! given, equal field for field. Refusals are the ordinary path and never
//! surface as errors. The only error is an action kind the machine does
//! not know, which is a caller bug.
//!
//! ```text
//! Inactive --openAccount--> Active(balance=500, loan=0)
//! Active(loan=0) --requestLoan--> Active(loan=5000)
//! Active(loan=5000) --payLoan--> Active(loan=0)
//! Active(loan=0, balance=0) --closeAccount--> Inactive
//! ```
//!
//! Every other (state, action) pair is a self-loop.

mod step;

pub use step::{Outcome, Rejection, Step};

use crate::core::{AccountState, Action, Guard, State};
use crate::error::MachineError;
use crate::terms::AccountTerms;

/// Apply `action` to `state` under the standard terms.
///
/// # Example
///
/// ```rust
/// use passbook::core::{AccountState, Action};
/// use passbook::machine::transition;
///
/// let opened = transition(AccountState::INITIAL, Action::OpenAccount);
/// assert_eq!(opened, AccountState::active(500, 0));
///
/// // Inactive accounts ignore everything but open.
/// let ignored = transition(AccountState::INITIAL, Action::Deposit);
/// assert_eq!(ignored, AccountState::INITIAL);
/// ```
pub fn transition(state: AccountState, action: Action) -> AccountState {
    AccountMachine::default().transition(state, action)
}

/// Apply `action` to `state` under custom terms.
pub fn transition_with(
    terms: &AccountTerms,
    state: AccountState,
    action: Action,
) -> AccountState {
    AccountMachine::new(*terms).transition(state, action)
}

/// Apply an action given by its wire literal under the standard terms.
///
/// Returns [`MachineError::UnknownAction`] for anything but the six known
/// literals.
///
/// ```rust
/// use passbook::core::AccountState;
/// use passbook::machine::dispatch;
///
/// let opened = dispatch(AccountState::INITIAL, "openAccount").unwrap();
/// assert!(opened.is_active);
///
/// assert!(dispatch(opened, "embezzle").is_err());
/// ```
pub fn dispatch(state: AccountState, kind: &str) -> Result<AccountState, MachineError> {
    AccountMachine::default().dispatch(state, kind)
}

/// Reducer bound to a set of [`AccountTerms`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccountMachine {
    terms: AccountTerms,
}

impl AccountMachine {
    pub const fn new(terms: AccountTerms) -> Self {
        Self { terms }
    }

    pub const fn terms(&self) -> &AccountTerms {
        &self.terms
    }

    /// Apply `action` to `state`, returning the next state.
    pub fn transition(&self, state: AccountState, action: Action) -> AccountState {
        self.step(state, action).state
    }

    /// Apply `action` to `state` and report whether it was accepted.
    pub fn step(&self, state: AccountState, action: Action) -> Step {
        if let Some(reason) = refusal(&state, action) {
            tracing::trace!(
                action = %action,
                state = state.name(),
                %reason,
                "action refused"
            );
            return Step::rejected(action, state, reason);
        }

        let next = self.apply(state, action);
        tracing::debug!(
            action = %action,
            from = state.name(),
            to = next.name(),
            balance = next.balance,
            loan = next.loan_amount,
            "action accepted"
        );
        Step::accepted(action, next)
    }

    /// Parse an action literal, logging anything the machine does not know.
    pub fn parse_kind(&self, kind: &str) -> Result<Action, MachineError> {
        kind.parse::<Action>().inspect_err(|err| {
            tracing::warn!(kind, error = %err, "unknown action dispatched");
        })
    }

    /// Parse `kind` and apply it.
    pub fn dispatch(&self, state: AccountState, kind: &str) -> Result<AccountState, MachineError> {
        let action = self.parse_kind(kind)?;
        Ok(self.transition(state, action))
    }

    /// Effect of an action whose precondition holds.
    fn apply(&self, state: AccountState, action: Action) -> AccountState {
        let terms = &self.terms;
        match action {
            Action::OpenAccount => AccountState::active(terms.opening_deposit(), 0),
            Action::Deposit => AccountState {
                balance: state.balance.saturating_add(terms.deposit()),
                ..state
            },
            Action::Withdraw => AccountState {
                balance: state.balance.saturating_sub(terms.withdrawal()),
                ..state
            },
            Action::RequestLoan => AccountState {
                balance: state.balance.saturating_add(terms.loan()),
                loan_amount: terms.loan(),
                ..state
            },
            Action::PayLoan => AccountState {
                balance: state.balance.saturating_sub(state.loan_amount),
                loan_amount: 0,
                ..state
            },
            Action::CloseAccount => AccountState::INITIAL,
        }
    }
}

/// The first rule that refuses `action` in `state`, gate first.
fn refusal(state: &AccountState, action: Action) -> Option<Rejection> {
    if !state.is_active && !action.bypasses_gate() {
        return Some(Rejection::AccountInactive);
    }
    match action {
        Action::OpenAccount | Action::Deposit => None,
        Action::Withdraw if state.balance <= 0 => Some(Rejection::NoFunds),
        Action::RequestLoan if state.has_loan() => Some(Rejection::LoanOutstanding),
        Action::PayLoan if !state.has_loan() => Some(Rejection::NoLoan),
        Action::CloseAccount if !state.is_settled() => Some(Rejection::NotSettled),
        Action::Withdraw | Action::RequestLoan | Action::PayLoan | Action::CloseAccount => None,
    }
}

/// The precondition of `action` as a guard, inactive-account gate included.
///
/// ```rust
/// use passbook::core::{AccountState, Action};
/// use passbook::machine::precondition;
///
/// let can_close = precondition(Action::CloseAccount);
/// assert!(can_close.check(&AccountState::active(0, 0)));
/// assert!(!can_close.check(&AccountState::active(0, 5000)));
/// assert!(!can_close.check(&AccountState::INITIAL));
/// ```
pub fn precondition(action: Action) -> Guard<AccountState> {
    Guard::new(move |state: &AccountState| refusal(state, action).is_none())
}

/// Whether `action` would be accepted in `state`.
pub fn permits(state: &AccountState, action: Action) -> bool {
    refusal(state, action).is_none()
}
