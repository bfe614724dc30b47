//! Session that holds the current account state between actions.

use super::{is_enabled, Control, Screen};
use crate::core::{AccountState, Action, State};
use crate::error::MachineError;
use crate::machine::{AccountMachine, Step};
use crate::terms::AccountTerms;

/// Holds the current state and forwards actions to the machine.
///
/// The teller owns nothing but a single state value, replaced wholesale
/// after every action.
///
/// # Example
///
/// ```rust
/// use passbook::core::AccountState;
/// use passbook::panel::{Control, Teller};
///
/// let mut teller = Teller::default();
/// teller.press(Control::Open);
/// teller.press(Control::Deposit);
/// assert_eq!(teller.state(), AccountState::active(650, 0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Teller {
    machine: AccountMachine,
    state: AccountState,
}

impl Teller {
    /// Start a session in the initial state.
    pub fn new(terms: AccountTerms) -> Self {
        Self {
            machine: AccountMachine::new(terms),
            state: AccountState::INITIAL,
        }
    }

    pub fn state(&self) -> AccountState {
        self.state
    }

    pub fn terms(&self) -> &AccountTerms {
        self.machine.terms()
    }

    /// Forward `action` and keep the resulting state.
    pub fn send(&mut self, action: Action) -> Step {
        let step = self.machine.step(self.state, action);
        self.state = step.state;
        step
    }

    /// Forward an action given by its wire literal.
    pub fn send_kind(&mut self, kind: &str) -> Result<Step, MachineError> {
        let action = self.machine.parse_kind(kind)?;
        Ok(self.send(action))
    }

    /// Press a control. Disabled controls are forwarded too; the machine
    /// decides.
    pub fn press(&mut self, control: Control) -> Step {
        if !is_enabled(&self.state, control) {
            tracing::debug!(
                control = ?control,
                state = self.state.name(),
                "disabled control pressed"
            );
        }
        self.send(control.action())
    }

    pub fn render(&self) -> Screen {
        Screen::render(&self.state, self.terms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::Rejection;
    use crate::terms::TermsBuilder;

    #[test]
    fn new_teller_starts_inactive() {
        let teller = Teller::new(AccountTerms::default());
        assert_eq!(teller.state(), AccountState::INITIAL);
    }

    #[test]
    fn send_replaces_state() {
        let mut teller = Teller::default();
        let step = teller.send(Action::OpenAccount);

        assert!(step.is_accepted());
        assert_eq!(teller.state(), AccountState::active(500, 0));
    }

    #[test]
    fn pressing_disabled_control_is_still_safe() {
        let mut teller = Teller::default();
        let step = teller.press(Control::PayLoan);

        assert_eq!(step.rejection(), Some(Rejection::AccountInactive));
        assert_eq!(teller.state(), AccountState::INITIAL);
    }

    #[test]
    fn close_pressed_with_loan_is_refused() {
        let mut teller = Teller::default();
        teller.press(Control::Open);
        teller.press(Control::RequestLoan);
        for _ in 0..110 {
            teller.press(Control::Withdraw);
        }
        assert_eq!(teller.state(), AccountState::active(0, 5000));
        assert!(teller.render().control(Control::Close).unwrap().enabled);

        let step = teller.press(Control::Close);
        assert_eq!(step.rejection(), Some(Rejection::NotSettled));
        assert_eq!(teller.state(), AccountState::active(0, 5000));
    }

    #[test]
    fn send_kind_reports_unknown_action() {
        let mut teller = Teller::default();
        teller.send(Action::OpenAccount);

        let err = teller.send_kind("wire").unwrap_err();
        assert!(matches!(err, MachineError::UnknownAction { .. }));
        assert_eq!(teller.state(), AccountState::active(500, 0));
    }

    #[test]
    fn send_kind_applies_known_literal() {
        let mut teller = Teller::default();
        let step = teller.send_kind("openAccount").unwrap();

        assert_eq!(step.action, Action::OpenAccount);
        assert_eq!(teller.state(), AccountState::active(500, 0));
        assert_eq!(
            teller.send_kind("open account"),
            Err(MachineError::UnknownAction {
                kind: "open account".to_string()
            })
        );
    }

    #[test]
    fn render_uses_teller_terms() {
        let terms = TermsBuilder::new().deposit(300).build().unwrap();
        let mut teller = Teller::new(terms);
        teller.send_kind("openAccount").unwrap();

        let screen = teller.render();
        assert_eq!(screen.balance, 500);
        assert_eq!(screen.control(Control::Deposit).unwrap().label, "Deposit 300");
    }
}
