//! Rendered snapshot of the teller screen.

use super::{disabled_reasons, Control, DisabledReason};
use crate::core::AccountState;
use crate::terms::AccountTerms;
use serde::Serialize;
use std::fmt;

/// One control as it appears on screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlView {
    pub control: Control,
    pub label: String,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disabled_because: Vec<DisabledReason>,
}

/// What the teller shows for a given state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub balance: i64,
    pub loan: i64,
    pub is_active: bool,
    pub controls: Vec<ControlView>,
}

impl Screen {
    pub fn render(state: &AccountState, terms: &AccountTerms) -> Self {
        let controls = Control::ALL
            .into_iter()
            .map(|control| {
                let disabled_because = disabled_reasons(state, control);
                ControlView {
                    control,
                    label: control.label(terms),
                    enabled: disabled_because.is_empty(),
                    disabled_because,
                }
            })
            .collect();

        Self {
            balance: state.balance,
            loan: state.loan_amount,
            is_active: state.is_active,
            controls,
        }
    }

    pub fn control(&self, control: Control) -> Option<&ControlView> {
        self.controls.iter().find(|view| view.control == control)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Balance: {}", self.balance)?;
        writeln!(f, "Loan: {}", self.loan)?;
        for view in &self.controls {
            if view.enabled {
                writeln!(f, "  [+] {}", view.label)?;
            } else {
                let reasons: Vec<String> =
                    view.disabled_because.iter().map(ToString::to_string).collect();
                writeln!(f, "  [ ] {} ({})", view.label, reasons.join(", "))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_screen_shows_zeroes_and_open_only() {
        let screen = Screen::render(&AccountState::INITIAL, &AccountTerms::default());

        assert_eq!(screen.balance, 0);
        assert_eq!(screen.loan, 0);
        assert!(!screen.is_active);
        let enabled: Vec<_> = screen
            .controls
            .iter()
            .filter(|view| view.enabled)
            .map(|view| view.control)
            .collect();
        assert_eq!(enabled, vec![Control::Open]);
    }

    #[test]
    fn display_lists_every_control() {
        let screen = Screen::render(&AccountState::active(5600, 5000), &AccountTerms::default());
        let text = screen.to_string();

        assert!(text.starts_with("Balance: 5600\nLoan: 5000\n"));
        assert!(text.contains("  [+] Pay loan\n"));
        assert!(text.contains("  [ ] Request a loan of 5000 (a loan is outstanding)\n"));
        assert!(text.contains("  [ ] Open account (account is already open)\n"));
        assert_eq!(text.lines().count(), 2 + Control::ALL.len());
    }

    #[test]
    fn screen_serializes_reasons_only_when_disabled() {
        let screen = Screen::render(&AccountState::active(500, 0), &AccountTerms::default());
        let json = serde_json::to_value(&screen).unwrap();

        assert_eq!(json["balance"], 500);
        assert_eq!(json["isActive"], true);
        assert_eq!(json["controls"][0]["control"], "open");
        assert_eq!(json["controls"][0]["disabledBecause"][0], "alreadyOpen");
        assert!(json["controls"][1].get("disabledBecause").is_none());
    }

    #[test]
    fn control_lookup_finds_view() {
        let screen = Screen::render(&AccountState::active(0, 0), &AccountTerms::default());
        let close = screen.control(Control::Close).unwrap();
        assert!(close.enabled);
        assert_eq!(close.label, "Close account");
    }
}
