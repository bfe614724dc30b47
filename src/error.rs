//! Contract violations raised by the machine.

use thiserror::Error;

/// Errors that signal a caller bug rather than a business rule.
///
/// Refused actions (inactive account, no funds, loan already taken) are
/// not errors; they return the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// The action kind is not one of the six the machine understands.
    #[error("Action is unknown: '{kind}'")]
    UnknownAction { kind: String },
}
