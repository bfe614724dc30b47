//! Passbook: a pure functional bank account state machine
//!
//! Passbook models a single bank account driven by six payload-free
//! actions. The core is one pure function, `(state, action) -> state`,
//! that enforces a handful of business rules: a minimum opening deposit,
//! a single loan at a time, and no closing while money or a loan remains.
//!
//! # Core Concepts
//!
//! - **State**: [`AccountState`], an immutable `Copy` value
//! - **Actions**: [`Action`], six kinds with no payload
//! - **Machine**: [`transition`] applies an action; refused actions return
//!   the state unchanged and are never errors
//! - **Terms**: [`AccountTerms`], the fixed amounts the actions move
//! - **Panel**: a headless teller screen that decides which controls are
//!   enabled and holds the current state between actions
//!
//! # Example
//!
//! ```rust
//! use passbook::{transition, AccountState, Action};
//!
//! let state = AccountState::INITIAL;
//! let state = transition(state, Action::OpenAccount);
//! let state = transition(state, Action::RequestLoan);
//! assert_eq!(state, AccountState::active(5500, 5000));
//!
//! // One loan at a time.
//! assert_eq!(transition(state, Action::RequestLoan), state);
//!
//! let state = transition(state, Action::PayLoan);
//! assert_eq!(state, AccountState::active(500, 0));
//! ```

pub mod core;
pub mod error;
pub mod machine;
pub mod panel;
pub mod terms;

// Re-export commonly used types
pub use crate::core::{AccountState, Action, Guard, State};
pub use error::MachineError;
pub use machine::{
    dispatch, transition, transition_with, AccountMachine, Outcome, Rejection, Step,
};
pub use terms::{AccountTerms, TermsBuilder, TermsError};
