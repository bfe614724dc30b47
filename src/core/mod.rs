//! Core account types.
//!
//! This module contains the pure values the machine works on:
//! - The account state and the `State` trait it implements
//! - The six payload-free actions
//! - Guard predicates used to express preconditions
//!
//! Nothing in this module performs I/O or holds mutable state.

mod action;
mod guard;
mod state;

pub use action::Action;
pub use guard::Guard;
pub use state::{AccountState, State};
