//! Errors raised while building account terms.

use thiserror::Error;

/// Errors that can occur when building [`AccountTerms`](super::AccountTerms).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermsError {
    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: i64 },

    #[error("{field} ({value}) must be a whole number of withdrawals of {withdrawal}")]
    NotWithdrawalMultiple {
        field: &'static str,
        value: i64,
        withdrawal: i64,
    },
}
