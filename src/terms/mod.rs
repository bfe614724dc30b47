//! Fixed amounts the account works with.
//!
//! Actions carry no amount of their own: opening credits the opening
//! deposit, deposit and withdraw move a fixed sum, and a loan is always
//! the same principal. [`AccountTerms::default`] holds the standard
//! amounts; [`TermsBuilder`] overrides them.

pub mod builder;
pub mod error;

pub use builder::TermsBuilder;
pub use error::TermsError;

use serde::{Deserialize, Serialize};

/// Balance credited when an account is opened.
pub const OPENING_DEPOSIT: i64 = 500;

/// Amount added by a deposit.
pub const DEPOSIT_AMOUNT: i64 = 150;

/// Amount removed by a withdrawal.
pub const WITHDRAWAL_AMOUNT: i64 = 50;

/// Principal of the single loan an account may hold.
pub const LOAN_AMOUNT: i64 = 5000;

/// Amounts applied by the account actions.
///
/// # Example
///
/// ```rust
/// use passbook::terms::{AccountTerms, TermsBuilder};
///
/// let standard = AccountTerms::default();
/// assert_eq!(standard.opening_deposit(), 500);
///
/// let generous = TermsBuilder::new().loan(10_000).build().unwrap();
/// assert_eq!(generous.loan(), 10_000);
/// assert_eq!(generous.deposit(), 150);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TermsBuilder")]
pub struct AccountTerms {
    pub(crate) opening_deposit: i64,
    pub(crate) deposit: i64,
    pub(crate) withdrawal: i64,
    pub(crate) loan: i64,
}

impl AccountTerms {
    /// The standard terms.
    pub const STANDARD: AccountTerms = AccountTerms {
        opening_deposit: OPENING_DEPOSIT,
        deposit: DEPOSIT_AMOUNT,
        withdrawal: WITHDRAWAL_AMOUNT,
        loan: LOAN_AMOUNT,
    };

    pub const fn opening_deposit(&self) -> i64 {
        self.opening_deposit
    }

    pub const fn deposit(&self) -> i64 {
        self.deposit
    }

    pub const fn withdrawal(&self) -> i64 {
        self.withdrawal
    }

    pub const fn loan(&self) -> i64 {
        self.loan
    }
}

impl Default for AccountTerms {
    fn default() -> Self {
        Self::STANDARD
    }
}
