//! Builder API for account terms.

use super::error::TermsError;
use super::AccountTerms;
use serde::Deserialize;

/// Builder for [`AccountTerms`]. Unset amounts keep their standard value.
///
/// Terms read from JSON go through the builder too, so they are validated
/// the same way.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TermsBuilder {
    opening_deposit: Option<i64>,
    deposit: Option<i64>,
    withdrawal: Option<i64>,
    loan: Option<i64>,
}

impl TermsBuilder {
    pub fn new() -> Self {
        Self {
            opening_deposit: None,
            deposit: None,
            withdrawal: None,
            loan: None,
        }
    }

    /// Set the balance credited on open
    pub fn opening_deposit(mut self, amount: i64) -> Self {
        self.opening_deposit = Some(amount);
        self
    }

    /// Set the deposit amount
    pub fn deposit(mut self, amount: i64) -> Self {
        self.deposit = Some(amount);
        self
    }

    /// Set the withdrawal amount
    pub fn withdrawal(mut self, amount: i64) -> Self {
        self.withdrawal = Some(amount);
        self
    }

    /// Set the loan principal
    pub fn loan(mut self, amount: i64) -> Self {
        self.loan = Some(amount);
        self
    }

    /// Build the terms.
    ///
    /// Every amount must be strictly positive, and every amount credited to
    /// the balance must be a whole number of withdrawals. That keeps any
    /// positive balance at least one withdrawal, so withdrawing never takes
    /// the account below zero.
    pub fn build(self) -> Result<AccountTerms, TermsError> {
        let standard = AccountTerms::STANDARD;
        let withdrawal = positive("withdrawal", self.withdrawal.unwrap_or(standard.withdrawal))?;
        let credit = |field: &'static str, value: i64| -> Result<i64, TermsError> {
            let value = positive(field, value)?;
            if value % withdrawal == 0 {
                Ok(value)
            } else {
                Err(TermsError::NotWithdrawalMultiple {
                    field,
                    value,
                    withdrawal,
                })
            }
        };

        Ok(AccountTerms {
            opening_deposit: credit(
                "opening deposit",
                self.opening_deposit.unwrap_or(standard.opening_deposit),
            )?,
            deposit: credit("deposit", self.deposit.unwrap_or(standard.deposit))?,
            withdrawal,
            loan: credit("loan", self.loan.unwrap_or(standard.loan))?,
        })
    }
}

impl TryFrom<TermsBuilder> for AccountTerms {
    type Error = TermsError;

    fn try_from(builder: TermsBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

impl Default for TermsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn positive(field: &'static str, value: i64) -> Result<i64, TermsError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(TermsError::NotPositive { field, value })
    }
}
