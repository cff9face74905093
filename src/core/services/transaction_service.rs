//! Validation rules for creating transactions.

use chrono::NaiveDate;

use crate::domain::{BuiltinCategory, NewTransaction, Transaction};
use crate::errors::Rejection;

pub const WITHDRAWAL_DESCRIPTION: &str = "💸 Savings withdrawal";

/// Turns user input into validated transactions.
pub struct TransactionService;

impl TransactionService {
    /// Validates a draft, defaulting its date to `today`.
    pub fn build(draft: NewTransaction, today: NaiveDate) -> Result<Transaction, Rejection> {
        let description = draft.description.trim();
        if description.is_empty() {
            return Err(Rejection::EmptyDescription);
        }
        if !draft.amount.is_finite() {
            return Err(Rejection::InvalidAmount);
        }
        let category = draft.category.trim();
        if category.is_empty() {
            return Err(Rejection::EmptyCategory);
        }
        Ok(Transaction::new(
            description,
            draft.amount,
            category,
            draft.date.unwrap_or(today),
        ))
    }

    /// Negative savings entry dated `today`.
    pub fn withdrawal(amount: f64, today: NaiveDate) -> Result<Transaction, Rejection> {
        if !amount.is_finite() {
            return Err(Rejection::InvalidAmount);
        }
        Ok(Transaction::new(
            WITHDRAWAL_DESCRIPTION,
            -amount,
            BuiltinCategory::Savings.key(),
            today,
        ))
    }

    pub fn parse_amount(input: &str) -> Result<f64, Rejection> {
        input
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or(Rejection::InvalidAmount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn build_defaults_date_and_trims_description() {
        let txn = TransactionService::build(NewTransaction::new("  Food ", 12.5, "expense"), today())
            .unwrap();
        assert_eq!(txn.description, "Food");
        assert_eq!(txn.date, today());
    }

    #[test]
    fn build_keeps_explicit_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let txn =
            TransactionService::build(NewTransaction::new("Food", 1.0, "expense").on(date), today())
                .unwrap();
        assert_eq!(txn.date, date);
    }

    #[test]
    fn build_rejects_bad_input() {
        let empty = NewTransaction::new("  ", 1.0, "expense");
        assert_eq!(
            TransactionService::build(empty, today()),
            Err(Rejection::EmptyDescription)
        );
        let nan = NewTransaction::new("Food", f64::NAN, "expense");
        assert_eq!(
            TransactionService::build(nan, today()),
            Err(Rejection::InvalidAmount)
        );
        let no_category = NewTransaction::new("Food", 1.0, "");
        assert_eq!(
            TransactionService::build(no_category, today()),
            Err(Rejection::EmptyCategory)
        );
    }

    #[test]
    fn withdrawal_negates_amount_on_savings() {
        let txn = TransactionService::withdrawal(50.0, today()).unwrap();
        assert_eq!(txn.amount, -50.0);
        assert_eq!(txn.category, "savings");
        assert_eq!(txn.date, today());
        assert_eq!(
            TransactionService::withdrawal(f64::INFINITY, today()),
            Err(Rejection::InvalidAmount)
        );
    }

    #[test]
    fn parse_amount_requires_finite_number() {
        assert_eq!(TransactionService::parse_amount(" -42.5 "), Ok(-42.5));
        assert_eq!(
            TransactionService::parse_amount("abc"),
            Err(Rejection::InvalidAmount)
        );
        assert_eq!(
            TransactionService::parse_amount("inf"),
            Err(Rejection::InvalidAmount)
        );
    }
}
