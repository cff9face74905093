//! Monthly ledger aggregation: visible rows, balance and savings totals.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{CategoryRegistry, MonthCursor, Transaction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Income,
    Expense,
    Savings,
}

/// One visible row of the monthly list.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub description: String,
    /// Amount as stored.
    pub amount: f64,
    /// Expenses are always shown negative.
    pub display_amount: f64,
    pub category: String,
    pub label: String,
    pub date: NaiveDate,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub cursor: MonthCursor,
    pub entries: Vec<LedgerEntry>,
    pub balance_total: f64,
    pub savings_total: f64,
}

impl MonthlySummary {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries classified as expenses, in list order.
    pub fn expenses(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.kind == EntryKind::Expense)
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Savings first, then expense-like, everything else counts as income.
    pub fn classify(registry: &CategoryRegistry, category: &str) -> EntryKind {
        if registry.is_savings_category(category) {
            EntryKind::Savings
        } else if registry.is_expense_category(category) {
            EntryKind::Expense
        } else {
            EntryKind::Income
        }
    }

    /// Recomputes the month from scratch; nothing is cached between calls.
    pub fn summarize(
        transactions: &[Transaction],
        cursor: MonthCursor,
        registry: &CategoryRegistry,
    ) -> MonthlySummary {
        let mut balance_total = 0.0;
        let mut savings_total = 0.0;
        let mut entries = Vec::new();

        for txn in transactions.iter().filter(|txn| cursor.matches(txn)) {
            let kind = Self::classify(registry, &txn.category);
            let display_amount = match kind {
                EntryKind::Savings => {
                    savings_total += txn.amount;
                    txn.amount
                }
                EntryKind::Expense => {
                    balance_total -= txn.amount.abs();
                    -txn.amount.abs()
                }
                EntryKind::Income => {
                    balance_total += txn.amount;
                    txn.amount
                }
            };
            entries.push(LedgerEntry {
                id: txn.id,
                description: txn.description.clone(),
                amount: txn.amount,
                display_amount,
                category: txn.category.clone(),
                label: registry.resolve_display_label(&txn.category),
                date: txn.date,
                kind,
            });
        }

        tracing::debug!(
            month = %cursor,
            rows = entries.len(),
            balance = balance_total,
            savings = savings_total,
            "month summarized"
        );

        MonthlySummary {
            cursor,
            entries,
            balance_total,
            savings_total,
        }
    }
}
