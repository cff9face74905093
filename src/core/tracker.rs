//! Controller owning the application state and its persistence.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::services::{
    ChartLayout, ExpenseBreakdown, MonthlySummary, ServiceResult, SummaryService,
    TransactionService,
};
use crate::core::time::Clock;
use crate::domain::{
    CategoryRegistry, CustomCategory, MonthCursor, NewTransaction, Transaction, TransactionStore,
};
use crate::errors::{LedgerError, Rejection};
use crate::storage::{self, KeyValueStore};

/// Everything a session mutates.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub registry: CategoryRegistry,
    pub transactions: TransactionStore,
    pub cursor: MonthCursor,
}

/// Facade that applies user actions to [`AppState`] and persists accepted ones.
pub struct Tracker {
    state: AppState,
    store: Box<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl Tracker {
    /// Loads persisted state; the cursor starts at the clock's current month.
    pub fn open(store: Box<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Result<Self, LedgerError> {
        let persisted = storage::load_state(store.as_ref())?;
        for warning in storage::state_warnings(&persisted) {
            tracing::warn!("{warning}");
        }
        tracing::info!(
            categories = persisted.registry.custom().len(),
            transactions = persisted.transactions.len(),
            "ledger loaded"
        );
        let cursor = MonthCursor::from_date(clock.today());
        Ok(Self {
            state: AppState {
                registry: persisted.registry,
                transactions: persisted.transactions,
                cursor,
            },
            store,
            clock,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.state.registry
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.state.transactions.all()
    }

    pub fn cursor(&self) -> MonthCursor {
        self.state.cursor
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn add_category(&mut self, name: &str, icon: &str) -> ServiceResult<CustomCategory> {
        let added = self
            .state
            .registry
            .add(name, icon)
            .map(CustomCategory::clone)
            .map_err(rejected)?;
        self.persist()?;
        tracing::info!(name = %added.name, "category added");
        Ok(added)
    }

    pub fn add_transaction(&mut self, draft: NewTransaction) -> ServiceResult<Uuid> {
        let txn = TransactionService::build(draft, self.today()).map_err(rejected)?;
        self.append(txn)
    }

    pub fn withdraw_savings(&mut self, amount: f64) -> ServiceResult<Uuid> {
        let txn = TransactionService::withdrawal(amount, self.today()).map_err(rejected)?;
        self.append(txn)
    }

    fn append(&mut self, txn: Transaction) -> ServiceResult<Uuid> {
        tracing::info!(
            id = %txn.id,
            category = %txn.category,
            amount = txn.amount,
            date = %txn.date,
            "transaction added"
        );
        let id = self.state.transactions.add(txn);
        self.persist()?;
        Ok(id)
    }

    pub fn delete(&mut self, id: Uuid) -> ServiceResult<Transaction> {
        let removed = self
            .state
            .transactions
            .remove(id)
            .ok_or_else(|| rejected(Rejection::UnknownTransaction(id)))?;
        self.persist()?;
        tracing::info!(id = %removed.id, "transaction deleted");
        Ok(removed)
    }

    /// Deletes by position in the full, unfiltered sequence.
    pub fn delete_at(&mut self, index: usize) -> ServiceResult<Transaction> {
        let removed = self
            .state
            .transactions
            .remove_at(index)
            .ok_or_else(|| rejected(Rejection::IndexOutOfRange(index)))?;
        self.persist()?;
        tracing::info!(id = %removed.id, index, "transaction deleted");
        Ok(removed)
    }

    pub fn previous_month(&mut self) -> MonthCursor {
        self.state.cursor.previous_month();
        self.state.cursor
    }

    pub fn next_month(&mut self) -> MonthCursor {
        self.state.cursor.next_month();
        self.state.cursor
    }

    pub fn set_month(&mut self, cursor: MonthCursor) {
        self.state.cursor = cursor;
    }

    pub fn summary(&self) -> MonthlySummary {
        SummaryService::summarize(self.transactions(), self.state.cursor, &self.state.registry)
    }

    pub fn breakdown(&self) -> ExpenseBreakdown {
        ExpenseBreakdown::from_summary(&self.summary())
    }

    pub fn chart(&self, size: f64) -> ChartLayout {
        ChartLayout::compute(&self.breakdown(), size)
    }

    fn persist(&self) -> ServiceResult<()> {
        storage::save_state(
            self.store.as_ref(),
            &self.state.registry,
            &self.state.transactions,
        )?;
        Ok(())
    }
}

fn rejected(reason: Rejection) -> crate::core::services::ServiceError {
    tracing::warn!(%reason, "input rejected");
    reason.into()
}
