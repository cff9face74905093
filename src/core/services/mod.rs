pub mod chart_service;
pub mod summary_service;
pub mod transaction_service;

pub use chart_service::{CategoryTotal, ChartLayout, ChartService, ExpenseBreakdown, Point, Wedge};
pub use summary_service::{EntryKind, LedgerEntry, MonthlySummary, SummaryService};
pub use transaction_service::TransactionService;

use crate::errors::{LedgerError, Rejection};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Storage(#[from] LedgerError),
    #[error("{0}")]
    Rejected(#[from] Rejection),
}

impl ServiceError {
    /// The validation reason, when the input itself was refused.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ServiceError::Rejected(reason) => Some(reason),
            ServiceError::Storage(_) => None,
        }
    }
}
