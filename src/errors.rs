use thiserror::Error;
use uuid::Uuid;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid month: {0}")]
    InvalidMonth(String),
}

/// Reason an input was refused. Rejections never change ledger state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("amount must be a finite number")]
    InvalidAmount,
    #[error("category must not be empty")]
    EmptyCategory,
    #[error("category name must not be empty")]
    EmptyCategoryName,
    #[error("category icon must not be empty")]
    EmptyCategoryIcon,
    #[error("category `{0}` already exists")]
    DuplicateCategory(String),
    #[error("transaction {0} not found")]
    UnknownTransaction(Uuid),
    #[error("no transaction at position {0}")]
    IndexOutOfRange(usize),
}
