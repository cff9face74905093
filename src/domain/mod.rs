pub mod category;
pub mod common;
pub mod month;
pub mod transaction;

pub use category::{BuiltinCategory, CategoryOption, CategoryRegistry, CustomCategory};
pub use common::Displayable;
pub use month::MonthCursor;
pub use transaction::{NewTransaction, Transaction, TransactionStore};
