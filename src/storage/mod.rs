pub mod json_backend;
pub mod memory;

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    domain::{CategoryRegistry, TransactionStore},
    errors::LedgerError,
};

pub type Result<T> = std::result::Result<T, LedgerError>;

pub const CUSTOM_CATEGORIES_KEY: &str = "customCategories";
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Durable string-keyed storage holding serialized JSON documents.
pub trait KeyValueStore: Send + Sync {
    /// Returns `None` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Everything the tracker persists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedState {
    pub registry: CategoryRegistry,
    pub transactions: TransactionStore,
}

pub fn load_state(store: &dyn KeyValueStore) -> Result<PersistedState> {
    let registry = load_document(store, CUSTOM_CATEGORIES_KEY)?;
    let transactions = load_document(store, TRANSACTIONS_KEY)?;
    Ok(PersistedState {
        registry,
        transactions,
    })
}

pub fn save_state(
    store: &dyn KeyValueStore,
    registry: &CategoryRegistry,
    transactions: &TransactionStore,
) -> Result<()> {
    save_document(store, CUSTOM_CATEGORIES_KEY, registry)?;
    save_document(store, TRANSACTIONS_KEY, transactions)?;
    Ok(())
}

fn load_document<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> Result<T> {
    match store.get(key)? {
        Some(data) => Ok(serde_json::from_str(&data)?),
        None => Ok(T::default()),
    }
}

fn save_document<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

/// Non-fatal problems found in loaded data.
pub fn state_warnings(state: &PersistedState) -> Vec<String> {
    state
        .transactions
        .all()
        .iter()
        .filter(|txn| !state.registry.contains(&txn.category))
        .map(|txn| {
            format!(
                "transaction {} references unknown category `{}`",
                txn.id, txn.category
            )
        })
        .collect()
}
