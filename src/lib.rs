#![doc(test(attr(deny(warnings))))]

//! Pocketbook is a monthly personal finance ledger: income, expenses and
//! savings per calendar month, user-defined expense categories, and a
//! per-category expense pie chart.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod render;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("pocketbook tracing initialized");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
