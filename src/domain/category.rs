//! Built-in and user-defined transaction categories.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::Displayable;
use crate::errors::Rejection;

/// The three categories every ledger starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinCategory {
    Income,
    Expense,
    Savings,
}

impl BuiltinCategory {
    pub const ALL: [BuiltinCategory; 3] = [
        BuiltinCategory::Income,
        BuiltinCategory::Expense,
        BuiltinCategory::Savings,
    ];

    /// Key stored on transactions.
    pub fn key(self) -> &'static str {
        match self {
            BuiltinCategory::Income => "income",
            BuiltinCategory::Expense => "expense",
            BuiltinCategory::Savings => "savings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BuiltinCategory::Income => "💰 Income",
            BuiltinCategory::Expense => "🛒 Expense",
            BuiltinCategory::Savings => "🏦 Savings",
        }
    }

    /// Keys written by the first, Hungarian-language release.
    fn legacy_key(self) -> &'static str {
        match self {
            BuiltinCategory::Income => "bevétel",
            BuiltinCategory::Expense => "kiadás",
            BuiltinCategory::Savings => "megtakarítás",
        }
    }

    /// Exact lookup by stored key, accepting legacy keys.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|builtin| builtin.key() == key || builtin.legacy_key() == key)
    }

    fn matches_lowercase(self, lowered: &str) -> bool {
        self.key() == lowered || self.legacy_key() == lowered
    }
}

impl Displayable for BuiltinCategory {
    fn display_label(&self) -> String {
        self.label().to_string()
    }
}

impl fmt::Display for BuiltinCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// User-defined category. Always treated as an expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomCategory {
    pub name: String,
    pub icon: String,
}

impl CustomCategory {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
        }
    }
}

impl Displayable for CustomCategory {
    fn display_label(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}

/// One entry of a category picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub key: String,
    pub label: String,
    pub expense: bool,
}

/// Built-in categories plus the user's custom ones, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryRegistry {
    custom: Vec<CustomCategory>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_custom(custom: Vec<CustomCategory>) -> Self {
        Self { custom }
    }

    pub fn custom(&self) -> &[CustomCategory] {
        &self.custom
    }

    /// Case-insensitive match against built-in keys and custom names.
    pub fn is_known_duplicate(&self, name: &str) -> bool {
        let lowered = name.trim().to_lowercase();
        BuiltinCategory::ALL
            .into_iter()
            .any(|builtin| builtin.matches_lowercase(&lowered))
            || self
                .custom
                .iter()
                .any(|category| category.name.to_lowercase() == lowered)
    }

    pub fn add(&mut self, name: &str, icon: &str) -> Result<&CustomCategory, Rejection> {
        let name = name.trim();
        let icon = icon.trim();
        if name.is_empty() {
            return Err(Rejection::EmptyCategoryName);
        }
        if icon.is_empty() {
            return Err(Rejection::EmptyCategoryIcon);
        }
        if self.is_known_duplicate(name) {
            return Err(Rejection::DuplicateCategory(name.to_string()));
        }
        self.custom.push(CustomCategory::new(name, icon));
        Ok(&self.custom[self.custom.len() - 1])
    }

    pub fn find_custom(&self, key: &str) -> Option<&CustomCategory> {
        self.custom.iter().find(|category| category.name == key)
    }

    /// Built-in expense, or any custom category regardless of its name.
    pub fn is_expense_category(&self, key: &str) -> bool {
        BuiltinCategory::from_key(key) == Some(BuiltinCategory::Expense)
            || self.find_custom(key).is_some()
    }

    pub fn is_savings_category(&self, key: &str) -> bool {
        BuiltinCategory::from_key(key) == Some(BuiltinCategory::Savings)
    }

    /// Custom label, then built-in label, then the raw key for orphaned references.
    pub fn resolve_display_label(&self, key: &str) -> String {
        if let Some(custom) = self.find_custom(key) {
            return custom.display_label();
        }
        match BuiltinCategory::from_key(key) {
            Some(builtin) => builtin.display_label(),
            None => key.to_string(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        BuiltinCategory::from_key(key).is_some() || self.find_custom(key).is_some()
    }

    pub fn options(&self) -> Vec<CategoryOption> {
        let builtins = BuiltinCategory::ALL.into_iter().map(|builtin| CategoryOption {
            key: builtin.key().to_string(),
            label: builtin.display_label(),
            expense: builtin == BuiltinCategory::Expense,
        });
        let custom = self.custom.iter().map(|category| CategoryOption {
            key: category.name.clone(),
            label: category.display_label(),
            expense: true,
        });
        builtins.chain(custom).collect()
    }
}
