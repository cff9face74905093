//! Month cursor selecting the visible slice of the ledger.

use std::fmt;
use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

use crate::domain::transaction::Transaction;
use crate::errors::LedgerError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Years a `NaiveDate` can represent; no transaction falls outside them.
fn year_range() -> RangeInclusive<i32> {
    NaiveDate::MIN.year()..=NaiveDate::MAX.year()
}

/// Calendar `(month, year)` pair. `month_index` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthCursor {
    month_index: u32,
    year: i32,
}

impl MonthCursor {
    pub fn new(month_index: u32, year: i32) -> Result<Self, LedgerError> {
        if month_index > 11 {
            return Err(LedgerError::InvalidMonth(format!(
                "month index {} is outside 0..=11",
                month_index
            )));
        }
        if !year_range().contains(&year) {
            return Err(LedgerError::InvalidMonth(format!(
                "year {} is outside the supported calendar",
                year
            )));
        }
        Ok(Self { month_index, year })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month_index: date.month0(),
            year: date.year(),
        }
    }

    /// Parses `YYYY-MM`.
    pub fn parse(input: &str) -> Result<Self, LedgerError> {
        let invalid = || LedgerError::InvalidMonth(format!("`{}` (use YYYY-MM)", input));
        let (year, month) = input.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Self::new(month - 1, year)
    }

    pub fn month_index(&self) -> u32 {
        self.month_index
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Stays put at the earliest supported month.
    pub fn previous_month(&mut self) {
        if self.month_index == 0 {
            if let Some(year) = self
                .year
                .checked_sub(1)
                .filter(|year| year_range().contains(year))
            {
                self.month_index = 11;
                self.year = year;
            }
        } else {
            self.month_index -= 1;
        }
    }

    /// Stays put at the latest supported month.
    pub fn next_month(&mut self) {
        if self.month_index == 11 {
            if let Some(year) = self
                .year
                .checked_add(1)
                .filter(|year| year_range().contains(year))
            {
                self.month_index = 0;
                self.year = year;
            }
        } else {
            self.month_index += 1;
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.month0() == self.month_index && date.year() == self.year
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.contains(transaction.date)
    }

    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month_index as usize], self.year)
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month_index + 1)
    }
}
