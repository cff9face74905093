//! Plain-text formatting shared by the shell.

use uuid::Uuid;

use crate::core::services::{LedgerEntry, Wedge};

const BAR_WIDTH: usize = 30;

/// Shortest decimal form, followed by the currency suffix.
pub fn format_amount(value: f64, suffix: &str) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    if suffix.is_empty() {
        value.to_string()
    } else {
        format!("{value} {suffix}")
    }
}

pub fn short_id(id: Uuid) -> String {
    let mut short = id.simple().to_string();
    short.truncate(8);
    short
}

/// `"<row>. <description>: <amount> (<label>) on <date> [<id>]"`
pub fn entry_line(row: usize, entry: &LedgerEntry, suffix: &str) -> String {
    format!(
        "{:>3}. {}: {} ({}) on {} [{}]",
        row,
        entry.description,
        format_amount(entry.display_amount, suffix),
        entry.label,
        entry.date.format("%Y-%m-%d"),
        short_id(entry.id)
    )
}

pub fn legend_line(wedge: &Wedge, suffix: &str) -> String {
    format!(
        "{} {} {}",
        legend_bar(wedge.percent),
        wedge.label,
        format_amount(wedge.amount, suffix)
    )
}

fn legend_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "·".repeat(BAR_WIDTH - filled))
}

/// Parses `#RRGGBB`.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
