use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::render::text::parse_hex_color;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    pub plain_output: bool,
    pub dark_mode: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info | MessageKind::Section => "",
        MessageKind::Success => "[✓] ",
        MessageKind::Warning => "[!] ",
        MessageKind::Error => "[x] ",
        MessageKind::Hint => "hint: ",
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", message.to_string().trim()),
        _ => format!("{}{}", label(kind), message),
    };

    if prefs.plain_output {
        return formatted;
    }

    match (kind, prefs.dark_mode) {
        (MessageKind::Success, false) => formatted.green().to_string(),
        (MessageKind::Success, true) => formatted.bright_green().to_string(),
        (MessageKind::Warning, false) => formatted.yellow().to_string(),
        (MessageKind::Warning, true) => formatted.bright_yellow().to_string(),
        (MessageKind::Error, false) => formatted.red().to_string(),
        (MessageKind::Error, true) => formatted.bright_red().to_string(),
        (MessageKind::Hint, _) => formatted.dimmed().to_string(),
        (MessageKind::Section, false) => formatted.bold().to_string(),
        (MessageKind::Section, true) => formatted.bright_white().bold().to_string(),
        (MessageKind::Info, true) => formatted.bright_white().to_string(),
        (MessageKind::Info, false) => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = preferences();
    let formatted = apply_style(kind, message, &prefs);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Prints a line tinted with a `#RRGGBB` chart colour.
pub fn swatch(color: &str, message: impl fmt::Display) {
    let text = message.to_string();
    let prefs = preferences();
    match parse_hex_color(color) {
        Some((r, g, b)) if !prefs.plain_output => println!("{}", text.truecolor(r, g, b)),
        _ => println!("{}", text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_keeps_labels_without_escape_codes() {
        let prefs = OutputPreferences {
            plain_output: true,
            dark_mode: false,
        };
        assert_eq!(
            apply_style(MessageKind::Warning, "careful", &prefs),
            "[!] careful"
        );
        assert_eq!(
            apply_style(MessageKind::Section, " March 2024 ", &prefs),
            "=== March 2024 ==="
        );
        assert_eq!(apply_style(MessageKind::Info, "plain", &prefs), "plain");
    }
}
