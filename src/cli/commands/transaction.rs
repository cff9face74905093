use chrono::NaiveDate;
use uuid::Uuid;

use crate::cli::commands::{usage_error, CommandDefinition, CommandGroup};
use crate::cli::{output, CommandError, CommandResult, ShellContext};
use crate::core::services::{ServiceError, TransactionService};
use crate::domain::NewTransaction;
use crate::render::text::{entry_line, format_amount, short_id};

const ADD_USAGE: &str = "add <description> <amount> <category> [YYYY-MM-DD]";
const WITHDRAW_USAGE: &str = "withdraw <amount>";
const DELETE_USAGE: &str = "delete <row|id>";
const MIN_ID_PREFIX: usize = 8;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "list",
            CommandGroup::Ledger,
            "Show the selected month's transactions and totals",
            "list",
            cmd_list,
        )
        .with_aliases(&["ls"]),
        CommandDefinition::new(
            "add",
            CommandGroup::Ledger,
            "Record a transaction",
            ADD_USAGE,
            cmd_add,
        ),
        CommandDefinition::new(
            "withdraw",
            CommandGroup::Ledger,
            "Take money out of savings",
            WITHDRAW_USAGE,
            cmd_withdraw,
        ),
        CommandDefinition::new(
            "delete",
            CommandGroup::Ledger,
            "Delete a transaction by list row or id prefix",
            DELETE_USAGE,
            cmd_delete,
        )
        .with_aliases(&["rm"]),
    ]
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.tracker.summary();
    let suffix = context.config.currency_suffix.as_str();
    output::section(summary.cursor.label());
    if summary.is_empty() {
        output::info("No transactions this month.");
    }
    for (index, entry) in summary.entries.iter().enumerate() {
        output::info(entry_line(index + 1, entry, suffix));
    }
    output::info(format!(
        "Balance: {}",
        format_amount(summary.balance_total, suffix)
    ));
    output::info(format!(
        "Savings: {}",
        format_amount(summary.savings_total, suffix)
    ));
    Ok(())
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [description, amount, category, rest @ ..] = args else {
        return Err(usage_error(ADD_USAGE));
    };
    let date = match rest {
        [] => None,
        [date] => Some(parse_date(date)?),
        _ => return Err(usage_error(ADD_USAGE)),
    };
    if !category.trim().is_empty() && !context.tracker.categories().contains(category) {
        return Err(CommandError::InvalidArguments(format!(
            "unknown category `{category}`; see `category list`"
        )));
    }

    let amount = TransactionService::parse_amount(amount).map_err(ServiceError::from)?;
    let mut draft = NewTransaction::new(*description, amount, *category);
    if let Some(date) = date {
        draft = draft.on(date);
    }
    let id = context.tracker.add_transaction(draft)?;
    output::success(format!("Transaction added [{}].", short_id(id)));
    Ok(())
}

fn cmd_withdraw(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [amount] = args else {
        return Err(usage_error(WITHDRAW_USAGE));
    };
    let amount = TransactionService::parse_amount(amount).map_err(ServiceError::from)?;
    context.tracker.withdraw_savings(amount)?;
    output::success(format!(
        "Withdrew {} from savings.",
        format_amount(amount, &context.config.currency_suffix)
    ));
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [target] = args else {
        return Err(usage_error(DELETE_USAGE));
    };
    let id = resolve_target(context, target)?;
    let removed = context.tracker.delete(id)?;
    output::success(format!("Deleted `{}`.", removed.description));
    Ok(())
}

/// Short numbers refer to rows of the visible list; other targets must be an id prefix of
/// at least `MIN_ID_PREFIX` characters.
fn resolve_target(context: &ShellContext, target: &str) -> Result<Uuid, CommandError> {
    let row = (target.len() < MIN_ID_PREFIX)
        .then(|| target.parse::<usize>().ok())
        .flatten();
    if let Some(row) = row {
        let summary = context.tracker.summary();
        return row
            .checked_sub(1)
            .and_then(|index| summary.entries.get(index))
            .map(|entry| entry.id)
            .ok_or_else(|| {
                CommandError::InvalidArguments(format!(
                    "no row {row} in {}",
                    summary.cursor.label()
                ))
            });
    }
    if target.len() < MIN_ID_PREFIX {
        return Err(CommandError::InvalidArguments(format!(
            "`{target}` is neither a row number nor an id prefix of at least {MIN_ID_PREFIX} characters"
        )));
    }

    let prefix = target.to_lowercase();
    let mut matches = context
        .tracker
        .transactions()
        .iter()
        .filter(|txn| txn.id.simple().to_string().starts_with(&prefix));
    match (matches.next(), matches.next()) {
        (Some(txn), None) => Ok(txn.id),
        (Some(_), Some(_)) => Err(CommandError::InvalidArguments(format!(
            "id prefix `{target}` is ambiguous"
        ))),
        (None, _) => Err(CommandError::InvalidArguments(format!(
            "no transaction matches `{target}`"
        ))),
    }
}

fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{input}`, expected YYYY-MM-DD"))
    })
}
