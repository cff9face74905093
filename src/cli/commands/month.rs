use crate::cli::commands::{usage_error, CommandDefinition, CommandGroup};
use crate::cli::{output, CommandError, CommandResult, ShellContext};
use crate::domain::MonthCursor;

const MONTH_USAGE: &str = "month <YYYY-MM>";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "prev",
            CommandGroup::Navigation,
            "Show the previous month",
            "prev",
            cmd_prev,
        ),
        CommandDefinition::new(
            "next",
            CommandGroup::Navigation,
            "Show the next month",
            "next",
            cmd_next,
        ),
        CommandDefinition::new(
            "month",
            CommandGroup::Navigation,
            "Jump to a specific month",
            MONTH_USAGE,
            cmd_month,
        ),
    ]
}

fn cmd_prev(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let cursor = context.tracker.previous_month();
    announce(cursor);
    Ok(())
}

fn cmd_next(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let cursor = context.tracker.next_month();
    announce(cursor);
    Ok(())
}

fn cmd_month(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [input] = args else {
        return Err(usage_error(MONTH_USAGE));
    };
    let cursor = MonthCursor::parse(input)
        .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
    context.tracker.set_month(cursor);
    announce(cursor);
    Ok(())
}

fn announce(cursor: MonthCursor) {
    output::info(format!("Showing {}.", cursor.label()));
}
