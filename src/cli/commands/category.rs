use crate::cli::commands::{usage_error, CommandDefinition, CommandGroup};
use crate::cli::{output, CommandError, CommandResult, ShellContext};

const CATEGORY_USAGE: &str = "category <add <name> <icon>|list>";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "category",
        CommandGroup::Categories,
        "Add or list categories",
        CATEGORY_USAGE,
        cmd_category,
    )]
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((subcommand, rest)) = args.split_first() else {
        return Err(usage_error(CATEGORY_USAGE));
    };
    match subcommand.to_ascii_lowercase().as_str() {
        "add" => handle_add(context, rest),
        "list" => handle_list(context),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown category subcommand `{}`",
            other
        ))),
    }
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [name, icon] = args else {
        return Err(usage_error("category add <name> <icon>"));
    };
    let added = context.tracker.add_category(name, icon)?;
    output::success(format!("Category `{} {}` added.", added.icon, added.name));
    Ok(())
}

fn handle_list(context: &mut ShellContext) -> CommandResult {
    output::section("Categories");
    for option in context.tracker.categories().options() {
        let kind = if option.expense { "expense" } else { "" };
        output::info(format!("  {:<16} {:<20} {}", option.key, option.label, kind).trim_end());
    }
    Ok(())
}
