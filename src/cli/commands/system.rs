use crate::cli::commands::{CommandDefinition, CommandGroup};
use crate::cli::{help, output, CommandError, CommandResult, ShellContext};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "theme",
            CommandGroup::Shell,
            "Toggle dark mode for shell output",
            "theme",
            cmd_theme,
        ),
        CommandDefinition::new(
            "help",
            CommandGroup::Shell,
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandDefinition::new(
            "exit",
            CommandGroup::Shell,
            "Exit the shell",
            "exit",
            cmd_exit,
        )
        .with_aliases(&["quit"]),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(command) = args.first().map(|name| name.to_lowercase()) {
        if let Some(command) = context.command(&command) {
            help::print_command(command);
        } else {
            context.suggest_command(args[0]);
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_theme(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.config.dark_mode = !context.config.dark_mode;
    context.persist_config()?;
    context.apply_output_preferences();
    tracing::info!(dark_mode = context.config.dark_mode, "theme changed");
    let mode = if context.config.dark_mode { "dark" } else { "light" };
    output::success(format!("Switched to {mode} mode."));
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
