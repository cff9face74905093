use crate::cli::commands::{CommandDefinition, CommandGroup, CommandRegistry};
use crate::cli::output::{info, section};

pub fn print_overview(registry: &CommandRegistry) {
    section("Available commands");
    for group in CommandGroup::ALL {
        let mut commands = registry.in_group(group).peekable();
        if commands.peek().is_none() {
            continue;
        }
        info(format!("{}:", group.title()));
        for definition in commands {
            info(format!("  {:<10} {}", definition.name, definition.description));
        }
    }
    info("Use `help <command>` for details.");
    info("Quote descriptions that contain spaces, e.g. add \"Weekly food\" 200 expense.");
}

pub fn print_command(definition: &CommandDefinition) {
    section(format!("Help: {}", definition.name));
    info(format!("  Description: {}", definition.description));
    info(format!("  Usage: {}", definition.usage));
    if !definition.aliases.is_empty() {
        info(format!("  Aliases: {}", definition.aliases.join(", ")));
    }
}
