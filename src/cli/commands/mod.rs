use std::collections::HashMap;

pub mod category;
pub mod chart;
pub mod month;
pub mod system;
pub mod transaction;

use crate::cli::{CommandError, CommandResult, ShellContext};

pub(crate) fn all_definitions() -> Vec<CommandDefinition> {
    let mut commands = Vec::new();
    commands.extend(transaction::definitions());
    commands.extend(month::definitions());
    commands.extend(category::definitions());
    commands.extend(chart::definitions());
    commands.extend(system::definitions());
    commands
}

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// Heading a command is listed under in `help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Ledger,
    Navigation,
    Categories,
    Chart,
    Shell,
}

impl CommandGroup {
    pub const ALL: [CommandGroup; 5] = [
        CommandGroup::Ledger,
        CommandGroup::Navigation,
        CommandGroup::Categories,
        CommandGroup::Chart,
        CommandGroup::Shell,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CommandGroup::Ledger => "Ledger",
            CommandGroup::Navigation => "Months",
            CommandGroup::Categories => "Categories",
            CommandGroup::Chart => "Chart",
            CommandGroup::Shell => "Shell",
        }
    }
}

#[derive(Clone)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub group: CommandGroup,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandDefinition {
    pub const fn new(
        name: &'static str,
        group: CommandGroup,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            aliases: &[],
            group,
            description,
            usage,
            handler,
        }
    }

    pub fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }
}

/// Commands in registration order, addressable by name or alias.
pub struct CommandRegistry {
    definitions: Vec<CommandDefinition>,
    lookup: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    pub fn new(definitions: Vec<CommandDefinition>) -> Self {
        let mut lookup = HashMap::new();
        for (index, definition) in definitions.iter().enumerate() {
            lookup.insert(definition.name, index);
            for alias in definition.aliases {
                lookup.entry(*alias).or_insert(index);
            }
        }
        Self {
            definitions,
            lookup,
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.lookup
            .get(name)
            .and_then(|index| self.definitions.get(*index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.definitions.iter()
    }

    pub fn in_group(&self, group: CommandGroup) -> impl Iterator<Item = &CommandDefinition> {
        self.definitions
            .iter()
            .filter(move |definition| definition.group == group)
    }

    /// Primary names followed by aliases.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.definitions
            .iter()
            .map(|definition| definition.name)
            .chain(
                self.definitions
                    .iter()
                    .flat_map(|definition| definition.aliases.iter().copied()),
            )
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new(all_definitions())
    }
}

pub(crate) fn usage_error(usage: &str) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {usage}"))
}
