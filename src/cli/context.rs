use std::{path::PathBuf, sync::Arc};

use strsim::levenshtein;

use crate::{
    config::{Config, ConfigManager},
    core::{SystemClock, Tracker},
    storage::json_backend::JsonFileStore,
    utils,
};

use super::commands::{CommandDefinition, CommandRegistry};
use super::output::{self, OutputPreferences};
use super::{CliError, CommandError, LoopControl};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Shell runtime state: the tracker plus presentation settings.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub tracker: Tracker,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub running: bool,
}

impl ShellContext {
    /// Opens the ledger under the application home directory.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let home = utils::app_home();
        let config_manager = ConfigManager::with_base_dir(home.clone())?;
        let config = config_manager.load()?;
        let data_dir: PathBuf = config.resolve_data_dir(&home);
        let store = JsonFileStore::new(data_dir)?;
        let tracker = Tracker::open(Box::new(store), Arc::new(SystemClock))?;
        Ok(Self::from_parts(mode, tracker, config, config_manager))
    }

    pub fn from_parts(
        mode: CliMode,
        tracker: Tracker,
        config: Config,
        config_manager: ConfigManager,
    ) -> Self {
        let context = Self {
            mode,
            registry: CommandRegistry::default(),
            tracker,
            config,
            config_manager,
            running: true,
        };
        context.apply_output_preferences();
        context
    }

    pub(crate) fn apply_output_preferences(&self) {
        output::set_preferences(OutputPreferences {
            plain_output: self.config.plain_output || self.mode == CliMode::Script,
            dark_mode: self.config.dark_mode,
        });
    }

    pub(crate) fn persist_config(&self) -> Result<(), CommandError> {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub fn prompt(&self) -> String {
        format!("pocketbook [{}]> ", self.tracker.cursor().label())
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandDefinition> {
        self.registry.get(name)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.get(command).map(|definition| definition.handler) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, input), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                output::hint(format!("Did you mean `{}`?", best));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Service(service) => match service.rejection() {
                Some(reason) => output::warning(format!("Not saved: {reason}")),
                None => output::error(service),
            },
            other => output::error(other),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;
    use crate::cli::shell::handle_line;
    use crate::core::FixedClock;
    use crate::storage::memory::MemoryStore;

    /// Script-mode context over an in-memory ledger pinned to 2024-03-15.
    pub(crate) fn context() -> (ShellContext, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let config_manager =
            ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("config manager");
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 3, 15).expect("date"));
        let tracker =
            Tracker::open(Box::new(MemoryStore::new()), Arc::new(clock)).expect("open tracker");
        let context =
            ShellContext::from_parts(CliMode::Script, tracker, Config::default(), config_manager);
        (context, temp)
    }

    pub(crate) fn run(context: &mut ShellContext, lines: &[&str]) {
        for line in lines {
            match handle_line(context, line) {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Exit) => break,
                Err(err) => context.report_error(err),
            }
        }
    }
}
