use std::{path::PathBuf, sync::Arc};

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;

use crate::{
    config::{Config, ConfigManager},
    core::{Clock, SystemClock, Tracker},
    domain::Category,
    errors::TrackerError,
};

use super::commands;
use super::core::{CliError, CommandError, LoopControl};
use super::io as cli_io;
use super::registry::{CommandEntry, CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
    OneShot,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub tracker: Tracker,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub theme: ColorfulTheme,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    /// Opens the data directory from `$EXPENSE_TRACKER_HOME` (or the default) with the
    /// system clock.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let manager = ConfigManager::new()?;
        Self::open(mode, manager, Arc::new(SystemClock))
    }

    pub fn with_base_dir(
        mode: CliMode,
        base: PathBuf,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, CliError> {
        Self::open(mode, ConfigManager::with_base_dir(base)?, clock)
    }

    fn open(mode: CliMode, manager: ConfigManager, clock: Arc<dyn Clock>) -> Result<Self, CliError> {
        let config = manager.load()?;
        let tracker = Tracker::open(manager.base(), &config, clock)?;

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        Ok(Self {
            mode,
            registry,
            tracker,
            config,
            config_manager: manager,
            theme: ColorfulTheme::default(),
            last_command: None,
            running: true,
        })
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        "expense-tracker> ".to_string()
    }

    /// Formats `amount` with the configured currency symbol.
    pub fn money(&self, amount: f64) -> String {
        self.config.money(amount)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return Err(CommandError::UnknownCommand(raw.to_string()));
        };
        tracing::debug!(command, args = args.len(), "dispatching command");
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let lowered = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &lowered), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode != CliMode::Interactive {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?")
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested | CommandError::UnknownCommand(_) => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(format!("Invalid input: {}", message));
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            other => {
                let hint = error_hint(&other);
                cli_io::print_error(other);
                if let Some(hint) = hint {
                    cli_io::print_hint(hint);
                }
            }
        }
    }

    /// Runs one already-tokenized line through the registry.
    pub(crate) fn process_tokens(&mut self, tokens: &[String]) -> Result<LoopControl, CommandError> {
        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.last_command = Some(tokens.join(" "));

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }
}

fn error_hint(err: &CommandError) -> Option<String> {
    match err {
        CommandError::Core(TrackerError::CategoryNotFound(_)) => {
            Some(format!("Valid categories: {}", Category::names()))
        }
        _ => None,
    }
}
