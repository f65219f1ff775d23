use std::io;

use thiserror::Error;

use crate::cli::commands::{self, CommandDefinition, CommandRegistry};
use crate::cli::output;
use crate::core::services::ServiceError;
use crate::core::SchoolManager;
use crate::currency::format_currency;
use crate::domain::ParseError;
use crate::errors::SchoolError;

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Failures of a single command; the shell reports them and keeps reading.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("exit requested")]
    ExitRequested,
}

/// Failures that end the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    School(#[from] SchoolError),
}

pub struct ShellContext {
    pub manager: SchoolManager,
    pub(crate) registry: CommandRegistry,
    pub running: bool,
}

impl ShellContext {
    pub fn new(manager: SchoolManager) -> Self {
        Self {
            manager,
            registry: CommandRegistry::new(commands::all_definitions()),
            running: true,
        }
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandDefinition> {
        self.registry.get(name)
    }

    /// Amount prefixed with the configured currency code.
    pub(crate) fn money(&self, amount: f64) -> String {
        format_currency(&self.manager.config().currency, amount)
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
        self.manager.sync_salaries();
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
        let lowered = input.to_lowercase();
        if let Some(best) = self
            .registry
            .names()
            .find(|name| name.starts_with(&lowered) || lowered.starts_with(name))
        {
            output::info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Use `help <command>` for usage details.");
            }
            other => output::error(other),
        }
    }
}
