use std::collections::HashMap;
use std::str::FromStr;

pub mod reports;
pub mod salaries;
pub mod students;
pub mod system;
pub mod teachers;

use crate::cli::core::{CommandError, CommandResult, ShellContext};

pub(crate) fn all_definitions() -> Vec<CommandDefinition> {
    let mut commands = Vec::new();
    commands.extend(system::definitions());
    commands.extend(reports::definitions());
    commands.extend(students::definitions());
    commands.extend(teachers::definitions());
    commands.extend(salaries::definitions());
    commands
}

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

#[derive(Clone)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandDefinition {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandDefinition>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new(definitions: Vec<CommandDefinition>) -> Self {
        let mut commands = HashMap::new();
        let mut order = Vec::new();
        for definition in definitions {
            order.push(definition.name);
            commands.insert(definition.name, definition);
        }
        Self { commands, order }
    }

    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.commands.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.order
            .iter()
            .filter_map(move |name| self.commands.get(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }
}

/// Fails unless exactly `count` arguments were given.
pub(crate) fn expect_args(args: &[&str], count: usize, usage: &str) -> CommandResult {
    if args.len() == count {
        Ok(())
    } else {
        Err(usage_error(usage))
    }
}

pub(crate) fn usage_error(usage: &str) -> CommandError {
    CommandError::InvalidArguments(format!("Usage: {usage}"))
}

/// Parses one positional argument, naming the field on failure.
pub(crate) fn parse_arg<T: FromStr>(value: &str, field: &str) -> Result<T, CommandError> {
    value
        .trim()
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid {field}: `{value}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_keeps_definition_order() {
        let registry = CommandRegistry::new(all_definitions());
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names.first(), Some(&"help"));
        assert!(names.contains(&"pay-all"));
        assert!(registry.get("search").is_some());
        assert_eq!(registry.iter().count(), names.len());
    }

    #[test]
    fn parse_arg_names_the_field() {
        let err = parse_arg::<u32>("abc", "student id").unwrap_err();
        assert_eq!(err.to_string(), "invalid student id: `abc`");
        assert_eq!(parse_arg::<f64>(" 12.5", "amount").unwrap(), 12.5);
    }
}
