pub mod commands;
pub mod core;
pub mod output;
mod shell;
pub mod table;

pub use self::core::{CliError, CommandError, LoopControl, ShellContext};
pub use shell::{run_cli, run_script};
