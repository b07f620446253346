//! Command shell over the tracker: one-shot, scripted and interactive modes.

mod args;
pub mod commands;
pub mod core;
mod help;
mod io;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;
mod table;

pub use self::core::{CliError, CommandError};
pub use self::shell::{run_cli, SCRIPT_ENV};
pub use self::shell_context::{CliMode, ShellContext};
