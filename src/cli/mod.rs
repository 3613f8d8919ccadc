//! Command-line interface.

mod args;
mod commands;

pub use args::{parse_assignment, Cli, Command};
pub use commands::{check, fill, render_errors, render_fields, render_report, submit};
