//! CLI argument definitions using clap
//!
//! Commands:
//! - formflow fields <screen>
//! - formflow check <screen> --field name=value ...
//! - formflow submit <screen> --field name=value ...

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::screens::Screen;

/// formflow - validate and submit the login, registration and user-details forms
#[derive(Parser, Debug)]
#[command(name = "formflow")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List a form's fields and the options of dropdown fields
    Fields {
        #[arg(value_enum)]
        screen: Screen,
    },

    /// Validate values without contacting the service
    Check {
        #[arg(value_enum)]
        screen: Screen,

        /// Field value as name=value (repeatable)
        #[arg(long = "field", short = 'f', value_parser = parse_assignment)]
        fields: Vec<(String, String)>,
    },

    /// Validate values and submit them to the service
    Submit {
        #[arg(value_enum)]
        screen: Screen,

        /// Field value as name=value (repeatable)
        #[arg(long = "field", short = 'f', value_parser = parse_assignment)]
        fields: Vec<(String, String)>,
    },
}

/// Parse `name=value`. The value may be empty or contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected name=value, got '{}'", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_assignment_splits_on_first_equals() {
        assert_eq!(
            parse_assignment("password=a=b").unwrap(),
            ("password".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_assignment("gender=").unwrap(),
            ("gender".to_string(), String::new())
        );
        assert!(parse_assignment("=x").is_err());
        assert!(parse_assignment("novalue").is_err());
    }

    #[test]
    fn cli_parses_repeated_fields() {
        let cli = Cli::try_parse_from([
            "formflow",
            "check",
            "login",
            "--field",
            "email=a@b.co",
            "-f",
            "password=Abc123!",
        ])
        .unwrap();
        match cli.command {
            Command::Check { screen, fields } => {
                assert_eq!(screen, Screen::Login);
                assert_eq!(fields.len(), 2);
            }
            other => panic!("expected Check, got {other:?}"),
        }
    }

    #[test]
    fn cli_accepts_kebab_case_screen() {
        let cli = Cli::try_parse_from(["formflow", "fields", "user-details"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Fields {
                screen: Screen::UserDetails
            }
        ));
    }
}
