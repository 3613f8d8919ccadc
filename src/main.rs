use std::process::ExitCode;

use clap::Parser;

use formflow::cli::{self, Cli, Command};
use formflow::config::Config;
use formflow::logging::init_tracing;
use formflow::SubmitReport;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Fields { screen } => {
            print!("{}", cli::render_fields(screen)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { screen, fields } => {
            let errors = cli::check(screen, &fields)?;
            if errors.is_empty() {
                println!("{} form is valid", screen);
                Ok(ExitCode::SUCCESS)
            } else {
                print!("{}", cli::render_errors(&screen.schema()?, &errors));
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Submit { screen, fields } => {
            let config = match &cli.config {
                Some(path) => Config::load_from(path)?,
                None => Config::load()?,
            };
            let report = cli::submit(screen, &fields, &config).await?;
            print!("{}", cli::render_report(&screen.schema()?, &report));
            let succeeded =
                matches!(&report, SubmitReport::Completed(outcome) if outcome.is_success());
            Ok(if succeeded {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
