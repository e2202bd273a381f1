use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use irail::api::IrailClient;
use irail::cli::{Cli, Command};
use irail::commands;
use irail::error::AppError;
use irail::logging::init_logger;
use irail::prompt::LinePrompter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::NoConnectionsFound) => {
            println!("{}", AppError::NoConnectionsFound.user_message());
            AppError::NoConnectionsFound.exit_code()
        }
        Err(e) => {
            debug!(error = ?e, "command failed");
            let _ = io::stdout().flush();
            eprintln!("{}", e.user_message());
            e.exit_code()
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let client = IrailClient::new(cli.config())?;
    let ctx = cli.render_context();
    let tz = cli.timezone;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut prompter = LinePrompter::stdin();

    match &cli.command {
        Command::Route(args) => {
            let outcome = commands::route(&client, &mut prompter, &mut out, &ctx, tz, &args.request())?;
            debug!(?outcome, "route finished");
            Ok(())
        }
        Command::Liveboard(args) => {
            commands::liveboard(&client, &mut prompter, &mut out, &ctx, tz, &args.options())
        }
        Command::Vehicle { id } => {
            let now = chrono::Utc::now().timestamp();
            commands::vehicle(&client, &mut out, &ctx, tz, id, now)
        }
    }
}
