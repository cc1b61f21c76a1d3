//! sigmactl - Main entry point

use clap::Parser;
use log::{debug, info};
use std::error::Error;
use std::process::ExitCode;

use sigmactl::{
    run_auth_init, run_balance_command, run_config_command, run_region_command,
    run_server_command, AuthAction, BalanceAction, Cli, Command, Invocation, RegionAction,
    ServerAction, TerminalSecretReader,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level.as_str()),
    )
    .init();

    info!("Starting sigmactl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: context={:?}, config={:?}, output={}, command={:?}",
        cli.context, cli.config, cli.output, cli.command
    );

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> sigmactl::Result<()> {
    let mut inv = Invocation::load(
        cli.context.as_deref(),
        cli.config.clone(),
        cli.output_options(),
    )?;

    match &cli.command {
        Command::Auth(AuthAction::Init) => {
            let mut stdout = std::io::stdout();
            run_auth_init(&mut inv, &TerminalSecretReader, &mut stdout).await
        }
        Command::Balance(BalanceAction::Get) => run_balance_command(&inv).await,
        Command::Region(RegionAction::List) => run_region_command(&inv).await,
        Command::Server(ServerAction::List) => run_server_command(&inv).await,
        Command::Config(action) => run_config_command(&mut inv, action),
    }
}

/// Print the error and every cause not already part of its message
fn report_error(err: &dyn Error) {
    let message = err.to_string();
    eprintln!("Error: {}", message);

    let mut source = err.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.contains(&cause_message) {
            eprintln!("  caused by: {}", cause_message);
        }
        source = cause.source();
    }
}
