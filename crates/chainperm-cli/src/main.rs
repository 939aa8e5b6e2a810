mod cli;
mod error;
mod logging;
mod output;

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use chainperm_core::{
    ChainJob, ChainPipeline, Credentials, EndpointConfig, ReqwestHttpClient, SessionClient,
};
use clap::error::ErrorKind;
use clap::Parser;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match parse_args() {
        Ok(cli) => cli,
        Err(error) => {
            eprintln!("error: {error}");
            return ExitCode::from(error.exit_code());
        }
    };

    logging::init(cli.debug);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "run aborted");
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn parse_args() -> Result<Cli, CliError> {
    match Cli::try_parse() {
        Ok(cli) => Ok(cli),
        Err(error) if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            error.exit()
        }
        Err(error) => {
            let _ = error.print();
            Err(CliError::from_parse_kind(error.kind()))
        }
    }
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    let session = SessionClient::new(
        EndpointConfig::from_env(),
        Arc::new(ReqwestHttpClient::new()),
    )
    .with_timeout_ms(cli.timeout_ms);

    let job = ChainJob::new(Credentials::new(
        cli.username.as_str(),
        cli.password.as_str(),
        cli.clientid.as_str(),
    ))
    .with_chain(cli.chainric.as_str())
    .with_limit(cli.limit);

    let format = cli.format;
    ChainPipeline::new(session)
        .run(&job, |table| {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            output::render(table, format, &mut out)?;
            out.flush()
        })
        .await?;

    Ok(())
}
