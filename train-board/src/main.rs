use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use train_board::credentials::Credentials;
use train_board::enrich::StopFailurePolicy;
use train_board::error::ReportError;
use train_board::report::TrainReporter;
use train_board::stations::StationDirectory;
use train_board::transport::{TransportClient, TransportConfig};
use train_board::web::{AppState, create_router};

/// Live departures between two stations
#[derive(Parser)]
#[command(name = "train-board")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    /// CSV of station names and CRS codes
    #[arg(long, global = true, default_value = "station_codes.csv")]
    stations: PathBuf,

    /// Directory holding .transportAppId and .transportAppKey
    #[arg(long, global = true, default_value = ".")]
    credentials_dir: PathBuf,

    /// Fail the whole report when any timetable can't be fetched
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print departures from one station calling at another
    Report {
        /// Origin CRS code, e.g. PAD
        from: String,
        /// Destination CRS code, e.g. OXF
        to: String,
    },

    /// Serve reports over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8001")]
        addr: SocketAddr,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_reporter(
    directory: StationDirectory,
    credentials_dir: &Path,
    policy: StopFailurePolicy,
) -> Result<TrainReporter<TransportClient>, ReportError> {
    let credentials = Credentials::resolve(credentials_dir)?;
    let client =
        TransportClient::new(TransportConfig::new(credentials)).map_err(ReportError::Board)?;

    Ok(TrainReporter::new(directory, client).with_policy(policy))
}

fn exit_with(e: &ReportError) -> ExitCode {
    error!(kind = ?e.kind(), "{e}");
    eprintln!("error: {e}");
    ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
}

#[tokio::main]
async fn main() -> ExitCode {
    let Cli {
        verbose,
        stations,
        credentials_dir,
        strict,
        command,
    } = Cli::parse();

    init_tracing(verbose);

    let policy = if strict {
        StopFailurePolicy::Abort
    } else {
        StopFailurePolicy::Degrade
    };

    let directory = match StationDirectory::load(&stations) {
        Ok(directory) => directory,
        Err(e) => return exit_with(&e.into()),
    };

    // Bad codes are reported before credentials are looked up.
    if let Command::Report { from, to } = &command {
        if let Err(e) = directory.resolve(from).and_then(|_| directory.resolve(to)) {
            return exit_with(&e);
        }
    }

    let reporter = match build_reporter(directory, &credentials_dir, policy) {
        Ok(reporter) => reporter,
        Err(e) => return exit_with(&e),
    };

    match command {
        Command::Report { from, to } => match reporter.render(&from, &to).await {
            Ok(text) => {
                print!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => exit_with(&e),
        },

        Command::Serve { addr } => {
            let app = create_router(AppState::new(reporter));

            let listener = match tokio::net::TcpListener::bind(addr).await {
                Ok(listener) => listener,
                Err(e) => {
                    error!(%addr, error = %e, "failed to bind");
                    eprintln!("error: failed to bind {addr}: {e}");
                    return ExitCode::FAILURE;
                }
            };

            info!(%addr, "train board listening");
            eprintln!("Train board listening on http://{addr}");

            if let Err(e) = axum::serve(listener, app).await {
                error!(error = %e, "server error");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
    }
}
