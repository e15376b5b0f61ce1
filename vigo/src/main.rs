use std::{path::PathBuf, process::ExitCode};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use thiserror::Error;
use tracing::{debug, error};
use vigo_frontend::settings::Settings;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Initialization error")]
    Initialization,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli().get_matches();

    let logpath = match get_logging_path() {
        Ok(it) => it,
        Err(err) => {
            eprintln!("vigo: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let logfile = tracing_appender::rolling::daily(logpath, "log");
    tracing_subscriber::fmt()
        .compact()
        .with_writer(logfile)
        .init();

    debug!("starting application");

    let mut settings = Settings::default();
    map_args_to_settings(&args, &mut settings);

    match vigo_frontend::run(settings).await {
        Ok(()) => {
            debug!("closing application");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("closing application with error: {:?}", err);
            eprintln!("vigo: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn cli() -> Command {
    Command::new("vigo")
        .about("vigo - a small modal text editor")
        .version(env!("CARGO_PKG_VERSION"))
        .args([Arg::new("path")
            .action(ArgAction::Set)
            .value_parser(value_parser!(PathBuf))
            .help("file to open on startup, reads stdin if omitted and piped")])
}

fn map_args_to_settings(args: &ArgMatches, settings: &mut Settings) {
    settings.startup_path = args.get_one("path").cloned();
}

fn get_logging_path() -> Result<PathBuf, Error> {
    match dirs::cache_dir() {
        Some(cache_dir) => Ok(cache_dir.join("vigo").join("logs")),
        None => Err(Error::Initialization),
    }
}
