// src/main.rs
mod cli;
mod config;
mod error;
mod greet;
mod template;
mod validate;

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use config::Config;
use error::GreeterError;
use log::LevelFilter;

fn main() -> ExitCode {
  let config = match cli::parse_args(&mut io::stderr(), env::args_os()) {
    Ok(config) => config,
    Err(e) => return report(e),
  };

  init_logging(config.verbosity);
  log::debug!("Parsed config: {:?}", config);

  match run(config) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => report(e),
  }
}

fn run(config: Config) -> Result<(), GreeterError> {
  validate::validate_args(&config)?;
  log::info!("Running greeter with {:?}", config);

  let stdin = io::stdin();
  let stdout = io::stdout();
  greet::run_cmd(&mut stdin.lock(), &mut stdout.lock(), config)
}

// Errors are reported on stdout, not stderr.
fn report(err: GreeterError) -> ExitCode {
  log::debug!("Exiting after error: {:?}", err);
  if err.reports_to_stdout() {
    let _ = writeln!(io::stdout(), "{}", err);
  }
  ExitCode::FAILURE
}

fn init_logging(verbosity: u8) {
  let log_level = match verbosity {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  env_logger::Builder::new().filter_level(log_level).init();
}
