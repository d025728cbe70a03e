// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
  // --- Argument errors ---
  #[error("Help requested")]
  HelpRequested,

  #[error("Invalid arguments: {0}")]
  InvalidArgs(#[source] clap::Error),

  #[error("More than one positional argument specified")]
  TooManyPositionalArgs,

  // --- Validation errors ---
  #[error("Must specify a number greater than 0")]
  InvalidNumTimes,

  // --- Input errors ---
  #[error("You didn't enter your name")]
  EmptyName,

  #[error("Could not read your name: {0}")]
  ReadName(#[source] std::io::Error),

  // --- Output errors ---
  #[error("IO Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Failed to create HTML file '{path}': {source}")]
  HtmlFileCreate {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to write HTML file '{path}': {source}")]
  HtmlFileWrite {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Template Error: {0}")]
  Template(#[from] tera::Error),
}

impl GreeterError {
  /// Help text and clap errors have already been written to the usage writer,
  /// everything else still needs its message printed.
  pub fn reports_to_stdout(&self) -> bool {
    !matches!(
      self,
      GreeterError::HelpRequested | GreeterError::InvalidArgs(_)
    )
  }
}
