// src/config.rs
use std::path::PathBuf;

/// Run parameters for a single invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
  pub num_times: i64,
  /// `None` until supplied on the command line or read from the prompt.
  pub name: Option<String>,
  /// When set, the greeting goes to this HTML file instead of stdout.
  pub output_html_path: Option<PathBuf>,
  pub verbosity: u8,
}
