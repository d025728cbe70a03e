// src/cli.rs
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use crate::config::Config;
use crate::error::GreeterError;

#[derive(Parser, Debug)]
#[command(
    name = "greeter",
    about = "A greeter application which prints the name you entered a specified number of times.",
    override_usage = "greeter <options> [name]",
    long_about = None
)]
pub struct Cli {
  /// Number of times to greet
  #[arg(
    short = 'n',
    value_name = "INT",
    default_value_t = 0,
    allow_negative_numbers = true,
    value_parser = parse_count
  )]
  pub num_times: i64,

  /// Path to the HTML page containing the greeting
  #[arg(short = 'o', value_name = "PATH", value_parser = clap::value_parser!(OsString))]
  pub output_html_path: Option<OsString>,

  /// Increase verbosity level (e.g., -v, -vv)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Name to greet (prompted for when omitted)
  ///
  /// Flag parsing stops at the first positional, so anything after the name
  /// counts as another positional.
  #[arg(value_name = "NAME", num_args = 1.., trailing_var_arg = true)]
  pub names: Vec<String>,
}

/// Parses the raw argument list (program name first) into a `Config`.
///
/// Help and parse errors are rendered to `writer`; the returned error only
/// signals that parsing did not produce a usable config.
pub fn parse_args<W, I, T>(writer: &mut W, args: I) -> Result<Config, GreeterError>
where
  W: Write,
  I: IntoIterator<Item = T>,
  T: Into<OsString> + Clone,
{
  let cli = match Cli::try_parse_from(args) {
    Ok(cli) => cli,
    Err(e) => {
      // Nowhere left to report a failing usage writer.
      let _ = write!(writer, "{}", e.render());
      return Err(match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
          GreeterError::HelpRequested
        }
        _ => GreeterError::InvalidArgs(e),
      });
    }
  };

  if cli.names.len() > 1 {
    return Err(GreeterError::TooManyPositionalArgs);
  }

  Ok(Config {
    num_times: cli.num_times,
    name: cli.names.into_iter().next().filter(|n| !n.is_empty()),
    output_html_path: cli
      .output_html_path
      .filter(|p| !p.is_empty())
      .map(PathBuf::from),
    verbosity: cli.verbose,
  })
}

/// Integer parsing for `-n` with optional sign, `0x`/`0o`/`0b` prefixes, a
/// leading `0` for octal, and `_` between digits.
fn parse_count(value: &str) -> Result<i64, String> {
  let invalid = || format!("'{}' is not an integer", value);

  let (negative, unsigned) = match value.strip_prefix('-') {
    Some(rest) => (true, rest),
    None => (false, value.strip_prefix('+').unwrap_or(value)),
  };
  let lower = unsigned.to_ascii_lowercase();
  let (radix, digits, prefixed) = if let Some(rest) = lower.strip_prefix("0x") {
    (16, rest, true)
  } else if let Some(rest) = lower.strip_prefix("0b") {
    (2, rest, true)
  } else if let Some(rest) = lower.strip_prefix("0o") {
    (8, rest, true)
  } else if lower.len() > 1 && lower.starts_with('0') {
    (8, &lower[1..], true)
  } else {
    (10, lower.as_str(), false)
  };

  // Underscores only separate digits (or follow a base prefix).
  if digits.ends_with('_') || digits.contains("__") || (!prefixed && digits.starts_with('_')) {
    return Err(invalid());
  }
  let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
  if cleaned.is_empty() || cleaned.starts_with(['+', '-']) {
    return Err(invalid());
  }

  let magnitude = u64::from_str_radix(&cleaned, radix).map_err(|_| invalid())?;
  let signed = if negative {
    -i128::from(magnitude)
  } else {
    i128::from(magnitude)
  };
  i64::try_from(signed).map_err(|_| format!("'{}' is out of range", value))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(args: &[&str]) -> (Result<Config, GreeterError>, String) {
    let mut usage = Vec::new();
    let argv = std::iter::once("greeter").chain(args.iter().copied());
    let result = parse_args(&mut usage, argv);
    (result, String::from_utf8(usage).unwrap())
  }

  #[test]
  fn defaults_when_no_args() {
    let (result, usage) = parse(&[]);
    assert_eq!(result.unwrap(), Config::default());
    assert!(usage.is_empty());
  }

  #[test]
  fn parses_count_output_and_name() {
    let (result, _) = parse(&["-n", "3", "-o", "page.html", "Bob"]);
    let config = result.unwrap();
    assert_eq!(config.num_times, 3);
    assert_eq!(config.name.as_deref(), Some("Bob"));
    assert_eq!(config.output_html_path, Some(PathBuf::from("page.html")));
  }

  #[test]
  fn accepts_negative_count() {
    let (result, _) = parse(&["-n", "-2"]);
    assert_eq!(result.unwrap().num_times, -2);
  }

  #[test]
  fn empty_values_mean_not_supplied() {
    let (result, _) = parse(&["-n", "1", "-o", "", ""]);
    let config = result.unwrap();
    assert_eq!(config.name, None);
    assert_eq!(config.output_html_path, None);
  }

  #[test]
  fn rejects_more_than_one_positional() {
    let (result, usage) = parse(&["-n", "1", "jane", "doe"]);
    assert!(matches!(result, Err(GreeterError::TooManyPositionalArgs)));
    assert!(usage.is_empty());
  }

  #[test]
  fn flags_after_the_name_count_as_positionals() {
    for args in [
      &["Bob", "-n", "2"][..],
      &["-n", "1", "Bob", "-o", "x.html"][..],
      &["-n", "1", "Bob", "-h"][..],
    ] {
      let (result, usage) = parse(args);
      assert!(matches!(result, Err(GreeterError::TooManyPositionalArgs)));
      assert!(usage.is_empty());
    }
  }

  #[test]
  fn empty_output_path_falls_back_to_text_greeting() {
    let (result, _) = parse(&["-n", "1", "-o", "", "Bob"]);
    let config = result.unwrap();
    assert_eq!(config.output_html_path, None);
    assert_eq!(config.name.as_deref(), Some("Bob"));
  }

  #[test]
  fn count_accepts_base_prefixes_and_underscores() {
    let cases = [
      ("0x10", 16),
      ("0B11", 3),
      ("0o17", 15),
      ("010", 8),
      ("1_000", 1000),
      ("0x_1f", 31),
      ("+7", 7),
      ("-0b10", -2),
      ("0", 0),
      ("-9223372036854775808", i64::MIN),
    ];
    for (input, expected) in cases {
      assert_eq!(parse_count(input), Ok(expected), "input {input}");
    }
  }

  #[test]
  fn count_rejects_malformed_integers() {
    for input in ["", "0x", "08", "1__0", "_1", "1_", "--1", "+-1", "1.5", "9223372036854775808"] {
      assert!(parse_count(input).is_err(), "input {input:?}");
    }
  }

  #[test]
  fn hex_count_parses_from_the_command_line() {
    let (result, _) = parse(&["-n", "0x10", "Bob"]);
    assert_eq!(result.unwrap().num_times, 16);
  }

  #[test]
  fn help_writes_usage_and_signals_failure() {
    for flag in ["-h", "--help"] {
      let (result, usage) = parse(&[flag]);
      assert!(matches!(result, Err(GreeterError::HelpRequested)));
      assert!(usage.contains("A greeter application"));
      assert!(usage.contains("greeter <options> [name]"));
      assert!(usage.contains("Number of times to greet"));
    }
  }

  #[test]
  fn malformed_count_is_an_argument_error() {
    let (result, usage) = parse(&["-n", "lots"]);
    assert!(matches!(result, Err(GreeterError::InvalidArgs(_))));
    assert!(!usage.is_empty());
  }

  #[test]
  fn unknown_flag_is_an_argument_error() {
    let (result, _) = parse(&["-x"]);
    let err = result.unwrap_err();
    assert!(matches!(err, GreeterError::InvalidArgs(_)));
    assert!(!err.reports_to_stdout());
  }

  #[test]
  fn counts_verbosity() {
    let (result, _) = parse(&["-vv", "-n", "1"]);
    assert_eq!(result.unwrap().verbosity, 2);
  }
}
