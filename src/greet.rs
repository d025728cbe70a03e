// src/greet.rs
use std::fs::File;
use std::io::{BufRead, Write};
use std::path::Path;

use log::{debug, info};

use crate::config::Config;
use crate::error::GreeterError;
use crate::template;

const NAME_PROMPT: &str = "Your name please? Press the Enter key when done.\n";

/// Resolves the name (prompting on `writer` if needed) and produces exactly one
/// kind of output: the HTML page when a path is set, the text greeting otherwise.
pub fn run_cmd<R: BufRead, W: Write>(
  reader: &mut R,
  writer: &mut W,
  mut config: Config,
) -> Result<(), GreeterError> {
  if config.name.is_none() {
    config.name = Some(get_name(reader, writer)?);
  }
  debug!("Resolved config: {:?}", config);

  let name = config.name.as_deref().unwrap_or_default();
  match &config.output_html_path {
    Some(path) => create_html_greeter(path, name),
    None => greet_user(writer, name, config.num_times),
  }
}

fn get_name<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<String, GreeterError> {
  writer.write_all(NAME_PROMPT.as_bytes())?;
  writer.flush()?;

  let mut line = String::new();
  reader.read_line(&mut line).map_err(GreeterError::ReadName)?;

  // EOF without a trailing newline still counts as a line.
  let name = line.strip_suffix('\n').unwrap_or(&line);
  let name = name.strip_suffix('\r').unwrap_or(name);
  if name.is_empty() {
    return Err(GreeterError::EmptyName);
  }
  Ok(name.to_string())
}

fn greet_user<W: Write>(writer: &mut W, name: &str, num_times: i64) -> Result<(), GreeterError> {
  let msg = format!("Nice to meet you {}\n", name);
  for _ in 0..num_times {
    writer.write_all(msg.as_bytes())?;
  }
  writer.flush()?;
  Ok(())
}

/// The file is created before rendering and closed on return either way; a
/// failed render leaves it empty.
fn create_html_greeter(path: &Path, name: &str) -> Result<(), GreeterError> {
  let mut file = File::create(path).map_err(|e| GreeterError::HtmlFileCreate {
    path: path.to_path_buf(),
    source: e,
  })?;

  let html = template::render_greeting_html(name)?;
  file
    .write_all(html.as_bytes())
    .map_err(|e| GreeterError::HtmlFileWrite {
      path: path.to_path_buf(),
      source: e,
    })?;
  info!("Wrote greeting page to {}", path.display());
  Ok(())
}
