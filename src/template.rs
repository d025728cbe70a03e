// src/template.rs
use log::trace;
use tera::{Context, Tera};

use crate::error::GreeterError;

const GREETING_TEMPLATE: &str = "<h1>Hello {{ name }}</h1>";

/// Renders the greeting page with the name HTML-escaped.
pub fn render_greeting_html(name: &str) -> Result<String, GreeterError> {
  let mut context = Context::new();
  context.insert("name", name);
  let html = Tera::one_off(GREETING_TEMPLATE, &context, true)?;
  trace!("Rendered greeting page: {}", html);
  Ok(html)
}
