// src/validate.rs
use log::debug;

use crate::config::Config;
use crate::error::GreeterError;

/// Rejects configs that cannot produce a greeting. No I/O happens here.
pub fn validate_args(config: &Config) -> Result<(), GreeterError> {
  if config.num_times <= 0 {
    debug!("Rejecting repeat count {}", config.num_times);
    return Err(GreeterError::InvalidNumTimes);
  }
  Ok(())
}
