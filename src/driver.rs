use std::io::Write;

use tracing::{debug, warn};

use crate::{ResourceProvider, RunError};

pub const EXAMPLE_KEY: &str = "example.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Printed,
  Missing,
}

/// Prints `example.txt` from `provider` to `out` if it exists.
pub fn run<P, W>(provider: &P, out: &mut W) -> Result<Outcome, RunError>
where
  P: ResourceProvider + ?Sized,
  W: Write + ?Sized,
{
  run_key(provider, EXAMPLE_KEY, out)
}

/// Writes a header line followed by the content of `key`, or nothing at all
/// when the provider does not have it. Reads at most once.
pub fn run_key<P, W>(provider: &P, key: &str, out: &mut W) -> Result<Outcome, RunError>
where
  P: ResourceProvider + ?Sized,
  W: Write + ?Sized,
{
  if !provider.exists(key) {
    debug!(key, "resource not present, nothing to print");
    return Ok(Outcome::Missing);
  }

  let content = provider.read_as_string(key).inspect_err(|e| {
    warn!(key, error = %e, "resource existed but could not be read");
  })?;

  writeln!(out, "Content of {key}:").map_err(RunError::Write)?;
  writeln!(out, "{content}").map_err(RunError::Write)?;
  out.flush().map_err(RunError::Write)?;

  debug!(key, bytes = content.len(), "resource printed");
  Ok(Outcome::Printed)
}
