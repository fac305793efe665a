use std::io;

use anyhow::Context;
use resource_example::{Config, EXAMPLE_KEY, Outcome, RunError, run};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
  let config = Config::from_env();

  // RUST_LOG takes precedence over the configured default.
  // Logs go to stderr so stdout only carries the resource.
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .compact()
    .init();

  let provider = config.provider();
  let mut stdout = io::stdout().lock();

  // A closed or full stdout is not an error exit.
  match run(&provider, &mut stdout) {
    Ok(Outcome::Printed) => info!("printed {EXAMPLE_KEY}"),
    Ok(Outcome::Missing) => info!("{EXAMPLE_KEY} is not available"),
    Err(RunError::Write(e)) => warn!(error = %e, "could not write {EXAMPLE_KEY} to stdout"),
    Err(e) => return Err(e).with_context(|| format!("Failed to print {EXAMPLE_KEY}")),
  }

  Ok(())
}
