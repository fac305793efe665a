use std::{env, path::PathBuf};

use tracing::info;

use crate::{DirectoryProvider, EMBEDDED, ResourceProvider};

pub const RESOURCE_DIR_VAR: &str = "EXAMPLE_RESOURCE_DIR";
pub const LOG_VAR: &str = "EXAMPLE_LOG";

const DEFAULT_LOG: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderSource {
  Embedded,
  Directory(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub source: ProviderSource,
  /// Default tracing directive, used when `RUST_LOG` is not set.
  pub log: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      source: ProviderSource::Embedded,
      log: DEFAULT_LOG.to_owned(),
    }
  }
}

impl Config {
  pub fn from_env() -> Self {
    Self::from_lookup(|name| env::var(name).ok())
  }

  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let non_empty = |name: &str| {
      lookup(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
    };

    let source = match non_empty(RESOURCE_DIR_VAR) {
      Some(dir) => ProviderSource::Directory(PathBuf::from(dir)),
      None => ProviderSource::Embedded,
    };

    let log = non_empty(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG.to_owned());

    Self { source, log }
  }

  pub fn provider(&self) -> Box<dyn ResourceProvider> {
    match &self.source {
      ProviderSource::Embedded => {
        info!("using embedded resources");
        Box::new(EMBEDDED)
      }
      ProviderSource::Directory(root) => {
        let provider = DirectoryProvider::new(root.clone());
        info!(root = %provider.root().display(), "using resource directory");
        Box::new(provider)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use std::{collections::HashMap, fs};

  use super::*;

  fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();

    move |name| vars.get(name).cloned()
  }

  #[test]
  fn test_defaults() {
    let config = Config::from_lookup(lookup(&[]));
    assert_eq!(config, Config::default());
    assert_eq!(config.source, ProviderSource::Embedded);
    assert_eq!(config.log, "warn");
  }

  #[test]
  fn test_resource_dir_and_log() {
    let config = Config::from_lookup(lookup(&[
      (RESOURCE_DIR_VAR, "/srv/resources"),
      (LOG_VAR, "debug"),
    ]));

    assert_eq!(
      config.source,
      ProviderSource::Directory(PathBuf::from("/srv/resources"))
    );
    assert_eq!(config.log, "debug");
  }

  #[test]
  fn test_blank_values_are_ignored() {
    let config = Config::from_lookup(lookup(&[(RESOURCE_DIR_VAR, ""), (LOG_VAR, "  ")]));
    assert_eq!(config, Config::default());
  }

  #[test]
  fn test_values_are_trimmed() {
    let config = Config::from_lookup(lookup(&[
      (RESOURCE_DIR_VAR, " /srv/resources \n"),
      (LOG_VAR, " info "),
    ]));

    assert_eq!(
      config.source,
      ProviderSource::Directory(PathBuf::from("/srv/resources"))
    );
    assert_eq!(config.log, "info");
  }

  #[test]
  fn test_provider_selection() {
    assert!(Config::default().provider().exists("example.txt"));

    let dir = tempfile::tempdir().unwrap();
    let config = Config {
      source: ProviderSource::Directory(dir.path().to_path_buf()),
      ..Config::default()
    };
    assert!(!config.provider().exists("example.txt"));

    fs::write(dir.path().join("example.txt"), "from disk").unwrap();
    let provider = config.provider();
    assert_eq!(provider.read_as_string("example.txt").unwrap(), "from disk");
  }
}
