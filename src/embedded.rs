use tracing::debug;

use crate::{ResourceError, ResourceProvider};

/// Resources compiled into the binary.
pub static EMBEDDED: StaticProvider = StaticProvider::new(&[(
  "example.txt",
  include_str!("../resources/example.txt"),
)]);

/// A fixed table of `(key, content)` pairs, usually built with `include_str!`.
#[derive(Debug, Clone, Copy)]
pub struct StaticProvider {
  entries: &'static [(&'static str, &'static str)],
}

impl StaticProvider {
  pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
    Self { entries }
  }

  pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.entries.iter().map(|(key, _)| *key)
  }

  fn find(&self, key: &str) -> Option<&'static str> {
    self
      .entries
      .iter()
      .find(|(entry_key, _)| *entry_key == key)
      .map(|(_, content)| *content)
  }
}

impl ResourceProvider for StaticProvider {
  fn exists(&self, key: &str) -> bool {
    let found = self.find(key).is_some();
    debug!(key, found, "static resource lookup");
    found
  }

  fn read_as_string(&self, key: &str) -> Result<String, ResourceError> {
    self
      .find(key)
      .map(str::to_owned)
      .ok_or_else(|| ResourceError::not_found(key))
  }
}
