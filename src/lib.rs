mod config;
mod directory;
mod driver;
mod embedded;
mod error;

pub use config::{Config, LOG_VAR, ProviderSource, RESOURCE_DIR_VAR};
pub use directory::DirectoryProvider;
pub use driver::{EXAMPLE_KEY, Outcome, run, run_key};
pub use embedded::{EMBEDDED, StaticProvider};
pub use error::{ResourceError, RunError};

/// A source of named text resources.
///
/// `exists` never fails: anything that prevents a lookup answers `false`.
/// `read_as_string` may still fail after a positive `exists`, since the
/// underlying storage can change between the two calls.
pub trait ResourceProvider: Send + Sync {
  fn exists(&self, key: &str) -> bool;

  fn read_as_string(&self, key: &str) -> Result<String, ResourceError>;
}

impl<P: ResourceProvider + ?Sized> ResourceProvider for &P {
  fn exists(&self, key: &str) -> bool {
    (**self).exists(key)
  }

  fn read_as_string(&self, key: &str) -> Result<String, ResourceError> {
    (**self).read_as_string(key)
  }
}

impl<P: ResourceProvider + ?Sized> ResourceProvider for Box<P> {
  fn exists(&self, key: &str) -> bool {
    (**self).exists(key)
  }

  fn read_as_string(&self, key: &str) -> Result<String, ResourceError> {
    (**self).read_as_string(key)
  }
}
