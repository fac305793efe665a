use std::{
  fs, io,
  path::{Path, PathBuf},
};

use tracing::debug;

use crate::{ResourceError, ResourceProvider};

/// Serves resources from regular files below a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryProvider {
  root: PathBuf,
}

impl DirectoryProvider {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Maps a key to a canonical path inside the root.
  pub fn resolve(&self, key: &str) -> Result<PathBuf, ResourceError> {
    if key.is_empty() {
      return Err(ResourceError::EmptyKey);
    }

    let relative = Path::new(key);
    if relative.is_absolute() || relative.has_root() {
      return Err(ResourceError::AbsoluteKey { key: key.to_owned() });
    }

    let root = self.root.canonicalize().map_err(|e| io_error(key, e))?;
    let path = root
      .join(relative)
      .canonicalize()
      .map_err(|e| io_error(key, e))?;

    // Symlinks and `..` are resolved by now
    if !path.starts_with(&root) {
      return Err(ResourceError::EscapesRoot { key: key.to_owned() });
    }

    Ok(path)
  }
}

fn io_error(key: &str, source: io::Error) -> ResourceError {
  match source.kind() {
    io::ErrorKind::NotFound => ResourceError::not_found(key),
    _ => ResourceError::Io {
      key: key.to_owned(),
      source,
    },
  }
}

impl ResourceProvider for DirectoryProvider {
  fn exists(&self, key: &str) -> bool {
    match self.resolve(key) {
      Ok(path) => {
        let found = path.is_file();
        debug!(key, found, root = %self.root.display(), "directory resource lookup");
        found
      }
      Err(e) => {
        debug!(key, error = %e, "directory resource lookup failed");
        false
      }
    }
  }

  fn read_as_string(&self, key: &str) -> Result<String, ResourceError> {
    let path = self.resolve(key)?;
    let bytes = fs::read(&path).map_err(|e| io_error(key, e))?;

    String::from_utf8(bytes).map_err(|_| ResourceError::InvalidUtf8 { key: key.to_owned() })
  }
}
