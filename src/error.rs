use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResourceError {
  #[error("Resource not found: {key}")]
  NotFound { key: String },

  #[error("Resource key is empty")]
  EmptyKey,

  #[error("Resource key must be relative: {key}")]
  AbsoluteKey { key: String },

  #[error("Resource key can not escape the resource root: {key}")]
  EscapesRoot { key: String },

  #[error("Resource is not valid UTF-8: {key}")]
  InvalidUtf8 { key: String },

  #[error("Failed to read resource {key}")]
  Io {
    key: String,
    #[source]
    source: io::Error,
  },
}

impl ResourceError {
  pub fn not_found(key: impl Into<String>) -> Self {
    Self::NotFound { key: key.into() }
  }
}

#[derive(Error, Debug)]
pub enum RunError {
  #[error(transparent)]
  Read(#[from] ResourceError),

  #[error("Failed to write resource output")]
  Write(#[source] io::Error),
}
