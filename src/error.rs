use crate::scene::SceneOperation;
use std::error::Error as StdError;

#[derive(thiserror::Error, Debug)]
pub enum AnimationError {
  #[error("scene operation `{operation}` failed: {source}")]
  ExternalService {
    operation: SceneOperation,
    #[source]
    source: Box<dyn StdError + Send + Sync>,
  },

  #[error("invalid configuration: {0}")]
  InvalidConfiguration(String),

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("config parse error: {0}")]
  ConfigParse(String),

  #[error("unsupported config format: {0}")]
  UnsupportedConfigFormat(String),
}

impl AnimationError {
  /// Adapter for `map_err` on scene calls.
  pub fn external<E>(operation: SceneOperation) -> impl FnOnce(E) -> Self
  where
    E: StdError + Send + Sync + 'static,
  {
    move |err| AnimationError::ExternalService {
      operation,
      source: Box::new(err),
    }
  }

  pub fn invalid(message: impl Into<String>) -> Self {
    AnimationError::InvalidConfiguration(message.into())
  }
}
