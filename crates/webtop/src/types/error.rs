/*! Error types for webtop.

Window operations never fail; errors only come from building a manager. */

/// Errors that can occur while configuring a window manager.
#[derive(Debug, thiserror::Error)]
pub enum WebtopError {
  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),

  #[error("Failed to parse configuration: {0}")]
  ConfigParse(#[from] serde_json::Error),
}

/// Result type for webtop operations.
pub type WebtopResult<T> = Result<T, WebtopError>;
