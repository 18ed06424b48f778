use thiserror::Error;

/// Why the growth phase list could not be loaded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
  #[error("request to {url} failed: {reason}")]
  Request { url: String, reason: String },

  #[error("{url} answered with HTTP {status}")]
  Status { url: String, status: u16 },

  #[error("could not decode response from {url}: {reason}")]
  Decode { url: String, reason: String }
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("invalid page config: {0}")]
  Parse(#[from] toml::de::Error)
}
