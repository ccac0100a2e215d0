//! Error type for `launchpad-spacex`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  /// The provider answered with anything other than `200 OK`.
  #[error("unexpected status from provider: {0}")]
  Status(reqwest::StatusCode),

  /// The response body was not a launches query result.
  #[error("failed to decode provider response: {0}")]
  Decode(#[source] reqwest::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
