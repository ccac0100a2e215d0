//! Error types for `launchpad-core`.

use thiserror::Error;

/// A boxed error from a storage backend or data provider.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
  /// The one-time import from the data provider failed.
  #[error("launch data sync failed: {message}")]
  Sync {
    message: String,
    #[source]
    source:  Option<BoxError>,
  },

  #[error("no planet found with kepler name {0:?}")]
  UnknownTarget(String),

  #[error("invalid launch: {0}")]
  InvalidLaunch(String),

  /// The catalog already holds the largest representable flight number.
  #[error("no flight numbers left after {0}")]
  FlightNumbersExhausted(crate::launch::FlightNumber),

  #[error("store error: {0}")]
  Store(#[source] BoxError),
}

impl Error {
  pub(crate) fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
