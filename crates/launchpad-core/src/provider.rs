//! The `LaunchProvider` trait and the provider's document shapes.
//!
//! A provider hands back every launch it knows about in one batch. The shapes
//! below follow the SpaceX v4 launches query with `rocket` and `payloads`
//! populated; fields the catalog does not use are ignored on decode.

use std::future::Future;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::launch::FlightNumber;

/// One launch document as returned by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteLaunch {
  pub flight_number: FlightNumber,
  pub name:          String,
  /// Launch time in the launch site's local offset.
  pub date_local:    DateTime<FixedOffset>,
  pub upcoming:      bool,
  /// `null` until the launch has flown.
  #[serde(default)]
  pub success:       Option<bool>,
  pub rocket:        RemoteRocket,
  #[serde(default)]
  pub payloads:      Vec<RemotePayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteRocket {
  pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemotePayload {
  #[serde(default)]
  pub customers: Vec<String>,
}

/// A source of launch documents for the one-time catalog import.
pub trait LaunchProvider: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fetch every launch in one unpaginated batch.
  fn fetch_launches(
    &self,
  ) -> impl Future<Output = Result<Vec<RemoteLaunch>, Self::Error>> + Send + '_;
}
