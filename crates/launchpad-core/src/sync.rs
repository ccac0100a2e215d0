//! One-time import of provider data into the catalog.
//!
//! Whether the import already ran is decided by looking for a single well
//! known historical launch. Every imported record goes through the same
//! upsert as scheduled launches, so re-running an interrupted import only
//! rewrites what it already wrote.

use crate::{
  CatalogService, Error, Result,
  launch::{FlightNumber, LaunchRecord},
  provider::{LaunchProvider, RemoteLaunch},
  store::{LaunchFilter, LaunchStore, SaveOutcome},
};

const SENTINEL_FLIGHT_NUMBER: FlightNumber = 1;
const SENTINEL_ROCKET: &str = "Falcon 1";
const SENTINEL_MISSION: &str = "FalconSat";

/// What [`CatalogService::ensure_catalog_loaded`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncReport {
  /// The sentinel launch was present; the provider was not contacted.
  AlreadyLoaded,
  Imported { inserted: usize, replaced: usize },
}

fn sentinel() -> LaunchFilter {
  LaunchFilter {
    flight_number: Some(SENTINEL_FLIGHT_NUMBER),
    rocket:        Some(SENTINEL_ROCKET.to_owned()),
    mission:       Some(SENTINEL_MISSION.to_owned()),
  }
}

/// Map a provider document onto the catalog's record shape.
///
/// Customers from every payload are concatenated in payload order; duplicates
/// are kept. A launch the provider has no outcome for yet counts as
/// successful.
pub(crate) fn normalize(remote: RemoteLaunch) -> LaunchRecord {
  let customers = remote
    .payloads
    .into_iter()
    .flat_map(|payload| payload.customers)
    .collect();

  LaunchRecord {
    flight_number: remote.flight_number,
    mission: remote.name,
    rocket: remote.rocket.name,
    launch_date: remote.date_local.to_utc(),
    target: None,
    customers,
    upcoming: remote.upcoming,
    success: remote.success.unwrap_or(true),
  }
}

impl<S: LaunchStore> CatalogService<S> {
  /// Import the provider's launches unless that has already happened.
  ///
  /// Safe to call on every start. On failure, records saved before the error
  /// stay in the catalog.
  pub async fn ensure_catalog_loaded<P>(&self, provider: &P) -> Result<SyncReport>
  where
    P: LaunchProvider,
  {
    let found = self
      .store()
      .find_launch(&sentinel())
      .await
      .map_err(Error::store)?;

    if found.is_some() {
      tracing::info!("launch data already loaded");
      return Ok(SyncReport::AlreadyLoaded);
    }

    self.import_launches(provider).await
  }

  async fn import_launches<P>(&self, provider: &P) -> Result<SyncReport>
  where
    P: LaunchProvider,
  {
    tracing::info!("downloading launch data");

    let docs = provider.fetch_launches().await.map_err(|e| Error::Sync {
      message: "launch data download failed".into(),
      source:  Some(Box::new(e)),
    })?;

    if docs.is_empty() {
      return Err(Error::Sync {
        message: "provider returned no launches".into(),
        source:  None,
      });
    }

    let _issuing = self.issue_lock.lock().await;

    let (mut inserted, mut replaced) = (0, 0);
    for doc in docs {
      match self.save_launch(&normalize(doc)).await? {
        SaveOutcome::Inserted => inserted += 1,
        SaveOutcome::Replaced => replaced += 1,
      }
    }

    tracing::info!(inserted, replaced, "launch data imported");
    Ok(SyncReport::Imported { inserted, replaced })
  }
}
