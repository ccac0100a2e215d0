//! [`CatalogService`] — the single owner of reads and writes to the launch
//! catalog.

use tokio::sync::Mutex;

use crate::{
  Error, Result,
  launch::{FlightNumber, LaunchRecord, NewLaunch},
  store::{AbortOutcome, LaunchFilter, LaunchStore, Pagination, SaveOutcome},
};

/// Flight number the first scheduled launch builds on when the catalog is
/// empty.
pub const BASELINE_FLIGHT_NUMBER: FlightNumber = 100;

/// Customers recorded on every user-scheduled launch.
pub const DEFAULT_CUSTOMERS: [&str; 2] = ["Zero to Mastery", "NASA"];

/// Mediates all access to the launch catalog held by `S`.
///
/// Flight-number issuance (read the highest number, add one, save) runs under
/// an async mutex, so two schedule calls on the same service never receive
/// the same number. The bulk import takes the same lock.
pub struct CatalogService<S> {
  store:                 S,
  pub(crate) issue_lock: Mutex<()>,
}

impl<S: LaunchStore> CatalogService<S> {
  pub fn new(store: S) -> Self { Self { store, issue_lock: Mutex::new(()) } }

  pub fn store(&self) -> &S { &self.store }

  // ── Reads ─────────────────────────────────────────────────────────────

  pub async fn get_launch(
    &self,
    flight_number: FlightNumber,
  ) -> Result<Option<LaunchRecord>> {
    self
      .store
      .find_launch(&LaunchFilter::flight_number(flight_number))
      .await
      .map_err(Error::store)
  }

  pub async fn launch_exists(&self, flight_number: FlightNumber) -> Result<bool> {
    Ok(self.get_launch(flight_number).await?.is_some())
  }

  /// Launches ordered by ascending flight number. An empty window yields an
  /// empty list.
  pub async fn list_launches(&self, page: Pagination) -> Result<Vec<LaunchRecord>> {
    self.store.list_launches(page).await.map_err(Error::store)
  }

  // ── Writes ────────────────────────────────────────────────────────────

  /// Insert or fully replace `launch`, keyed by its flight number.
  pub async fn save_launch(&self, launch: &LaunchRecord) -> Result<SaveOutcome> {
    let outcome = self.store.save_launch(launch).await.map_err(Error::store)?;
    tracing::debug!(
      flight_number = launch.flight_number,
      ?outcome,
      "saved launch"
    );
    Ok(outcome)
  }

  /// Validate `input`, assign it the next flight number and persist it.
  ///
  /// Fails with [`Error::UnknownTarget`] without writing anything if no planet
  /// has the requested kepler name.
  pub async fn schedule_launch(&self, input: NewLaunch) -> Result<LaunchRecord> {
    validate(&input)?;

    let planet = self
      .store
      .find_planet(&input.target)
      .await
      .map_err(Error::store)?;
    if planet.is_none() {
      return Err(Error::UnknownTarget(input.target));
    }

    let _issuing = self.issue_lock.lock().await;

    let launch = LaunchRecord {
      flight_number: self.next_flight_number().await?,
      mission:       input.mission,
      rocket:        input.rocket,
      launch_date:   input.launch_date,
      target:        Some(input.target),
      customers:     DEFAULT_CUSTOMERS.iter().map(|c| c.to_string()).collect(),
      upcoming:      true,
      success:       true,
    };

    self.save_launch(&launch).await?;
    tracing::info!(
      flight_number = launch.flight_number,
      mission = %launch.mission,
      "scheduled launch"
    );
    Ok(launch)
  }

  /// Mark a launch as no longer upcoming and unsuccessful.
  pub async fn abort_launch(&self, flight_number: FlightNumber) -> Result<AbortOutcome> {
    let outcome = self
      .store
      .abort_launch(flight_number)
      .await
      .map_err(Error::store)?;
    tracing::info!(flight_number, ?outcome, "abort requested");
    Ok(outcome)
  }

  /// Must be called with `issue_lock` held.
  async fn next_flight_number(&self) -> Result<FlightNumber> {
    let latest = self
      .store
      .latest_flight_number()
      .await
      .map_err(Error::store)?
      .unwrap_or(BASELINE_FLIGHT_NUMBER);

    latest
      .checked_add(1)
      .ok_or(Error::FlightNumbersExhausted(latest))
  }
}

fn validate(input: &NewLaunch) -> Result<()> {
  for (field, value) in [
    ("mission", &input.mission),
    ("rocket", &input.rocket),
    ("target", &input.target),
  ] {
    if value.trim().is_empty() {
      return Err(Error::InvalidLaunch(format!("missing {field}")));
    }
  }
  Ok(())
}
