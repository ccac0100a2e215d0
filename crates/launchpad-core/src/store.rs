//! The `LaunchStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g.
//! `launchpad-store-sqlite`). The catalog service and the HTTP layer depend on
//! this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  launch::{FlightNumber, LaunchRecord},
  planet::Planet,
};

// ─── Query types ─────────────────────────────────────────────────────────────

/// Parameters for [`LaunchStore::find_launch`]. A record matches when every
/// field that is set compares equal.
#[derive(Debug, Clone, Default)]
pub struct LaunchFilter {
  pub flight_number: Option<FlightNumber>,
  pub rocket:        Option<String>,
  pub mission:       Option<String>,
}

impl LaunchFilter {
  pub fn flight_number(flight_number: FlightNumber) -> Self {
    Self { flight_number: Some(flight_number), ..Self::default() }
  }

  pub fn matches(&self, launch: &LaunchRecord) -> bool {
    self.flight_number.is_none_or(|n| n == launch.flight_number)
      && self.rocket.as_deref().is_none_or(|r| r == launch.rocket)
      && self.mission.as_deref().is_none_or(|m| m == launch.mission)
  }
}

/// A window over the catalog ordered by flight number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
  pub skip:  u64,
  /// Maximum number of records to return; `0` means unlimited.
  pub limit: u64,
}

impl Pagination {
  pub const DEFAULT_PAGE: u64 = 1;
  pub const DEFAULT_LIMIT: u64 = 0;

  /// Derive a window from 1-based page parameters.
  ///
  /// Negative values are taken by magnitude; a missing or zero page means the
  /// first page and a missing or zero limit means everything.
  pub fn from_page(page: Option<i64>, limit: Option<i64>) -> Self {
    let page = page
      .map(i64::unsigned_abs)
      .filter(|p| *p != 0)
      .unwrap_or(Self::DEFAULT_PAGE);
    let limit = limit
      .map(i64::unsigned_abs)
      .filter(|l| *l != 0)
      .unwrap_or(Self::DEFAULT_LIMIT);

    Self { skip: (page - 1).saturating_mul(limit), limit }
  }

  pub fn is_unbounded(&self) -> bool { self.limit == 0 }
}

// ─── Write outcomes ──────────────────────────────────────────────────────────

/// What [`LaunchStore::save_launch`] did, decided by whether a record with the
/// same flight number already existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
  /// No record had this flight number; a new one was created.
  Inserted,
  /// Every field of the existing record was overwritten.
  Replaced,
}

/// The result of [`LaunchStore::abort_launch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortOutcome {
  NotFound,
  /// The record was already neither upcoming nor successful; nothing changed.
  AlreadyAborted,
  Aborted,
}

impl AbortOutcome {
  /// True only if exactly one record was modified.
  pub fn is_aborted(&self) -> bool { matches!(self, Self::Aborted) }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a launch catalog backend.
///
/// Each method is expected to be atomic on its own. Composite sequences (read
/// the highest flight number, then save) are serialized by
/// [`crate::CatalogService`], not by the store.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait LaunchStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Launches ──────────────────────────────────────────────────────────

  /// Return the first launch matching `filter`, if any.
  fn find_launch<'a>(
    &'a self,
    filter: &'a LaunchFilter,
  ) -> impl Future<Output = Result<Option<LaunchRecord>, Self::Error>> + Send + 'a;

  /// The highest flight number in the catalog, or `None` if it is empty.
  fn latest_flight_number(
    &self,
  ) -> impl Future<Output = Result<Option<FlightNumber>, Self::Error>> + Send + '_;

  /// Launches in ascending flight-number order, windowed by `page`.
  fn list_launches(
    &self,
    page: Pagination,
  ) -> impl Future<Output = Result<Vec<LaunchRecord>, Self::Error>> + Send + '_;

  /// Insert `launch`, or fully replace the record with the same flight
  /// number. No field of the previous record survives a replace.
  fn save_launch<'a>(
    &'a self,
    launch: &'a LaunchRecord,
  ) -> impl Future<Output = Result<SaveOutcome, Self::Error>> + Send + 'a;

  /// Set `upcoming` and `success` to false on one record without touching
  /// any other field.
  fn abort_launch(
    &self,
    flight_number: FlightNumber,
  ) -> impl Future<Output = Result<AbortOutcome, Self::Error>> + Send + '_;

  // ── Planets (read-only) ───────────────────────────────────────────────

  /// Look up a planet by its kepler name.
  fn find_planet<'a>(
    &'a self,
    kepler_name: &'a str,
  ) -> impl Future<Output = Result<Option<Planet>, Self::Error>> + Send + 'a;
}
