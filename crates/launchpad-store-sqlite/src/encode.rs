//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings and customer lists as compact
//! JSON arrays.

use chrono::{DateTime, Utc};
use launchpad_core::launch::{FlightNumber, LaunchRecord};

use crate::{Error, Result};

/// Column list shared by every query that reads whole launch rows, in the
/// order [`RawLaunch::from_row`] expects.
pub const LAUNCH_COLUMNS: &str =
  "flight_number, mission, rocket, launch_date, target, customers, upcoming, success";

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Customers ───────────────────────────────────────────────────────────────

pub fn encode_customers(customers: &[String]) -> Result<String> {
  Ok(serde_json::to_string(customers)?)
}

pub fn decode_customers(s: &str) -> Result<Vec<String>> {
  Ok(serde_json::from_str(s)?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column values ready to bind into an INSERT or UPDATE of `launches`.
pub struct LaunchParams {
  pub flight_number: FlightNumber,
  pub mission:       String,
  pub rocket:        String,
  pub launch_date:   String,
  pub target:        Option<String>,
  pub customers:     String,
  pub upcoming:      bool,
  pub success:       bool,
}

impl LaunchParams {
  pub fn encode(launch: &LaunchRecord) -> Result<Self> {
    Ok(Self {
      flight_number: launch.flight_number,
      mission:       launch.mission.clone(),
      rocket:        launch.rocket.clone(),
      launch_date:   encode_dt(launch.launch_date),
      target:        launch.target.clone(),
      customers:     encode_customers(&launch.customers)?,
      upcoming:      launch.upcoming,
      success:       launch.success,
    })
  }
}

/// Raw values read directly from a `launches` row.
pub struct RawLaunch {
  pub flight_number: FlightNumber,
  pub mission:       String,
  pub rocket:        String,
  pub launch_date:   String,
  pub target:        Option<String>,
  pub customers:     String,
  pub upcoming:      bool,
  pub success:       bool,
}

impl RawLaunch {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      flight_number: row.get(0)?,
      mission:       row.get(1)?,
      rocket:        row.get(2)?,
      launch_date:   row.get(3)?,
      target:        row.get(4)?,
      customers:     row.get(5)?,
      upcoming:      row.get(6)?,
      success:       row.get(7)?,
    })
  }

  pub fn into_launch(self) -> Result<LaunchRecord> {
    Ok(LaunchRecord {
      flight_number: self.flight_number,
      mission:       self.mission,
      rocket:        self.rocket,
      launch_date:   decode_dt(&self.launch_date)?,
      target:        self.target,
      customers:     decode_customers(&self.customers)?,
      upcoming:      self.upcoming,
      success:       self.success,
    })
  }
}
