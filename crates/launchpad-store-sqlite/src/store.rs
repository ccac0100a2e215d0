//! [`SqliteStore`] — the SQLite implementation of [`LaunchStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use launchpad_core::{
  launch::{FlightNumber, LaunchRecord},
  planet::Planet,
  store::{AbortOutcome, LaunchFilter, LaunchStore, Pagination, SaveOutcome},
};

use crate::{
  Error, Result,
  encode::{LAUNCH_COLUMNS, LaunchParams, RawLaunch},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A launch catalog backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Every call
/// runs on the connection's own thread, one at a time.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Add a planet to the reference table. Adding a known planet is a no-op.
  ///
  /// The catalog never calls this; it exists for whatever loads reference
  /// data.
  pub async fn insert_planet(&self, planet: &Planet) -> Result<()> {
    let kepler_name = planet.kepler_name.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT OR IGNORE INTO planets (kepler_name) VALUES (?1)",
          rusqlite::params![kepler_name],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── LaunchStore impl ────────────────────────────────────────────────────────

impl LaunchStore for SqliteStore {
  type Error = Error;

  // ── Launches ──────────────────────────────────────────────────────────────

  async fn find_launch(&self, filter: &LaunchFilter) -> Result<Option<LaunchRecord>> {
    let flight_number = filter.flight_number;
    let rocket        = filter.rocket.clone();
    let mission       = filter.mission.clone();

    let raw: Option<RawLaunch> = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {LAUNCH_COLUMNS} FROM launches
           WHERE (?1 IS NULL OR flight_number = ?1)
             AND (?2 IS NULL OR rocket = ?2)
             AND (?3 IS NULL OR mission = ?3)
           ORDER BY flight_number
           LIMIT 1"
        );
        Ok(conn
          .query_row(
            &sql,
            rusqlite::params![flight_number, rocket, mission],
            RawLaunch::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawLaunch::into_launch).transpose()
  }

  async fn latest_flight_number(&self) -> Result<Option<FlightNumber>> {
    let latest = self
      .conn
      .call(|conn| {
        Ok(conn.query_row(
          "SELECT MAX(flight_number) FROM launches",
          [],
          |row| row.get::<_, Option<FlightNumber>>(0),
        )?)
      })
      .await?;
    Ok(latest)
  }

  async fn list_launches(&self, page: Pagination) -> Result<Vec<LaunchRecord>> {
    // SQLite treats a negative LIMIT as "no limit".
    let limit_val = if page.is_unbounded() {
      -1
    } else {
      i64::try_from(page.limit).unwrap_or(i64::MAX)
    };
    let offset_val = i64::try_from(page.skip).unwrap_or(i64::MAX);

    let raws: Vec<RawLaunch> = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {LAUNCH_COLUMNS} FROM launches
           ORDER BY flight_number ASC
           LIMIT ?1 OFFSET ?2"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params![limit_val, offset_val], RawLaunch::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawLaunch::into_launch).collect()
  }

  async fn save_launch(&self, launch: &LaunchRecord) -> Result<SaveOutcome> {
    let p = LaunchParams::encode(launch)?;

    let outcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let exists = tx
          .query_row(
            "SELECT 1 FROM launches WHERE flight_number = ?1",
            rusqlite::params![p.flight_number],
            |_| Ok(()),
          )
          .optional()?
          .is_some();

        let outcome = if exists {
          // Every column is rewritten so nothing from the old row survives.
          tx.execute(
            "UPDATE launches SET
               mission = ?2, rocket = ?3, launch_date = ?4, target = ?5,
               customers = ?6, upcoming = ?7, success = ?8
             WHERE flight_number = ?1",
            rusqlite::params![
              p.flight_number,
              p.mission,
              p.rocket,
              p.launch_date,
              p.target,
              p.customers,
              p.upcoming,
              p.success,
            ],
          )?;
          SaveOutcome::Replaced
        } else {
          tx.execute(
            "INSERT INTO launches (
               flight_number, mission, rocket, launch_date, target,
               customers, upcoming, success
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
              p.flight_number,
              p.mission,
              p.rocket,
              p.launch_date,
              p.target,
              p.customers,
              p.upcoming,
              p.success,
            ],
          )?;
          SaveOutcome::Inserted
        };

        tx.commit()?;
        Ok(outcome)
      })
      .await?;

    Ok(outcome)
  }

  async fn abort_launch(&self, flight_number: FlightNumber) -> Result<AbortOutcome> {
    let outcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let changed = tx.execute(
          "UPDATE launches SET upcoming = 0, success = 0
           WHERE flight_number = ?1 AND (upcoming = 1 OR success = 1)",
          rusqlite::params![flight_number],
        )?;

        let outcome = if changed == 1 {
          AbortOutcome::Aborted
        } else {
          let exists = tx
            .query_row(
              "SELECT 1 FROM launches WHERE flight_number = ?1",
              rusqlite::params![flight_number],
              |_| Ok(()),
            )
            .optional()?
            .is_some();
          if exists { AbortOutcome::AlreadyAborted } else { AbortOutcome::NotFound }
        };

        tx.commit()?;
        Ok(outcome)
      })
      .await?;

    Ok(outcome)
  }

  // ── Planets ───────────────────────────────────────────────────────────────

  async fn find_planet(&self, kepler_name: &str) -> Result<Option<Planet>> {
    let kepler_name = kepler_name.to_owned();

    let found: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT kepler_name FROM planets WHERE kepler_name = ?1",
            rusqlite::params![kepler_name],
            |row| row.get(0),
          )
          .optional()?)
      })
      .await?;

    Ok(found.map(|kepler_name| Planet { kepler_name }))
  }
}
