//! SQL schema for the Launchpad SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per launch, imported or scheduled. Rows are never deleted.
CREATE TABLE IF NOT EXISTS launches (
    flight_number INTEGER PRIMARY KEY,
    mission       TEXT    NOT NULL,
    rocket        TEXT    NOT NULL,
    launch_date   TEXT    NOT NULL,              -- ISO 8601 UTC
    target        TEXT,                          -- kepler name; scheduled launches only
    customers     TEXT    NOT NULL DEFAULT '[]', -- JSON array of strings
    upcoming      INTEGER NOT NULL DEFAULT 1,
    success       INTEGER NOT NULL DEFAULT 1
);

-- Reference data; only read by the catalog.
CREATE TABLE IF NOT EXISTS planets (
    kepler_name TEXT PRIMARY KEY
);

CREATE INDEX IF NOT EXISTS launches_rocket_mission_idx ON launches(rocket, mission);

PRAGMA user_version = 1;
";
