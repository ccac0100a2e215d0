//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::{TimeZone, Utc};
use launchpad_core::{
  launch::{FlightNumber, LaunchRecord},
  planet::Planet,
  store::{AbortOutcome, LaunchFilter, LaunchStore, Pagination, SaveOutcome},
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn launch(flight_number: FlightNumber) -> LaunchRecord {
  LaunchRecord {
    flight_number,
    mission: format!("Mission {flight_number}"),
    rocket: "Falcon 9".into(),
    launch_date: Utc.with_ymd_and_hms(2020, 5, 30, 19, 22, 0).unwrap(),
    target: None,
    customers: vec!["NASA".into(), "SpaceX".into()],
    upcoming: true,
    success: true,
  }
}

// ─── Save ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn save_inserts_and_reads_back() {
  let s = store().await;
  let mut input = launch(7);
  input.target = Some("Kepler-62 f".into());

  assert_eq!(s.save_launch(&input).await.unwrap(), SaveOutcome::Inserted);

  let fetched = s
    .find_launch(&LaunchFilter::flight_number(7))
    .await
    .unwrap()
    .expect("saved launch");
  assert_eq!(fetched, input);
}

#[tokio::test]
async fn save_existing_replaces_every_field() {
  let s = store().await;
  let mut scheduled = launch(101);
  scheduled.target = Some("Kepler-1652 b".into());
  scheduled.customers = vec!["Zero to Mastery".into(), "NASA".into()];
  s.save_launch(&scheduled).await.unwrap();

  let replacement = LaunchRecord {
    mission: "Renamed".into(),
    customers: vec![],
    upcoming: false,
    ..launch(101)
  };
  assert_eq!(s.save_launch(&replacement).await.unwrap(), SaveOutcome::Replaced);

  let stored = s
    .find_launch(&LaunchFilter::flight_number(101))
    .await
    .unwrap()
    .unwrap();
  assert_eq!(stored, replacement);
  assert_eq!(stored.target, None);
  assert!(stored.customers.is_empty());

  let all = s.list_launches(Pagination::default()).await.unwrap();
  assert_eq!(all.len(), 1);
}

// ─── Find ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn find_matches_all_filter_fields() {
  let s = store().await;
  let mut falconsat = launch(1);
  falconsat.rocket = "Falcon 1".into();
  falconsat.mission = "FalconSat".into();
  s.save_launch(&falconsat).await.unwrap();

  let sentinel = LaunchFilter {
    flight_number: Some(1),
    rocket:        Some("Falcon 1".into()),
    mission:       Some("FalconSat".into()),
  };
  assert!(s.find_launch(&sentinel).await.unwrap().is_some());

  let wrong_rocket = LaunchFilter {
    rocket: Some("Falcon 9".into()),
    ..sentinel.clone()
  };
  assert!(s.find_launch(&wrong_rocket).await.unwrap().is_none());

  let by_mission = LaunchFilter {
    mission: Some("FalconSat".into()),
    ..LaunchFilter::default()
  };
  assert_eq!(
    s.find_launch(&by_mission).await.unwrap().map(|l| l.flight_number),
    Some(1)
  );
}

#[tokio::test]
async fn find_missing_returns_none() {
  let s = store().await;
  let result = s.find_launch(&LaunchFilter::flight_number(42)).await.unwrap();
  assert!(result.is_none());
}

// ─── Latest flight number ────────────────────────────────────────────────────

#[tokio::test]
async fn latest_flight_number_tracks_maximum() {
  let s = store().await;
  assert_eq!(s.latest_flight_number().await.unwrap(), None);

  for n in [3, 100, 12] {
    s.save_launch(&launch(n)).await.unwrap();
  }
  assert_eq!(s.latest_flight_number().await.unwrap(), Some(100));
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_orders_by_flight_number_and_pages() {
  let s = store().await;
  for n in [4, 2, 5, 1, 3] {
    s.save_launch(&launch(n)).await.unwrap();
  }

  let all = s.list_launches(Pagination::default()).await.unwrap();
  let numbers: Vec<_> = all.iter().map(|l| l.flight_number).collect();
  assert_eq!(numbers, [1, 2, 3, 4, 5]);

  let page = s
    .list_launches(Pagination { skip: 2, limit: 2 })
    .await
    .unwrap();
  let numbers: Vec<_> = page.iter().map(|l| l.flight_number).collect();
  assert_eq!(numbers, [3, 4]);

  let tail = s
    .list_launches(Pagination { skip: 3, limit: 0 })
    .await
    .unwrap();
  assert_eq!(tail.len(), 2);

  let past_end = s
    .list_launches(Pagination { skip: 5, limit: 10 })
    .await
    .unwrap();
  assert!(past_end.is_empty());
}

// ─── Abort ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn abort_updates_only_outcome_flags() {
  let s = store().await;
  let mut scheduled = launch(101);
  scheduled.target = Some("Kepler-442 b".into());
  s.save_launch(&scheduled).await.unwrap();

  assert_eq!(s.abort_launch(101).await.unwrap(), AbortOutcome::Aborted);

  let stored = s
    .find_launch(&LaunchFilter::flight_number(101))
    .await
    .unwrap()
    .unwrap();
  assert!(!stored.upcoming);
  assert!(!stored.success);
  assert_eq!(stored.target.as_deref(), Some("Kepler-442 b"));
  assert_eq!(stored.customers, scheduled.customers);

  assert_eq!(s.abort_launch(101).await.unwrap(), AbortOutcome::AlreadyAborted);
}

#[tokio::test]
async fn abort_missing_is_not_found() {
  let s = store().await;
  s.save_launch(&launch(1)).await.unwrap();

  assert_eq!(s.abort_launch(2).await.unwrap(), AbortOutcome::NotFound);

  let untouched = s
    .find_launch(&LaunchFilter::flight_number(1))
    .await
    .unwrap()
    .unwrap();
  assert!(untouched.upcoming);
  assert!(untouched.success);
}

// ─── Planets ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn planets_are_found_by_kepler_name() {
  let s = store().await;
  s.insert_planet(&Planet::new("Kepler-442 b")).await.unwrap();
  s.insert_planet(&Planet::new("Kepler-442 b")).await.unwrap();

  assert_eq!(
    s.find_planet("Kepler-442 b").await.unwrap(),
    Some(Planet::new("Kepler-442 b"))
  );
  assert!(s.find_planet("Nonexistent-1").await.unwrap().is_none());
}

// ─── Persistence ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn reopening_a_file_keeps_launches() {
  let dir = std::env::temp_dir().join(format!(
    "launchpad-store-test-{}-{}",
    std::process::id(),
    Utc::now().timestamp_nanos_opt().unwrap_or_default()
  ));
  std::fs::create_dir_all(&dir).unwrap();
  let path = dir.join("launches.db");

  {
    let s = SqliteStore::open(&path).await.unwrap();
    s.save_launch(&launch(9)).await.unwrap();
  }

  let reopened = SqliteStore::open(&path).await.unwrap();
  assert_eq!(reopened.latest_flight_number().await.unwrap(), Some(9));

  std::fs::remove_dir_all(&dir).ok();
}
