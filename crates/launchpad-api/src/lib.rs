//! JSON REST API for the Launchpad launch catalog.
//!
//! Exposes an axum [`Router`] backed by a [`CatalogService`] over any
//! [`LaunchStore`]. TLS and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/v1", launchpad_api::api_router(catalog.clone()))
//! ```

pub mod error;
pub mod launches;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use launchpad_core::{CatalogService, store::LaunchStore};
use serde::Deserialize;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `launchpad.toml` and
/// `LAUNCHPAD_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:                  String,
  pub port:                  u16,
  pub store_path:            PathBuf,
  /// The SpaceX `launches/query` endpoint used for the one-time import.
  pub provider_url:          String,
  pub provider_timeout_secs: u64,
  /// Kepler names added to the planet reference table at startup.
  #[serde(default)]
  pub planets:               Vec<String>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `catalog`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(catalog: Arc<CatalogService<S>>) -> Router<()>
where
  S: LaunchStore + 'static,
{
  Router::new()
    .route(
      "/launches",
      get(launches::list::<S>).post(launches::schedule::<S>),
    )
    .route(
      "/launches/{flight_number}",
      get(launches::get_one::<S>).delete(launches::abort::<S>),
    )
    .with_state(catalog)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
  };
  use chrono::{TimeZone, Utc};
  use launchpad_core::{launch::LaunchRecord, planet::Planet};
  use launchpad_store_sqlite::SqliteStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  async fn make_catalog() -> Arc<CatalogService<SqliteStore>> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    store.insert_planet(&Planet::new("Kepler-442 b")).await.unwrap();
    Arc::new(CatalogService::new(store))
  }

  async fn seed(catalog: &CatalogService<SqliteStore>, flight_numbers: &[u32]) {
    for &flight_number in flight_numbers {
      catalog
        .save_launch(&LaunchRecord {
          flight_number,
          mission: format!("Mission {flight_number}"),
          rocket: "Falcon 9".into(),
          launch_date: Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap(),
          target: None,
          customers: vec!["SpaceX".into()],
          upcoming: false,
          success: true,
        })
        .await
        .unwrap();
    }
  }

  async fn oneshot(
    catalog: Arc<CatalogService<SqliteStore>>,
    method:  &str,
    uri:     &str,
    body:    Option<Value>,
  ) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
      Some(v) => {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
        Body::from(v.to_string())
      }
      None => Body::empty(),
    };
    api_router(catalog)
      .oneshot(builder.body(body).unwrap())
      .await
      .unwrap()
  }

  async fn json_body(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  fn schedule_body() -> Value {
    json!({
      "mission": "Kepler Exploration X",
      "rocket": "Explorer IS1",
      "launchDate": "January 17, 2030",
      "target": "Kepler-442 b"
    })
  }

  // ── GET /launches ───────────────────────────────────────────────────────────

  #[tokio::test]
  async fn list_empty_catalog_returns_empty_array() {
    let resp = oneshot(make_catalog().await, "GET", "/launches", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, json!([]));
  }

  #[tokio::test]
  async fn list_pages_in_flight_number_order() {
    let catalog = make_catalog().await;
    seed(&catalog, &[5, 1, 3, 2, 4]).await;

    let resp = oneshot(catalog, "GET", "/launches?page=2&limit=2", None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    let numbers: Vec<_> = body
      .as_array()
      .unwrap()
      .iter()
      .map(|l| l["flightNumber"].as_u64().unwrap())
      .collect();
    assert_eq!(numbers, [3, 4]);
  }

  #[tokio::test]
  async fn list_with_non_numeric_paging_returns_full_catalog() {
    let catalog = make_catalog().await;
    seed(&catalog, &[3, 1, 2]).await;

    let resp = oneshot(catalog.clone(), "GET", "/launches?page=abc&limit=xyz", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    let numbers: Vec<_> = body
      .as_array()
      .unwrap()
      .iter()
      .map(|l| l["flightNumber"].as_u64().unwrap())
      .collect();
    assert_eq!(numbers, [1, 2, 3]);

    // A bad page with a usable limit falls back to the first page.
    let resp = oneshot(catalog, "GET", "/launches?page=abc&limit=2", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await.as_array().unwrap().len(), 2);
  }

  // ── POST /launches ──────────────────────────────────────────────────────────

  #[tokio::test]
  async fn schedule_returns_201_with_assigned_fields() {
    let catalog = make_catalog().await;
    seed(&catalog, &[187]).await;

    let resp = oneshot(catalog.clone(), "POST", "/launches", Some(schedule_body())).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = json_body(resp).await;
    assert_eq!(body["flightNumber"], 188);
    assert_eq!(body["target"], "Kepler-442 b");
    assert_eq!(body["customers"], json!(["Zero to Mastery", "NASA"]));
    assert_eq!(body["upcoming"], true);
    assert_eq!(body["success"], true);
    assert_eq!(body["launchDate"], "2030-01-17T00:00:00Z");

    let get = oneshot(catalog, "GET", "/launches/188", None).await;
    assert_eq!(get.status(), StatusCode::OK);
  }

  #[tokio::test]
  async fn schedule_unknown_target_returns_400() {
    let catalog = make_catalog().await;
    let mut body = schedule_body();
    body["target"] = json!("Nonexistent-1");

    let resp = oneshot(catalog.clone(), "POST", "/launches", Some(body)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let err = json_body(resp).await;
    assert!(err["error"].as_str().unwrap().contains("Nonexistent-1"), "{err}");

    let list = oneshot(catalog, "GET", "/launches", None).await;
    assert_eq!(json_body(list).await, json!([]));
  }

  #[tokio::test]
  async fn schedule_missing_property_returns_400() {
    let mut body = schedule_body();
    body.as_object_mut().unwrap().remove("rocket");

    let resp = oneshot(make_catalog().await, "POST", "/launches", Some(body)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn schedule_invalid_date_returns_400() {
    let mut body = schedule_body();
    body["launchDate"] = json!("someday");

    let resp = oneshot(make_catalog().await, "POST", "/launches", Some(body)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  // ── GET /launches/:id ───────────────────────────────────────────────────────

  #[tokio::test]
  async fn get_nonexistent_returns_404() {
    let resp = oneshot(make_catalog().await, "GET", "/launches/999", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn malformed_flight_number_returns_json_400() {
    let catalog = make_catalog().await;

    for method in ["GET", "DELETE"] {
      let resp = oneshot(catalog.clone(), method, "/launches/abc", None).await;
      assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{method}");
      let err = json_body(resp).await;
      assert!(err["error"].as_str().unwrap().contains("abc"), "{err}");
    }
  }

  // ── DELETE /launches/:id ────────────────────────────────────────────────────

  #[tokio::test]
  async fn abort_then_abort_again() {
    let catalog = make_catalog().await;
    let created = oneshot(catalog.clone(), "POST", "/launches", Some(schedule_body())).await;
    let flight_number = json_body(created).await["flightNumber"].as_u64().unwrap();
    let uri = format!("/launches/{flight_number}");

    let first = oneshot(catalog.clone(), "DELETE", &uri, None).await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(json_body(first).await, json!({ "ok": true }));

    let stored = json_body(oneshot(catalog.clone(), "GET", &uri, None).await).await;
    assert_eq!(stored["upcoming"], false);
    assert_eq!(stored["success"], false);

    let second = oneshot(catalog, "DELETE", &uri, None).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
  }

  #[tokio::test]
  async fn abort_nonexistent_returns_404() {
    let resp = oneshot(make_catalog().await, "DELETE", "/launches/4242", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }
}
