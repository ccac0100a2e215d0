//! Handlers for `/launches` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/launches` | Optional `?page` and `?limit`; no limit returns everything |
//! | `GET`    | `/launches/:flight_number` | 404 if not found |
//! | `POST`   | `/launches` | Body: [`ScheduleBody`]; returns 201 + the scheduled launch |
//! | `DELETE` | `/launches/:flight_number` | Aborts; 404 if not found, 409 if already aborted |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::{DateTime, NaiveDate, Utc};
use launchpad_core::{
  CatalogService,
  launch::{FlightNumber, LaunchRecord, NewLaunch},
  store::{AbortOutcome, LaunchStore, Pagination},
};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// Paging parameters are taken as raw strings; anything that is not an
/// integer falls back to the default instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// 1-based page number. Defaults to the first page.
  pub page:  Option<String>,
  /// Page size. Missing, `0`, or non-numeric returns the whole catalog.
  pub limit: Option<String>,
}

fn lenient_int(raw: Option<&str>) -> Option<i64> {
  raw.and_then(|s| s.trim().parse().ok())
}

/// `GET /launches[?page=<n>][&limit=<n>]`
pub async fn list<S>(
  State(catalog): State<Arc<CatalogService<S>>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<LaunchRecord>>, ApiError>
where
  S: LaunchStore,
{
  let page = Pagination::from_page(
    lenient_int(params.page.as_deref()),
    lenient_int(params.limit.as_deref()),
  );
  let launches = catalog.list_launches(page).await?;
  Ok(Json(launches))
}

// ─── Path parameters ──────────────────────────────────────────────────────────

/// Parse a `:flight_number` path segment so a malformed one gets the same JSON
/// error body as every other 400.
fn parse_flight_number(raw: &str) -> Result<FlightNumber, ApiError> {
  raw
    .parse()
    .map_err(|_| ApiError::BadRequest(format!("invalid flight number: {raw:?}")))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /launches/:flight_number`
pub async fn get_one<S>(
  State(catalog): State<Arc<CatalogService<S>>>,
  Path(raw): Path<String>,
) -> Result<Json<LaunchRecord>, ApiError>
where
  S: LaunchStore,
{
  let flight_number = parse_flight_number(&raw)?;
  let launch = catalog
    .get_launch(flight_number)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("launch {flight_number} not found")))?;
  Ok(Json(launch))
}

// ─── Schedule ─────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /launches`.
///
/// Every field is required; they are optional here so a missing one becomes a
/// 400 with a readable message instead of an extractor rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleBody {
  pub mission:     Option<String>,
  pub rocket:      Option<String>,
  /// RFC 3339, `YYYY-MM-DD`, or `Month D, YYYY`.
  pub launch_date: Option<String>,
  pub target:      Option<String>,
}

impl TryFrom<ScheduleBody> for NewLaunch {
  type Error = ApiError;

  fn try_from(b: ScheduleBody) -> Result<Self, ApiError> {
    let (Some(mission), Some(rocket), Some(launch_date), Some(target)) =
      (b.mission, b.rocket, b.launch_date, b.target)
    else {
      return Err(ApiError::BadRequest("missing required launch property".into()));
    };

    let launch_date = parse_launch_date(&launch_date)
      .ok_or_else(|| ApiError::BadRequest(format!("invalid launch date: {launch_date:?}")))?;

    Ok(NewLaunch { mission, rocket, launch_date, target })
  }
}

/// Parse a launch date, treating bare calendar dates as midnight UTC.
fn parse_launch_date(s: &str) -> Option<DateTime<Utc>> {
  let s = s.trim();
  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return Some(dt.to_utc());
  }
  ["%Y-%m-%d", "%B %d, %Y"]
    .iter()
    .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    .and_then(|d| d.and_hms_opt(0, 0, 0))
    .map(|dt| dt.and_utc())
}

/// `POST /launches` — returns 201 + the stored [`LaunchRecord`].
pub async fn schedule<S>(
  State(catalog): State<Arc<CatalogService<S>>>,
  Json(body): Json<ScheduleBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: LaunchStore,
{
  let launch = catalog.schedule_launch(NewLaunch::try_from(body)?).await?;
  Ok((StatusCode::CREATED, Json(launch)))
}

// ─── Abort ────────────────────────────────────────────────────────────────────

/// `DELETE /launches/:flight_number` — body: `{"ok":true}` on success.
pub async fn abort<S>(
  State(catalog): State<Arc<CatalogService<S>>>,
  Path(raw): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
  S: LaunchStore,
{
  let flight_number = parse_flight_number(&raw)?;
  match catalog.abort_launch(flight_number).await? {
    AbortOutcome::Aborted => Ok(Json(json!({ "ok": true }))),
    AbortOutcome::NotFound => {
      Err(ApiError::NotFound(format!("launch {flight_number} not found")))
    }
    AbortOutcome::AlreadyAborted => Err(ApiError::Conflict(format!(
      "launch {flight_number} is already aborted"
    ))),
  }
}
