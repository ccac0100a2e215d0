//! Async HTTP client for the SpaceX launches query endpoint.

use std::time::Duration;

use launchpad_core::provider::{LaunchProvider, RemoteLaunch};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{Error, Result};

pub const DEFAULT_QUERY_URL: &str = "https://api.spacexdata.com/v4/launches/query";

/// Envelope of a `launches/query` response; the launches live under `docs`.
#[derive(Debug, Deserialize)]
struct QueryResponse {
  #[serde(default)]
  docs: Vec<RemoteLaunch>,
}

/// Request body asking for every launch in one page, with the rocket name and
/// payload customers populated inline.
fn query_body() -> serde_json::Value {
  serde_json::json!({
    "query": {},
    "options": {
      "pagination": false,
      "populate": [
        { "path": "rocket",   "select": { "name": 1 } },
        { "path": "payloads", "select": { "customers": 1 } }
      ]
    }
  })
}

/// Fetches launch documents from the SpaceX API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct SpacexClient {
  client: Client,
  url:    String,
}

impl SpacexClient {
  pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
    let client = Client::builder().timeout(timeout).build()?;
    Ok(Self { client, url: url.into() })
  }

  pub fn url(&self) -> &str { &self.url }

  async fn query_launches(&self) -> Result<Vec<RemoteLaunch>> {
    tracing::debug!(url = %self.url, "querying launches");

    let resp = self
      .client
      .post(&self.url)
      .json(&query_body())
      .send()
      .await?;

    if resp.status() != StatusCode::OK {
      tracing::warn!(status = %resp.status(), "problem downloading launch data");
      return Err(Error::Status(resp.status()));
    }

    let body: QueryResponse = resp.json().await.map_err(Error::Decode)?;
    tracing::debug!(count = body.docs.len(), "received launch documents");
    Ok(body.docs)
  }
}

impl LaunchProvider for SpacexClient {
  type Error = Error;

  async fn fetch_launches(&self) -> Result<Vec<RemoteLaunch>> {
    self.query_launches().await
  }
}
