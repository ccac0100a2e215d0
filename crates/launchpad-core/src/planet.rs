//! Planet reference data.
//!
//! Planets are loaded by something outside the catalog and are only ever read
//! here, to validate the target of a scheduled launch.

use serde::{Deserialize, Serialize};

/// A habitable planet that launches may target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
  pub kepler_name: String,
}

impl Planet {
  pub fn new(kepler_name: impl Into<String>) -> Self {
    Self { kepler_name: kepler_name.into() }
  }
}
