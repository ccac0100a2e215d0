//! Launch records, the unit of the catalog.
//!
//! Imported and user-scheduled launches share one shape once stored; nothing
//! on a record says where it came from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The unique integer identity of a launch.
pub type FlightNumber = u32;

/// A launch as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRecord {
  pub flight_number: FlightNumber,
  pub mission:       String,
  pub rocket:        String,
  pub launch_date:   DateTime<Utc>,
  /// Kepler name of the destination planet. Only user-scheduled launches have
  /// one.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub target:        Option<String>,
  #[serde(default)]
  pub customers:     Vec<String>,
  /// True until the launch is resolved (aborted or flown).
  pub upcoming:      bool,
  pub success:       bool,
}

impl LaunchRecord {
  /// A launch that has been aborted is neither upcoming nor successful.
  pub fn is_aborted(&self) -> bool { !self.upcoming && !self.success }
}

/// Input to [`crate::CatalogService::schedule_launch`].
///
/// The flight number, customers and outcome flags are always assigned by the
/// catalog; they are not accepted from callers.
#[derive(Debug, Clone)]
pub struct NewLaunch {
  pub mission:     String,
  pub rocket:      String,
  pub launch_date: DateTime<Utc>,
  pub target:      String,
}
