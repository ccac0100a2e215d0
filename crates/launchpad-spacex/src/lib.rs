//! SpaceX v4 API provider for the Launchpad catalog import.
//!
//! Implements [`launchpad_core::provider::LaunchProvider`] over the
//! `launches/query` endpoint.

mod client;

pub mod error;

pub use client::{DEFAULT_QUERY_URL, SpacexClient};
pub use error::{Error, Result};
