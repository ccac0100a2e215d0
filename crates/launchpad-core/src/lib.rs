//! Core types and trait definitions for the Launchpad launch catalog.
//!
//! This crate is deliberately free of HTTP and database dependencies. Storage
//! backends implement [`store::LaunchStore`], data providers implement
//! [`provider::LaunchProvider`], and [`catalog::CatalogService`] ties the two
//! together.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod catalog;
pub mod error;
pub mod launch;
pub mod planet;
pub mod provider;
pub mod store;
mod sync;

pub use catalog::CatalogService;
pub use error::{Error, Result};
pub use sync::SyncReport;
