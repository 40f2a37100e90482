//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for sentiment rows, trades and profiles.
//! - [`config`] - Canonical test configurations.
//! - [`source`] - In-memory [`DataSource`](crate::port::DataSource).

pub mod config;
pub mod domain;
pub mod source;
