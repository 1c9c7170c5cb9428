//! Deterministic fit scoring for college soccer recruiting profiles.
//!
//! The [`assessment`] module holds the intake domain model, the scoring engine,
//! and the service/router layer wrapping it. The remaining modules carry the
//! process-level concerns shared with the API binary.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
