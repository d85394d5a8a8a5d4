//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `lease.rs` — status/configure/edit/track.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate screen transitions to `services::controller` and math to
//!   `services::engine`.
//! - Keep behavior and output schema stable.

pub mod lease;

pub use lease::handle_lease_commands;
