//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `engine.rs` — pure pace derivation (projected/actual/average/delta).
//! - `controller.rs` — configuration/tracking session flow.
//! - `storage.rs` — lease key/value file + session persistence.
//! - `output.rs` — JSON/text output and number formatting.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod controller;
pub mod engine;
pub mod output;
pub mod storage;
