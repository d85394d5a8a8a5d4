//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep lease, session and report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — lease config, session, metrics and output structs.
//! - `constants.rs` — defaults and persisted key names.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
