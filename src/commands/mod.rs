//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `checklist.rs` — catalog/list/log/incomplete/progress/export/guide.
//! - `admin.rs` — business name and registry reset.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `registry` and `services/*`.
//! - Keep behavior and output schema stable.

pub mod admin;
pub mod checklist;

pub use admin::handle_admin_commands;
pub use checklist::handle_checklist_commands;
