//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `storage.rs` — registry state persistence + action log.
//! - `config.rs` — optional config file (export path, default name).
//! - `export.rs` — export document assembly and file write.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod export;
pub mod output;
pub mod storage;
