//! Browser DOM layer for the scrawl presentation glue.
//!
//! Two independent controllers live here: transient error toasts for the
//! fragment loader's failure events, and the mount controller that upgrades
//! marked text fields into rich-text editors. The DOM plumbing is generic
//! over [`engine::EditorEngine`]; the production engine lives with the WASM
//! entry point, next to its framework bindings. Assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Re-exports
//!
//! This crate re-exports `scrawl-ui-core` for convenience, so consumers
//! only need to depend on `scrawl-ui-browser`.

// Re-export core crate
pub use scrawl_ui_core;
pub use scrawl_ui_core::*;

pub mod engine;
pub mod mount;
pub mod observe;
pub mod toast;

pub use engine::{ChangeHook, EditorEngine, EditorHandle};
pub use mount::MountController;
pub use observe::observe_body;
