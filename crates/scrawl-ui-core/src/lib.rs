//! scrawl-ui-core: Pure presentation-glue logic without browser dependencies.
//!
//! This crate provides:
//! - `notify` - failure-message selection and toast lifecycle timing
//! - `editor` - typed configuration for the rich-text editor feature set
//! - `contract` - the attribute/class/event contract page templates rely on
//!
//! Everything here is natively testable; the DOM side lives in
//! `scrawl-ui-browser`.

pub mod contract;
pub mod editor;
pub mod notify;

pub use editor::{
    ContentAttributes, EditorViewProps, HeadingOptions, ImageOptions, ImageResizeOptions,
    LinkOptions, PlaceholderOptions, MARKDOWN_CONTENT_TYPE, PLACEHOLDER_TEXT,
};
pub use notify::{
    response_error_message, Severity, SEND_ERROR_MESSAGE, TOAST_CLOSING_MS, TOAST_REMOVE_MS,
};
