//! The seam between mount plumbing and the editing framework.
//!
//! The mount controller is generic over [`EditorEngine`] so the DOM side
//! can be exercised without loading the real framework. The production
//! engine lives in the WASM entry crate, next to its bindings.

use wasm_bindgen::JsError;
use web_sys::Element;

/// Called with the serialized markdown after every editor content change.
pub type ChangeHook = Box<dyn Fn(&str)>;

/// A live editor instance bound to one content element.
///
/// Handles are cheap clones sharing one underlying instance, so the
/// controller registry and a label's focus listener can both hold one.
pub trait EditorHandle: Clone {
    /// Serialize the current document to markdown.
    fn markdown(&self) -> String;

    /// Whether the document has no visible content.
    fn is_empty(&self) -> bool;

    /// Replace the document with empty content.
    fn clear(&self);

    /// Move editing focus into the content element.
    fn focus(&self);

    /// Release the instance's resources.
    fn destroy(&self);
}

/// Creates editor instances for the mount controller.
pub trait EditorEngine {
    type Handle: EditorHandle + 'static;

    /// Bind a new editor to `content`, seeded with `seed` interpreted as
    /// markdown. `on_change` must fire after every content change with the
    /// new serialization.
    fn create(
        &self,
        content: &Element,
        seed: &str,
        on_change: ChangeHook,
    ) -> Result<Self::Handle, JsError>;
}
