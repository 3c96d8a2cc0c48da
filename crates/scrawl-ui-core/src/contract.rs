//! The declarative DOM contract between page templates and this glue.
//!
//! Templates opt a text field into rich-text editing by setting the marker
//! attribute; everything else (classes, derived ids, event names) is an
//! implementation detail the stylesheet and tests share with the code.

/// Marker attribute a `<textarea>` opts in with.
pub const MARKER_ATTR: &str = "data-rich-edit";

/// Set on a field while an editor is attached. Keeps repeated scans from
/// double-mounting; cleared again on dispose.
pub const MOUNTED_ATTR: &str = "data-rich-edit-mounted";

/// Selector matching fields that want an editor and do not have one yet.
pub const FIELD_SELECTOR: &str = "textarea[data-rich-edit]:not([data-rich-edit-mounted])";

/// Class of the container inserted immediately after the source field.
pub const CONTAINER_CLASS: &str = "rich-edit";

/// Class of the element the editor renders into.
pub const CONTENT_CLASS: &str = "rich-edit-content";

/// Base class of a toast node.
pub const TOAST_CLASS: &str = "app-notice";

/// Added when a toast starts its dismissal transition.
pub const CLOSING_CLASS: &str = "closing";

/// Dispatched by the fragment loader when a request completed with a
/// non-success status.
pub const RESPONSE_ERROR_EVENT: &str = "htmx:responseError";

/// Dispatched by the fragment loader when a request never completed.
pub const SEND_ERROR_EVENT: &str = "htmx:sendError";

/// Id of the editor container derived from the field id.
pub fn container_id(field_id: &str) -> String {
    format!("{field_id}-editor")
}

/// Id of the editor content element derived from the field id.
pub fn content_id(field_id: &str) -> String {
    format!("{field_id}-editor-content")
}

/// Id assigned to an id-less label associated with the field.
pub fn label_id(field_id: &str) -> String {
    format!("{field_id}-label")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_matches_marker_contract() {
        assert_eq!(
            FIELD_SELECTOR,
            format!("textarea[{MARKER_ATTR}]:not([{MOUNTED_ATTR}])")
        );
    }

    #[test]
    fn test_derived_ids() {
        assert_eq!(container_id("f1"), "f1-editor");
        assert_eq!(content_id("f1"), "f1-editor-content");
        assert_eq!(label_id("f1"), "f1-label");
    }

    #[test]
    fn test_content_sits_inside_container_namespace() {
        assert!(content_id("x").starts_with(&container_id("x")));
    }
}
