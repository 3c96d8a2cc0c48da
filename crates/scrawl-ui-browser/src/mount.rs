//! Editor mounting: discovery, attachment, and teardown of rich-text
//! editors over marked text fields.
//!
//! Ownership is explicit. The controller maps field ids to mounted
//! instances, so a removal mutation can dispose the editor it owned, and a
//! repeated scan cannot attach a second editor to the same field: mounted
//! fields carry a processed-marker attribute the qualifying selector
//! excludes.

use std::collections::HashMap;

use gloo_events::EventListener;
use wasm_bindgen::{JsCast, JsError, JsValue};
use web_sys::{Document, DocumentFragment, Element, HtmlTextAreaElement, Node};

use scrawl_ui_core::contract;

use crate::engine::{EditorEngine, EditorHandle};

/// One mounted editor and everything it owns.
struct MountedField<H> {
    field: HtmlTextAreaElement,
    container: Element,
    handle: H,
    // Dropped on dispose, which unregisters the label click listener.
    _label_listener: Option<EventListener>,
}

/// Discovers marked fields and keeps exactly one editor attached to each.
pub struct MountController<E: EditorEngine> {
    engine: E,
    mounted: HashMap<String, MountedField<E::Handle>>,
}

impl<E: EditorEngine> MountController<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            mounted: HashMap::new(),
        }
    }

    /// Number of currently mounted editors.
    pub fn len(&self) -> usize {
        self.mounted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty()
    }

    /// Whether the field with this id currently has an editor attached.
    pub fn is_mounted(&self, field_id: &str) -> bool {
        self.mounted.contains_key(field_id)
    }

    /// Attach a rich-text editor to `field`.
    ///
    /// Assigns the field an id when it lacks one, inserts the editor
    /// container immediately after it, hides the field, seeds the editor
    /// with the field's value as markdown, and registers the update hook
    /// that writes every new serialization back into the field so it stays
    /// submit-compatible with an enclosing form.
    pub fn mount(&mut self, field: &HtmlTextAreaElement) -> Result<(), JsError> {
        if field.has_attribute(contract::MOUNTED_ATTR) {
            tracing::debug!("field already carries an editor, skipping");
            return Ok(());
        }
        let field_id = ensure_field_id(field);
        if self.mounted.contains_key(&field_id) {
            // Either a repeated scan or a random-id collision; neither may
            // double-mount or hijack the registry entry.
            tracing::warn!(field = %field_id, "duplicate field id, skipping mount");
            return Ok(());
        }

        let document = field
            .owner_document()
            .ok_or_else(|| JsError::new("field has no owning document"))?;

        let container = create_div(
            &document,
            contract::CONTAINER_CLASS,
            &contract::container_id(&field_id),
        )?;
        let content = create_div(
            &document,
            contract::CONTENT_CLASS,
            &contract::content_id(&field_id),
        )?;
        container
            .append_child(&content)
            .map_err(|e| JsError::new(&format!("Failed to append content element: {e:?}")))?;

        field
            .insert_adjacent_element("afterend", &container)
            .map_err(|e| JsError::new(&format!("Failed to insert editor container: {e:?}")))?;
        let _ = field.style().set_property("display", "none");
        let _ = field.set_attribute(contract::MOUNTED_ATTR, "");

        let on_change = {
            let field = field.clone();
            Box::new(move |markdown: &str| field.set_value(markdown))
        };
        let handle = match self.engine.create(&content, &field.value(), on_change) {
            Ok(handle) => handle,
            Err(err) => {
                // Roll back; the marker must not stick to a field without
                // an editor.
                container.remove();
                let _ = field.remove_attribute(contract::MOUNTED_ATTR);
                let _ = field.style().remove_property("display");
                return Err(err);
            }
        };

        // A whitespace-only seed can leave the framework with phantom empty
        // blocks; reset those to a genuinely empty document.
        if handle.is_empty() {
            handle.clear();
        }

        let label_listener = wire_label(&document, &field_id, &content, &handle);

        tracing::debug!(field = %field_id, "mounted editor");
        self.mounted.insert(
            field_id,
            MountedField {
                field: field.clone(),
                container,
                handle,
                _label_listener: label_listener,
            },
        );
        Ok(())
    }

    /// Tear down the editor mounted on `field_id`.
    ///
    /// Destroys the instance, removes the container, clears the processed
    /// marker, and restores the field's visibility, so a later scan can
    /// mount it again. Returns false when nothing was mounted under that
    /// id.
    pub fn dispose(&mut self, field_id: &str) -> bool {
        let Some(mounted) = self.mounted.remove(field_id) else {
            return false;
        };
        mounted.handle.destroy();
        mounted.container.remove();
        let _ = mounted.field.remove_attribute(contract::MOUNTED_ATTR);
        let _ = mounted.field.style().remove_property("display");
        tracing::debug!(field = %field_id, "disposed editor");
        true
    }

    /// Mount `node` itself when it qualifies, otherwise every qualifying
    /// descendant. Nodes that cannot contain elements are ignored.
    pub fn scan(&mut self, node: &Node) {
        if let Some(field) = node.dyn_ref::<HtmlTextAreaElement>() {
            if field_qualifies(field) {
                if let Err(err) = self.mount(field) {
                    log_mount_error(err);
                }
            }
            return;
        }

        for field in query_fields(node) {
            if let Err(err) = self.mount(&field) {
                log_mount_error(err);
            }
        }
    }

    /// Dispose every mounted editor whose field sits inside a removed
    /// subtree. Containers are siblings of their fields, so they left the
    /// document with the same mutation.
    pub fn sweep_removed(&mut self, node: &Node) {
        let removed: Vec<String> = self
            .mounted
            .iter()
            .filter(|(_, mounted)| {
                let field: &Node = mounted.field.as_ref();
                node.contains(Some(field))
            })
            .map(|(id, _)| id.clone())
            .collect();
        for field_id in removed {
            self.dispose(&field_id);
        }
    }
}

/// Fields need an id for the label association and the registry key;
/// assign a random one when the template did not.
fn ensure_field_id(field: &HtmlTextAreaElement) -> String {
    let id = field.id();
    if !id.is_empty() {
        return id;
    }
    let id = format!("field-{}", js_sys::Math::random().to_bits());
    field.set_id(&id);
    id
}

fn field_qualifies(field: &HtmlTextAreaElement) -> bool {
    field.matches(contract::FIELD_SELECTOR).unwrap_or(false)
}

/// Qualifying fields under `node`, for any node kind that supports subtree
/// queries.
fn query_fields(node: &Node) -> Vec<HtmlTextAreaElement> {
    let list = if let Some(element) = node.dyn_ref::<Element>() {
        element.query_selector_all(contract::FIELD_SELECTOR).ok()
    } else if let Some(document) = node.dyn_ref::<Document>() {
        document.query_selector_all(contract::FIELD_SELECTOR).ok()
    } else if let Some(fragment) = node.dyn_ref::<DocumentFragment>() {
        fragment.query_selector_all(contract::FIELD_SELECTOR).ok()
    } else {
        None
    };

    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlTextAreaElement>().ok())
        .collect()
}

/// Hiding the native field breaks label-click-to-focus; restore it by
/// focusing the editor instead, and point the content element at the label
/// for assistive technology. A missing label is not an error.
fn wire_label<H: EditorHandle + 'static>(
    document: &Document,
    field_id: &str,
    content: &Element,
    handle: &H,
) -> Option<EventListener> {
    let label = document
        .query_selector(&format!("label[for=\"{field_id}\"]"))
        .ok()
        .flatten()?;
    if label.id().is_empty() {
        label.set_id(&contract::label_id(field_id));
    }
    let _ = content.set_attribute("aria-labelledby", &label.id());

    let handle = handle.clone();
    Some(EventListener::new(&label, "click", move |_| handle.focus()))
}

fn create_div(document: &Document, class: &str, id: &str) -> Result<Element, JsError> {
    let div = document
        .create_element("div")
        .map_err(|e| JsError::new(&format!("Failed to create element: {e:?}")))?;
    div.set_id(id);
    div.set_class_name(class);
    Ok(div)
}

fn log_mount_error(err: JsError) {
    let err = JsValue::from(err);
    tracing::warn!("mount failed: {err:?}");
}
