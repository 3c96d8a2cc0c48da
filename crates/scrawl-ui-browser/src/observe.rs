//! Continuous discovery of editable fields via DOM mutations.
//!
//! The browser batches mutation records and delivers them asynchronously,
//! so editors for freshly inserted fields appear within one callback cycle
//! of the insertion, not synchronously with it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MutationObserver, MutationObserverInit, MutationRecord};

use crate::engine::EditorEngine;
use crate::mount::MountController;

/// Watch `document.body` for structural changes, mounting editors under
/// added nodes and disposing editors under removed ones.
///
/// Records are processed in delivery order; within one record, added nodes
/// are handled before removed ones, each in array order. Returns `Ok(None)`
/// when there is no body to observe. The callback closure is leaked -
/// observation lasts for the page lifetime - but the returned observer can
/// still be disconnected by callers that need discovery to stop.
pub fn observe_body<E>(
    controller: Rc<RefCell<MountController<E>>>,
) -> Result<Option<MutationObserver>, JsError>
where
    E: EditorEngine + 'static,
{
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return Ok(None);
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
        move |records: js_sys::Array, _observer: MutationObserver| {
            let mut controller = controller.borrow_mut();
            for record in records.iter() {
                let record: MutationRecord = record.unchecked_into();

                let added = record.added_nodes();
                for i in 0..added.length() {
                    if let Some(node) = added.item(i) {
                        controller.scan(&node);
                    }
                }

                let removed = record.removed_nodes();
                for i in 0..removed.length() {
                    if let Some(node) = removed.item(i) {
                        controller.sweep_removed(&node);
                    }
                }
            }
        },
    );

    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|e| JsError::new(&format!("Failed to create mutation observer: {e:?}")))?;

    let options = MutationObserverInit::new();
    options.set_child_list(true);
    options.set_subtree(true);
    observer
        .observe_with_options(&body, &options)
        .map_err(|e| JsError::new(&format!("Failed to observe document body: {e:?}")))?;

    callback.forget();
    Ok(Some(observer))
}
