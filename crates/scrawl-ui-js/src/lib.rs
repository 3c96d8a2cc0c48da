//! WASM entry point wiring the scrawl presentation glue into a page.
//!
//! Loading this module arms both controllers: failure toasts for the
//! fragment loader's error events, and editor auto-mounting over marked
//! text fields (an initial scan plus mutation observation). A small
//! JS-callable surface is exported for host pages that render DOM outside
//! the observed body or surface their own failures.

mod tiptap;
mod types;

pub use tiptap::TiptapEngine;
pub use types::EditorFeatures;

use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::CustomEvent;

use scrawl_ui_browser::mount::MountController;
use scrawl_ui_browser::{contract, observe_body, toast};

type Controller = Rc<RefCell<MountController<TiptapEngine>>>;

thread_local! {
    static CONTROLLER: OnceCell<Controller> = const { OnceCell::new() };
}

/// Initialize panic reporting, logging, and both controllers.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsError> {
    console_error_panic_hook::set_once();
    init_tracing();
    boot()
}

/// Tracing subscriber printing to the browser console.
/// Must be installed once, before anything logs.
fn init_tracing() {
    use tracing::subscriber::set_global_default;
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::Registry;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    let _ = set_global_default(Registry::default().with(wasm_layer));
}

fn boot() -> Result<(), JsError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsError::new("no document to attach to"))?;

    // Failure signals from the fragment loader. Page-lifetime listeners.
    if let Some(body) = document.body() {
        EventListener::new(&body, contract::RESPONSE_ERROR_EVENT, |event| {
            if let Some(event) = event.dyn_ref::<CustomEvent>() {
                toast::on_response_error(event);
            }
        })
        .forget();
        EventListener::new(&body, contract::SEND_ERROR_EVENT, |_| {
            toast::on_send_error();
        })
        .forget();
    }

    let controller: Controller = Rc::new(RefCell::new(MountController::new(TiptapEngine)));
    let _ = observe_body(controller.clone())?;
    controller.borrow_mut().scan(&document);

    CONTROLLER.with(|slot| {
        let _ = slot.set(controller);
    });
    tracing::info!("presentation glue armed");
    Ok(())
}

/// Show an error toast with `message`, exactly as a failed fragment
/// request would.
#[wasm_bindgen(js_name = showErrorToast)]
pub fn show_error_toast(message: &str) {
    toast::show_toast(message);
}

/// Mount editors over qualifying fields under `root` immediately, without
/// waiting for a mutation record.
#[wasm_bindgen(js_name = mountEditors)]
pub fn mount_editors(root: &web_sys::Node) {
    CONTROLLER.with(|slot| {
        if let Some(controller) = slot.get() {
            controller.borrow_mut().scan(root);
        }
    });
}

/// Number of currently mounted editors.
#[wasm_bindgen(js_name = editorCount)]
pub fn editor_count() -> usize {
    CONTROLLER.with(|slot| slot.get().map(|c| c.borrow().len()).unwrap_or(0))
}

/// The fixed feature set editors are configured with.
#[wasm_bindgen(js_name = editorFeatures)]
pub fn editor_features() -> EditorFeatures {
    EditorFeatures::current()
}
