//! Bindings to the Tiptap editing framework and the production
//! [`EditorEngine`] built on them.
//!
//! Everything document-model shaped is the framework's: schema, undo
//! history, and the markdown (de)serialization behind `getMarkdown`. This
//! module only assembles the configuration surface - the extension stack
//! mirrors the fixed feature set in `scrawl_ui_core::editor` - and adapts
//! instances to the [`EditorHandle`] contract.

use std::rc::Rc;

use js_sys::{Array, Object, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, JsThreadLocal};
use web_sys::Element;

use scrawl_ui_browser::engine::{ChangeHook, EditorEngine, EditorHandle};
use scrawl_ui_core::editor::{
    EditorViewProps, HeadingOptions, ImageOptions, LinkOptions, PlaceholderOptions,
    MARKDOWN_CONTENT_TYPE,
};

// === Framework bindings ===
//
// Structural methods keep these decoupled from the framework's class
// hierarchy; only `Editor` itself and the extension objects are imported.

#[wasm_bindgen(module = "@tiptap/core")]
extern "C" {
    /// A Tiptap editor bound to one content element.
    pub type Editor;

    #[wasm_bindgen(constructor)]
    pub fn new(options: &JsValue) -> Editor;

    #[wasm_bindgen(method, getter, structural, js_name = isEmpty)]
    pub fn is_empty(this: &Editor) -> bool;

    #[wasm_bindgen(method, structural, js_name = getMarkdown)]
    pub fn get_markdown(this: &Editor) -> String;

    #[wasm_bindgen(method, getter, structural)]
    pub fn commands(this: &Editor) -> Commands;

    #[wasm_bindgen(method, structural)]
    pub fn destroy(this: &Editor);
}

#[wasm_bindgen]
extern "C" {
    /// Command surface of a live editor. Never constructed from Rust.
    pub type Commands;

    #[wasm_bindgen(method, structural)]
    pub fn focus(this: &Commands) -> bool;

    #[wasm_bindgen(method, structural, js_name = setContent)]
    pub fn set_content(this: &Commands, content: &str) -> bool;

    /// An extension object as exported by the framework's packages.
    pub type TiptapExtension;

    #[wasm_bindgen(method, structural)]
    pub fn configure(this: &TiptapExtension, options: &JsValue) -> TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/extension-document")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = Document)]
    static DOCUMENT: TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/extension-text")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = Text)]
    static TEXT: TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/extension-paragraph")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = Paragraph)]
    static PARAGRAPH: TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/extension-heading")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = Heading)]
    static HEADING: TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/extension-bold")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = Bold)]
    static BOLD: TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/extension-italic")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = Italic)]
    static ITALIC: TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/extension-underline")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = Underline)]
    static UNDERLINE: TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/extension-strike")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = Strike)]
    static STRIKE: TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/extension-code")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = Code)]
    static CODE: TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/extension-code-block")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = CodeBlock)]
    static CODE_BLOCK: TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/extension-blockquote")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = Blockquote)]
    static BLOCKQUOTE: TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/extension-bullet-list")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = BulletList)]
    static BULLET_LIST: TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/extension-ordered-list")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = OrderedList)]
    static ORDERED_LIST: TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/extension-list-item")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = ListItem)]
    static LIST_ITEM: TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/extension-hard-break")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = HardBreak)]
    static HARD_BREAK: TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/extension-horizontal-rule")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = HorizontalRule)]
    static HORIZONTAL_RULE: TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/extension-link")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = Link)]
    static LINK: TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/extension-image")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = Image)]
    static IMAGE: TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/extension-dropcursor")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = Dropcursor)]
    static DROPCURSOR: TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/extension-gapcursor")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = Gapcursor)]
    static GAPCURSOR: TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/extensions")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = Placeholder)]
    static PLACEHOLDER: TiptapExtension;

    #[wasm_bindgen(thread_local_v2, js_name = UndoRedo)]
    static UNDO_REDO: TiptapExtension;
}

#[wasm_bindgen(module = "@tiptap/markdown")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = Markdown)]
    static MARKDOWN: TiptapExtension;
}

// === Production engine ===

/// The production engine: one Tiptap instance per mounted field.
pub struct TiptapEngine;

/// Shared handle to a live Tiptap instance.
///
/// Keeps the update callback alive for as long as any clone of the handle
/// is.
#[derive(Clone)]
pub struct TiptapHandle {
    editor: Rc<Editor>,
    _on_update: Rc<Closure<dyn FnMut(JsValue)>>,
}

impl EditorEngine for TiptapEngine {
    type Handle = TiptapHandle;

    fn create(
        &self,
        content: &Element,
        seed: &str,
        on_change: ChangeHook,
    ) -> Result<TiptapHandle, JsError> {
        // The framework calls this with `{ editor, transaction }` after
        // every content change.
        let on_update = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
            let editor = Reflect::get(&payload, &JsValue::from_str("editor"))
                .unwrap_or(JsValue::UNDEFINED);
            if editor.is_undefined() {
                tracing::warn!("editor update payload without an editor reference");
                return;
            }
            let editor: Editor = editor.unchecked_into();
            on_change(&editor.get_markdown());
        });

        let options = editor_options(content, seed, &on_update)?;
        let editor = Editor::new(&options);

        Ok(TiptapHandle {
            editor: Rc::new(editor),
            _on_update: Rc::new(on_update),
        })
    }
}

impl EditorHandle for TiptapHandle {
    fn markdown(&self) -> String {
        self.editor.get_markdown()
    }

    fn is_empty(&self) -> bool {
        self.editor.is_empty()
    }

    fn clear(&self) {
        self.editor.commands().set_content("");
    }

    fn focus(&self) {
        self.editor.commands().focus();
    }

    fn destroy(&self) {
        self.editor.destroy();
    }
}

/// Assemble the constructor options: content element, extension stack,
/// markdown seed, and the update hook that keeps the source field current.
fn editor_options(
    content: &Element,
    seed: &str,
    on_update: &Closure<dyn FnMut(JsValue)>,
) -> Result<JsValue, JsError> {
    let options = Object::new();
    set(&options, "element", content.as_ref())?;
    set(&options, "extensions", extension_stack()?.as_ref())?;
    set(&options, "content", &JsValue::from_str(seed))?;
    set(&options, "contentType", &JsValue::from_str(MARKDOWN_CONTENT_TYPE))?;
    set(&options, "editorProps", &to_options(&EditorViewProps::default())?)?;
    set(&options, "onUpdate", on_update.as_ref())?;
    Ok(options.into())
}

/// Build the fixed extension stack.
fn extension_stack() -> Result<Array, JsError> {
    let placeholder = to_options(&PlaceholderOptions::default())?;
    let heading = to_options(&HeadingOptions::default())?;
    let link = to_options(&LinkOptions::default())?;
    let image = to_options(&ImageOptions::default())?;

    let stack = Array::new();

    // Document structure and serialization.
    for ext in [
        &CODE_BLOCK,
        &DOCUMENT,
        &HARD_BREAK,
        &HORIZONTAL_RULE,
        &TEXT,
        &CODE,
        &MARKDOWN,
    ] {
        push(&stack, ext);
    }
    PLACEHOLDER.with(|p| stack.push(p.configure(&placeholder).as_ref()));

    // Editing affordances.
    for ext in [&DROPCURSOR, &GAPCURSOR, &UNDO_REDO] {
        push(&stack, ext);
    }

    // Blocks.
    HEADING.with(|h| stack.push(h.configure(&heading).as_ref()));
    push(&stack, &PARAGRAPH);

    // Marks.
    for ext in [&BOLD, &ITALIC, &UNDERLINE, &STRIKE] {
        push(&stack, ext);
    }

    // Lists and quotes.
    for ext in [&BULLET_LIST, &ORDERED_LIST, &LIST_ITEM, &BLOCKQUOTE] {
        push(&stack, ext);
    }

    LINK.with(|l| stack.push(l.configure(&link).as_ref()));
    IMAGE.with(|i| stack.push(i.configure(&image).as_ref()));

    Ok(stack)
}

fn push(stack: &Array, ext: &'static JsThreadLocal<TiptapExtension>) {
    ext.with(|ext| stack.push(ext.as_ref()));
}

fn to_options<T: Serialize>(options: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(options)
        .map_err(|e| JsError::new(&format!("Failed to serialize editor options: {e}")))
}

fn set(options: &Object, key: &str, value: &JsValue) -> Result<(), JsError> {
    Reflect::set(options, &JsValue::from_str(key), value)
        .map_err(|e| JsError::new(&format!("Failed to set editor option {key}: {e:?}")))?;
    Ok(())
}
