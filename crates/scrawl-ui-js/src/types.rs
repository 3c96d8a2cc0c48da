//! Types exposed to JavaScript via wasm-bindgen.

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;

use scrawl_ui_core::editor::{HeadingOptions, ImageOptions, LinkOptions, PlaceholderOptions};

/// Summary of the fixed feature set editors are configured with, for
/// host-page introspection and test harnesses.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct EditorFeatures {
    pub heading_levels: Vec<u8>,
    pub link_open_on_click: bool,
    pub image_inline: bool,
    pub image_allow_base64: bool,
    pub placeholder: String,
}

impl EditorFeatures {
    pub fn current() -> Self {
        let heading = HeadingOptions::default();
        let link = LinkOptions::default();
        let image = ImageOptions::default();
        let placeholder = PlaceholderOptions::default();
        Self {
            heading_levels: heading.levels,
            link_open_on_click: link.open_on_click,
            image_inline: image.inline,
            image_allow_base64: image.allow_base64,
            placeholder: placeholder.placeholder,
        }
    }
}
