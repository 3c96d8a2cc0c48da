//! Typed configuration for the rich-text editor feature set.
//!
//! These structs serialize to the exact option shapes the editing
//! framework's `configure()` calls expect (camelCase keys). The fixed
//! feature set lives in the `Default` impls: headings restricted to levels
//! 2-3, links that do not navigate on click, inline images with base64
//! sources and aspect-ratio-preserving resize, and a placeholder prompt.

use serde::{Deserialize, Serialize};

use crate::contract;

/// Placeholder prompt shown in an empty editor.
pub const PLACEHOLDER_TEXT: &str = "Write something...";

/// Canonical content type the editor is seeded with and serializes back to.
pub const MARKDOWN_CONTENT_TYPE: &str = "markdown";

/// Heading levels offered by the editor. Level 1 is reserved for the page
/// itself, so field content starts at 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingOptions {
    pub levels: Vec<u8>,
}

impl Default for HeadingOptions {
    fn default() -> Self {
        Self { levels: vec![2, 3] }
    }
}

/// Link behavior. Clicking a link inside the editing surface must not
/// navigate away from the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkOptions {
    pub open_on_click: bool,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            open_on_click: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResizeOptions {
    pub enabled: bool,
    pub always_preserve_aspect_ratio: bool,
}

impl Default for ImageResizeOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            always_preserve_aspect_ratio: true,
        }
    }
}

/// Image behavior: inline placement, base64 sources allowed, resizable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageOptions {
    pub inline: bool,
    pub allow_base64: bool,
    pub resize: ImageResizeOptions,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            inline: true,
            allow_base64: true,
            resize: ImageResizeOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderOptions {
    pub placeholder: String,
}

impl Default for PlaceholderOptions {
    fn default() -> Self {
        Self {
            placeholder: PLACEHOLDER_TEXT.to_string(),
        }
    }
}

/// Attributes applied to the content element by the editor view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAttributes {
    pub class: String,
}

impl Default for ContentAttributes {
    fn default() -> Self {
        Self {
            class: contract::CONTENT_CLASS.to_string(),
        }
    }
}

/// The `editorProps` option block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorViewProps {
    pub attributes: ContentAttributes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_heading_levels_exclude_level_one() {
        let options = HeadingOptions::default();
        assert!(!options.levels.contains(&1));
        assert_eq!(options.levels, vec![2, 3]);
    }

    #[test]
    fn test_heading_options_shape() {
        assert_eq!(
            serde_json::to_value(HeadingOptions::default()).unwrap(),
            json!({ "levels": [2, 3] })
        );
    }

    #[test]
    fn test_link_options_shape() {
        assert_eq!(
            serde_json::to_value(LinkOptions::default()).unwrap(),
            json!({ "openOnClick": false })
        );
    }

    #[test]
    fn test_image_options_shape() {
        assert_eq!(
            serde_json::to_value(ImageOptions::default()).unwrap(),
            json!({
                "inline": true,
                "allowBase64": true,
                "resize": {
                    "enabled": true,
                    "alwaysPreserveAspectRatio": true,
                },
            })
        );
    }

    #[test]
    fn test_placeholder_options_shape() {
        assert_eq!(
            serde_json::to_value(PlaceholderOptions::default()).unwrap(),
            json!({ "placeholder": "Write something..." })
        );
    }

    #[test]
    fn test_editor_props_shape() {
        assert_eq!(
            serde_json::to_value(EditorViewProps::default()).unwrap(),
            json!({ "attributes": { "class": "rich-edit-content" } })
        );
    }
}
