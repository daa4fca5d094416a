use serde::{Deserialize, Serialize};

/// The `.content` descriptor stored alongside a notebook's pages.
///
/// Field names follow the container's JSON conventions, which mix camelCase
/// document fields with PascalCase pen-state keys.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Content {
    pub dummy_document: bool,
    pub extra_metadata: ExtraMetadata,
    pub file_type: String,
    pub page_count: i32,
    pub last_opened_page: i32,
    pub line_height: i32,
    pub margins: i32,
    pub text_scale: i32,
    pub transform: Transform,
    pub pages: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExtraMetadata {
    #[serde(rename = "LastPen")]
    pub last_pen: String,
    #[serde(rename = "LastTool")]
    pub last_tool: String,
    #[serde(rename = "LastFinelinerv2Size")]
    pub last_fineliner_size: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Transform {
    pub m11: f32,
    pub m12: f32,
    pub m13: f32,
    pub m21: f32,
    pub m22: f32,
    pub m23: f32,
    pub m31: f32,
    pub m32: f32,
    pub m33: f32,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            m11: 1.0,
            m22: 1.0,
            m33: 1.0,
            ..Self::default()
        }
    }
}

/// The `.metadata` descriptor of a document or collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Metadata {
    #[serde(rename = "visibleName")]
    pub visible_name: String,
    pub version: i32,
    #[serde(rename = "lastModified")]
    pub last_modified: String,
    #[serde(rename = "type")]
    pub collection_type: String,
    pub parent: String,
    pub synced: bool,
}
