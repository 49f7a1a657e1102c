//! Marvel Comics API payloads.
//!
//! Mirrors the JSON returned by `GET /v1/public/characters`. String fields the API may
//! omit or send as `null` decode as `None` so a single odd record never fails a page.

use serde::{Deserialize, Serialize};

/// Result code the API reports for a successful request.
pub const SUCCESS_CODE: i64 = 200;

/// Top level wrapper around every API response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// Application level result code, `200` on success.
    pub code: i64,
    /// Human readable status accompanying `code`.
    #[serde(default)]
    pub status: Option<String>,
    /// Copyright notice.
    #[serde(default)]
    pub copyright: Option<String>,
    /// Attribution text that must be displayed with the data.
    #[serde(default)]
    pub attribution_text: Option<String>,
    /// Attribution as an HTML snippet.
    #[serde(default, rename = "attributionHTML")]
    pub attribution_html: Option<String>,
    /// Digest of the response content.
    #[serde(default)]
    pub etag: Option<String>,
    /// The requested page. Error responses usually carry no data.
    #[serde(default)]
    pub data: ApiPage,
}

impl ApiResponse {
    /// Whether the API reported success for this request.
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// One page of characters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiPage {
    /// Offset the page was requested with.
    #[serde(default)]
    pub offset: u32,
    /// Limit the page was requested with.
    #[serde(default)]
    pub limit: u32,
    /// Total number of rows available.
    #[serde(default)]
    pub total: u32,
    /// Number of rows on this page.
    #[serde(default)]
    pub count: u32,
    /// Rows on this page in API order.
    #[serde(default)]
    pub results: Vec<CharacterRecord>,
}

impl ApiPage {
    /// `true` when the server has no rows at this offset.
    pub fn is_end_of_data(&self) -> bool {
        self.count == 0 || self.results.is_empty()
    }
}

/// A single character as returned by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    /// Marvel character ID.
    #[serde(default)]
    pub id: i64,
    /// Character name.
    #[serde(default)]
    pub name: Option<String>,
    /// Short biography.
    #[serde(default)]
    pub description: Option<String>,
    /// Last modification date as sent by the API.
    #[serde(default)]
    pub modified: Option<String>,
    /// Canonical API URL of this character.
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: Option<String>,
    /// Representative image.
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    /// Comics the character appears in.
    #[serde(default)]
    pub comics: Option<ResourceList>,
    /// Series the character appears in.
    #[serde(default)]
    pub series: Option<ResourceList>,
    /// Stories the character appears in.
    #[serde(default)]
    pub stories: Option<ResourceList>,
    /// Events the character appears in.
    #[serde(default)]
    pub events: Option<ResourceList>,
    /// Public web pages for the character.
    #[serde(default)]
    pub urls: Vec<ResourceUrl>,
}

impl CharacterRecord {
    /// Thumbnail URL or an empty string when the record has no usable image.
    pub fn image_url(&self) -> String {
        self.thumbnail
            .as_ref()
            .map(Thumbnail::url)
            .unwrap_or_default()
    }
}

/// Image reference split into path and extension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thumbnail {
    /// Image URL without extension.
    #[serde(default)]
    pub path: Option<String>,
    /// File extension without the leading dot.
    #[serde(default)]
    pub extension: Option<String>,
}

impl Thumbnail {
    /// `path.extension`, or an empty string if either part is missing or empty.
    pub fn url(&self) -> String {
        match (self.path.as_deref(), self.extension.as_deref()) {
            (Some(path), Some(extension)) if !path.is_empty() && !extension.is_empty() => {
                format!("{}.{}", path, extension)
            }
            _ => String::new(),
        }
    }
}

/// Collection of related resources (comics, series, stories or events).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceList {
    /// Total number of related resources.
    #[serde(default)]
    pub available: u32,
    /// API URL of the full collection.
    #[serde(default, rename = "collectionURI")]
    pub collection_uri: Option<String>,
    /// Returned summaries.
    #[serde(default)]
    pub items: Vec<ResourceSummary>,
    /// Number of summaries in `items`.
    #[serde(default)]
    pub returned: u32,
}

/// Summary of a related resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceSummary {
    /// API URL of the resource.
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: Option<String>,
    /// Resource name.
    #[serde(default)]
    pub name: Option<String>,
    /// Story type, only present on story summaries.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Public web page link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceUrl {
    /// Link kind, e.g. `detail` or `wiki`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Link target.
    #[serde(default)]
    pub url: Option<String>,
}
