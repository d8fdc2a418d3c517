//! Web part models
//!
//! `webPart` is a polymorphic base type: the service stamps every instance
//! with `@odata.type` and [`WebPart`] dispatches on it. Unknown subtypes
//! decode as [`WebPartBase`] with all properties preserved.

use crate::models::Entity;
use crate::odata::{discriminator_of, AdditionalData};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// A web part on a site page, decoded by discriminator
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WebPart {
    /// `#microsoft.graph.standardWebPart`
    Standard(StandardWebPart),
    /// `#microsoft.graph.textWebPart`
    Text(TextWebPart),
    /// Fallback for unknown or absent discriminators
    Other(WebPartBase),
}

impl WebPart {
    /// Whether the discriminator names a concrete web part type
    pub fn matches(odata_type: &str) -> bool {
        matches!(
            odata_type,
            StandardWebPart::ODATA_TYPE | TextWebPart::ODATA_TYPE
        )
    }

    /// The web part's identifier, whatever the concrete type
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Standard(part) => part.base.entity.id.as_deref(),
            Self::Text(part) => part.base.entity.id.as_deref(),
            Self::Other(part) => part.entity.id.as_deref(),
        }
    }
}

impl<'de> Deserialize<'de> for WebPart {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        let value = Value::deserialize(deserializer)?;
        let discriminator = discriminator_of(&value).map(str::to_owned);
        let part = match discriminator.as_deref() {
            Some(StandardWebPart::ODATA_TYPE) => {
                Self::Standard(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            Some(TextWebPart::ODATA_TYPE) => {
                Self::Text(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            other => {
                if let Some(odata_type) = other {
                    debug!(odata_type, "unrecognized webPart type, decoding as base");
                }
                Self::Other(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
        };
        Ok(part)
    }
}

/// The web part base type; carries only entity fields.
///
/// Dispatch target for discriminators this crate does not know, so every
/// property still round-trips through `entity.additional_data`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WebPartBase {
    /// Inherited entity fields
    #[serde(flatten)]
    pub entity: Entity,
}

/// A standard (catalog) web part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardWebPart {
    /// Inherited web part fields
    #[serde(flatten)]
    pub base: WebPartBase,

    /// Data of the web part
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<WebPartData>,

    /// Identifier of the web part type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_part_type: Option<String>,
}

impl StandardWebPart {
    /// Discriminator stamped by [`Self::new`]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.standardWebPart";

    /// Create a standard web part with the discriminator set
    pub fn new() -> Self {
        let mut base = WebPartBase::default();
        base.entity.odata_type = Some(Self::ODATA_TYPE.to_string());
        Self {
            base,
            data: None,
            web_part_type: None,
        }
    }
}

impl Default for StandardWebPart {
    fn default() -> Self {
        Self::new()
    }
}

/// A text web part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextWebPart {
    /// Inherited web part fields
    #[serde(flatten)]
    pub base: WebPartBase,

    /// HTML content of the web part
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_html: Option<String>,
}

impl TextWebPart {
    /// Discriminator stamped by [`Self::new`]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.textWebPart";

    /// Create a text web part with the discriminator set
    pub fn new() -> Self {
        let mut base = WebPartBase::default();
        base.entity.odata_type = Some(Self::ODATA_TYPE.to_string());
        Self {
            base,
            inner_html: None,
        }
    }
}

impl Default for TextWebPart {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Web part support types
// ============================================================================

/// Data payload of a standard web part
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPartData {
    /// Audiences the web part targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audiences: Option<Vec<String>>,

    /// Version of the web part data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_version: Option<String>,

    /// Description of the web part
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Properties of the web part; schema varies per web part type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,

    /// Content the server pre-processes for search and link fixup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_processed_content: Option<ServerProcessedContent>,

    /// Title of the web part
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Properties not described by the model
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Collections of data processed by server-side services like search index
/// and link fixup
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerProcessedContent {
    /// Component ids the server may preload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_dependencies: Option<Vec<MetaDataKeyStringPair>>,

    /// Custom key-value metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_metadata: Option<Vec<MetaDataKeyValuePair>>,

    /// Values treated as HTML (safety checks, search index, link fixup)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_strings: Option<Vec<MetaDataKeyStringPair>>,

    /// Values treated as image sources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_sources: Option<Vec<MetaDataKeyStringPair>>,

    /// Values treated as links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<MetaDataKeyStringPair>>,

    /// Values that should be search indexed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub searchable_plain_texts: Option<Vec<MetaDataKeyStringPair>>,

    /// Properties not described by the model
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// A string-valued metadata entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDataKeyStringPair {
    /// Key of the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// String value of the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Properties not described by the model
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// An arbitrarily-valued metadata entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDataKeyValuePair {
    /// Key of the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Value of the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Properties not described by the model
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}
