//! Shared base of drive and site items

use crate::models::{Entity, IdentitySet, ItemReference};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Base of items stored in drives and sites (inherited by [`crate::models::Site`]
/// and [`crate::models::SitePage`]).
///
/// Unmodeled properties land in `entity.additional_data`; the catch-all map
/// lives only on the innermost flattened type, so there is exactly one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseItem {
    /// Inherited entity fields (`id`, `@odata.type`)
    #[serde(flatten)]
    pub entity: Entity,

    /// Identity of the creator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentitySet>,

    /// Date and time of item creation. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,

    /// Description of the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// ETag for the item
    #[serde(rename = "eTag", default, skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,

    /// Identity of the last modifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<IdentitySet>,

    /// Date and time the item was last modified. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<DateTime<Utc>>,

    /// Name of the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Parent information, if the item has a parent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_reference: Option<ItemReference>,

    /// URL that displays the resource in the browser. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
}

impl BaseItem {
    /// Create an empty base item
    pub fn new() -> Self {
        Self::default()
    }
}
