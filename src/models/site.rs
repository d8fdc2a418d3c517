//! SharePoint site models

use crate::models::{BaseItem, SharepointIds, SitePage};
use crate::odata::AdditionalData;
use serde::{Deserialize, Serialize};

/// A SharePoint site.
///
/// Only the navigation properties this crate models are typed; the rest of
/// the (large) site resource rides in `base.entity.additional_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    /// Inherited base-item fields
    #[serde(flatten)]
    pub base: BaseItem,

    /// Information about the deleted state of the site, if deleted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<Deleted>,

    /// Full title of the site. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// The site pages in the site's pages list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<SitePage>>,

    /// Present when the item is the root of a site. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<Root>,

    /// SharePoint REST identifiers. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharepoint_ids: Option<SharepointIds>,

    /// Details about the site's collection. Only on root sites. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_collection: Option<SiteCollection>,

    /// Subsites of this site. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sites: Option<Vec<Site>>,
}

impl Site {
    /// Discriminator stamped by [`Self::new`]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.site";

    /// Create a site with the discriminator set
    pub fn new() -> Self {
        let mut base = BaseItem::new();
        base.entity.odata_type = Some(Self::ODATA_TYPE.to_string());
        Self {
            base,
            deleted: None,
            display_name: None,
            pages: None,
            root: None,
            sharepoint_ids: None,
            site_collection: None,
            sites: None,
        }
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new()
    }
}

/// Details about a site collection (present only on root sites)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteCollection {
    /// Geographic region code of the site collection's data. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_location_code: Option<String>,

    /// Hostname of the site collection. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    /// Present when the collection is the tenant's root. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<Root>,

    /// Properties not described by the model
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Marker facet: the item is the root of its hierarchy.
///
/// The facet carries no properties of its own; presence is the signal.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Root {
    /// Properties not described by the model
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Deleted-state facet
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deleted {
    /// Representation of the deleted state (e.g. `deleted`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Properties not described by the model
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}
