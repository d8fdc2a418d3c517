//! Identity and item-reference complex types

use crate::odata::AdditionalData;
use serde::{Deserialize, Serialize};

/// A single identity (user, application, or device)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Display name of the identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Unique identifier of the identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Properties not described by the model
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// A keyed collection of identities, one slot per identity kind
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentitySet {
    /// The application associated with the action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Identity>,

    /// The device associated with the action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Identity>,

    /// The user associated with the action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Identity>,

    /// Properties not described by the model
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Reference to an item in a drive or site
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemReference {
    /// Identifier of the drive instance that contains the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_id: Option<String>,

    /// Kind of drive (`personal`, `business`, `documentLibrary`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_type: Option<String>,

    /// Identifier of the referenced item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Name of the referenced item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Path of the referenced item, relative to the drive root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Identifier of a shared resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_id: Option<String>,

    /// SharePoint identifiers useful for REST compatibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharepoint_ids: Option<SharepointIds>,

    /// Identifier of the site that contains the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,

    /// Properties not described by the model
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// SharePoint resource identifiers for SharePoint and Business Connectivity
/// Services
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharepointIds {
    /// Identifier of the item's list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,

    /// Integer identifier of the item within the list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_item_id: Option<String>,

    /// GUID identifier of the item within the list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_item_unique_id: Option<String>,

    /// Identifier of the item's site collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,

    /// SharePoint URL of the site that contains the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,

    /// Identifier of the tenancy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,

    /// Identifier of the item's site
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_id: Option<String>,

    /// Properties not described by the model
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}
