//! The common entity base type and entity-level discriminator dispatch

use crate::models::{
    GroupPolicyDefinition, GroupPolicyPresentation, GroupPolicyPresentationValue, Site, SitePage,
    WebPart,
};
use crate::odata::{discriminator_of, AdditionalData};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Common base of nearly every Graph resource.
///
/// Supplies the read-only `id` and the `@odata.type` discriminator, plus
/// the additional-data map every entity inherits.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Entity {
    /// The unique identifier for the entity. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The OData type discriminator, when the service stamps one
    #[serde(
        rename = "@odata.type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub odata_type: Option<String>,

    /// Properties not described by the model
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl Entity {
    /// Create an empty entity
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entity with the given id
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

/// An entity decoded by its `@odata.type` discriminator.
///
/// This is the entity-level factory: given any entity payload it selects
/// the concrete model this crate knows, delegating family discriminators
/// to their family dispatch. Unknown and absent discriminators decode as a
/// plain [`Entity`], never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyEntity {
    /// `#microsoft.graph.site`
    Site(Site),
    /// `#microsoft.graph.sitePage`
    SitePage(SitePage),
    /// `#microsoft.graph.groupPolicyDefinition`
    GroupPolicyDefinition(GroupPolicyDefinition),
    /// Any `#microsoft.graph.groupPolicyPresentation*` subtype
    GroupPolicyPresentation(GroupPolicyPresentation),
    /// Any `#microsoft.graph.groupPolicyPresentationValue*` subtype
    GroupPolicyPresentationValue(GroupPolicyPresentationValue),
    /// Any `#microsoft.graph.*WebPart` subtype
    WebPart(WebPart),
    /// Fallback for every other (or absent) discriminator
    Other(Entity),
}

impl AnyEntity {
    /// The entity's identifier, whatever the concrete type
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Site(site) => site.base.entity.id.as_deref(),
            Self::SitePage(page) => page.base.entity.id.as_deref(),
            Self::GroupPolicyDefinition(definition) => definition.entity.id.as_deref(),
            Self::GroupPolicyPresentation(presentation) => presentation.base().entity.id.as_deref(),
            Self::GroupPolicyPresentationValue(value) => value.base().entity.id.as_deref(),
            Self::WebPart(part) => part.id(),
            Self::Other(entity) => entity.id.as_deref(),
        }
    }
}

impl<'de> Deserialize<'de> for AnyEntity {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        let value = Value::deserialize(deserializer)?;
        let discriminator = discriminator_of(&value).map(str::to_owned);
        let entity = match discriminator.as_deref() {
            Some(Site::ODATA_TYPE) => {
                Self::Site(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            Some(SitePage::ODATA_TYPE) => {
                Self::SitePage(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            Some(GroupPolicyDefinition::ODATA_TYPE) => {
                Self::GroupPolicyDefinition(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            Some(odata_type) if GroupPolicyPresentationValue::matches(odata_type) => {
                Self::GroupPolicyPresentationValue(
                    serde_json::from_value(value).map_err(D::Error::custom)?,
                )
            }
            Some(odata_type) if GroupPolicyPresentation::matches(odata_type) => {
                Self::GroupPolicyPresentation(
                    serde_json::from_value(value).map_err(D::Error::custom)?,
                )
            }
            Some(odata_type) if WebPart::matches(odata_type) => {
                Self::WebPart(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            other => {
                if let Some(odata_type) = other {
                    debug!(odata_type, "unrecognized entity type, decoding as base entity");
                }
                Self::Other(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
        };
        Ok(entity)
    }
}
