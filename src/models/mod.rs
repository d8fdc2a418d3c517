//! Graph beta model types
//!
//! One file per resource family, mirroring the beta API schema:
//!
//! - `entity`: the common base type and entity-level dispatch
//! - `identity`: identity and item-reference complex types
//! - `base_item`: shared base of drive/site items
//! - `site`: SharePoint sites
//! - `page`: SharePoint site pages
//! - `canvas`: page canvas layout sections
//! - `web_part`: web part polymorphic family
//! - `group_policy`: group policy definitions, presentations, and
//!   presentation values
//!
//! Every model embeds its parent type through `#[serde(flatten)]` and keeps
//! unmodeled properties in `additional_data`, so a deserialize/serialize
//! round-trip reproduces the original payload (property order excepted).

// Service enums gain members over time; deserialization must tolerate wire
// values this crate predates. Each enum generated here keeps its explicit
// wire names for serialization and maps every unrecognized string onto its
// `UnknownFutureValue` variant, matching the service's own sentinel.
macro_rules! graph_enum {
    (
        $(#[$docs:meta])*
        $name:ident {
            $(
                $(#[$variant_attrs:meta])*
                $variant:ident = $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$docs])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
        pub enum $name {
            $(
                $(#[$variant_attrs])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw =
                    <std::borrow::Cow<'de, str> as serde::Deserialize<'de>>::deserialize(
                        deserializer,
                    )?;
                Ok(match raw.as_ref() {
                    $($wire => Self::$variant,)+
                    _ => Self::UnknownFutureValue,
                })
            }
        }
    };
}

mod base_item;
mod canvas;
mod entity;
mod group_policy;
mod identity;
mod page;
mod site;
mod web_part;

pub use base_item::BaseItem;
pub use canvas::{
    CanvasLayout, HorizontalSection, HorizontalSectionColumn, HorizontalSectionLayoutType,
    SectionEmphasisType, VerticalSection,
};
pub use entity::{AnyEntity, Entity};
pub use group_policy::{
    GroupPolicyDefinition, GroupPolicyDefinitionClassType, GroupPolicyPresentation,
    GroupPolicyPresentationBase, GroupPolicyPresentationCheckBox, GroupPolicyPresentationComboBox,
    GroupPolicyPresentationDecimalTextBox, GroupPolicyPresentationDropdownList,
    GroupPolicyPresentationDropdownListItem, GroupPolicyPresentationListBox,
    GroupPolicyPresentationLongDecimalTextBox, GroupPolicyPresentationMultiTextBox,
    GroupPolicyPresentationText, GroupPolicyPresentationTextBox, GroupPolicyPresentationValue,
    GroupPolicyPresentationValueBase, GroupPolicyPresentationValueBoolean,
    GroupPolicyPresentationValueDecimal, GroupPolicyPresentationValueList,
    GroupPolicyPresentationValueLongDecimal, GroupPolicyPresentationValueMultiText,
    GroupPolicyPresentationValueText, GroupPolicyType, KeyValuePair,
};
pub use identity::{Identity, IdentitySet, ItemReference, SharepointIds};
pub use page::{
    ContentTypeInfo, PageLayoutType, PagePromotionType, PublicationFacet, ReactionsFacet, SitePage,
    TitleArea, TitleAreaLayoutType, TitleAreaTextAlignmentType,
};
pub use site::{Deleted, Root, Site, SiteCollection};
pub use web_part::{
    MetaDataKeyStringPair, MetaDataKeyValuePair, ServerProcessedContent, StandardWebPart,
    TextWebPart, WebPart, WebPartBase, WebPartData,
};
