//! Group policy definition, presentation, and presentation value models
//!
//! `groupPolicyPresentation` and `groupPolicyPresentationValue` are the two
//! largest polymorphic families in this crate: nine and six concrete
//! subtypes respectively, each selected by `@odata.type`. Unknown subtypes
//! decode as the family base with all properties preserved.

use crate::models::Entity;
use crate::odata::{discriminator_of, AdditionalData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// All of the information about a single group policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPolicyDefinition {
    /// Inherited entity fields
    #[serde(flatten)]
    pub entity: Entity,

    /// Localized full category path of the policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_path: Option<String>,

    /// Class of the definition (user or machine)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_type: Option<GroupPolicyDefinitionClassType>,

    /// Localized policy name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Localized explanation or help text of the policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explain_text: Option<String>,

    /// Whether there are definitions related to this definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_related_definitions: Option<bool>,

    /// Date and time the entity was last modified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<DateTime<Utc>>,

    /// Minimum required CSP version for device configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_device_csp_version: Option<String>,

    /// Minimum required CSP version for user configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_user_csp_version: Option<String>,

    /// Type of group policy file or definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<GroupPolicyType>,

    /// Presentations associated with the definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentations: Option<Vec<GroupPolicyPresentation>>,

    /// Localized string describing affected OS or application versions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_on: Option<String>,

    /// Setting definition version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl GroupPolicyDefinition {
    /// Discriminator stamped by [`Self::new`]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.groupPolicyDefinition";

    /// Create a definition with the discriminator set
    pub fn new() -> Self {
        Self {
            entity: Entity {
                odata_type: Some(Self::ODATA_TYPE.to_string()),
                ..Entity::default()
            },
            category_path: None,
            class_type: None,
            display_name: None,
            explain_text: None,
            has_related_definitions: None,
            last_modified_date_time: None,
            min_device_csp_version: None,
            min_user_csp_version: None,
            policy_type: None,
            presentations: None,
            supported_on: None,
            version: None,
        }
    }
}

impl Default for GroupPolicyDefinition {
    fn default() -> Self {
        Self::new()
    }
}

/// Class of a group policy definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupPolicyDefinitionClassType {
    /// Identifies a user policy
    #[default]
    User,
    /// Identifies a machine policy
    Machine,
}

/// Origin of a group policy definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupPolicyType {
    /// Built-in ADMX policy
    #[default]
    AdmxBacked,
    /// Ingested custom ADMX policy
    AdmxIngested,
}

/// A name-value pair used by list presentation values
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValuePair {
    /// Name of the pair
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Value of the pair
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Properties not described by the model
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

// ============================================================================
// Presentation family
// ============================================================================

/// Shared fields of every group policy presentation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPolicyPresentationBase {
    /// Inherited entity fields
    #[serde(flatten)]
    pub entity: Entity,

    /// Localized text label of the presentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Date and time the presentation was last modified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<DateTime<Utc>>,
}

impl GroupPolicyPresentationBase {
    fn stamped(odata_type: &str) -> Self {
        Self {
            entity: Entity {
                odata_type: Some(odata_type.to_string()),
                ..Entity::default()
            },
            label: None,
            last_modified_date_time: None,
        }
    }
}

macro_rules! presentation_type {
    (
        $(#[$docs:meta])*
        $name:ident, $odata_type:literal, {
            $(
                $(#[$field_docs:meta])*
                $field:ident: $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$docs])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            /// Inherited presentation fields
            #[serde(flatten)]
            pub base: GroupPolicyPresentationBase,

            $(
                $(#[$field_docs])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$field_ty>,
            )*
        }

        impl $name {
            /// Discriminator stamped by [`Self::new`]
            pub const ODATA_TYPE: &'static str = $odata_type;

            /// Create an instance with the discriminator set
            pub fn new() -> Self {
                Self {
                    base: GroupPolicyPresentationBase::stamped(Self::ODATA_TYPE),
                    $($field: None,)*
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

presentation_type!(
    /// A check box presentation
    GroupPolicyPresentationCheckBox,
    "#microsoft.graph.groupPolicyPresentationCheckBox",
    {
        /// Whether the box is checked by default
        default_checked: bool,
    }
);

presentation_type!(
    /// A combo box presentation
    GroupPolicyPresentationComboBox,
    "#microsoft.graph.groupPolicyPresentationComboBox",
    {
        /// Default text value
        default_value: String,
        /// Maximum text length
        max_length: i64,
        /// Whether a value is required
        required: bool,
        /// Suggested values
        suggestions: Vec<String>,
    }
);

presentation_type!(
    /// A decimal text box presentation
    GroupPolicyPresentationDecimalTextBox,
    "#microsoft.graph.groupPolicyPresentationDecimalTextBox",
    {
        /// Default numeric value
        default_value: i64,
        /// Maximum allowed value
        max_value: i64,
        /// Minimum allowed value
        min_value: i64,
        /// Whether a value is required
        required: bool,
        /// Whether spin buttons are shown
        spin: bool,
        /// Increment of the spin buttons
        spin_step: i64,
    }
);

presentation_type!(
    /// A dropdown list presentation
    GroupPolicyPresentationDropdownList,
    "#microsoft.graph.groupPolicyPresentationDropdownList",
    {
        /// Default selected item
        default_item: GroupPolicyPresentationDropdownListItem,
        /// Available items
        items: Vec<GroupPolicyPresentationDropdownListItem>,
        /// Whether a selection is required
        required: bool,
    }
);

presentation_type!(
    /// A list box presentation
    GroupPolicyPresentationListBox,
    "#microsoft.graph.groupPolicyPresentationListBox",
    {
        /// Whether values are explicit name-value pairs
        explicit_value: bool,
        /// Prefix prepended to each value name
        value_prefix: String,
    }
);

presentation_type!(
    /// A long decimal text box presentation
    GroupPolicyPresentationLongDecimalTextBox,
    "#microsoft.graph.groupPolicyPresentationLongDecimalTextBox",
    {
        /// Default numeric value
        default_value: i64,
        /// Maximum allowed value
        max_value: i64,
        /// Minimum allowed value
        min_value: i64,
        /// Whether a value is required
        required: bool,
        /// Whether spin buttons are shown
        spin: bool,
        /// Increment of the spin buttons
        spin_step: i64,
    }
);

presentation_type!(
    /// A multi-line text box presentation
    GroupPolicyPresentationMultiTextBox,
    "#microsoft.graph.groupPolicyPresentationMultiTextBox",
    {
        /// Maximum length of each string
        max_length: i64,
        /// Maximum number of strings
        max_strings: i64,
        /// Whether a value is required
        required: bool,
    }
);

presentation_type!(
    /// A static text presentation
    GroupPolicyPresentationText,
    "#microsoft.graph.groupPolicyPresentationText",
    {}
);

presentation_type!(
    /// A text box presentation
    GroupPolicyPresentationTextBox,
    "#microsoft.graph.groupPolicyPresentationTextBox",
    {
        /// Default text value
        default_value: String,
        /// Maximum text length
        max_length: i64,
        /// Whether a value is required
        required: bool,
    }
);

/// An item of a dropdown list presentation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPolicyPresentationDropdownListItem {
    /// Localized display name of the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Value of the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Properties not described by the model
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// A group policy presentation, decoded by discriminator
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GroupPolicyPresentation {
    /// `#microsoft.graph.groupPolicyPresentationCheckBox`
    CheckBox(GroupPolicyPresentationCheckBox),
    /// `#microsoft.graph.groupPolicyPresentationComboBox`
    ComboBox(GroupPolicyPresentationComboBox),
    /// `#microsoft.graph.groupPolicyPresentationDecimalTextBox`
    DecimalTextBox(GroupPolicyPresentationDecimalTextBox),
    /// `#microsoft.graph.groupPolicyPresentationDropdownList`
    DropdownList(GroupPolicyPresentationDropdownList),
    /// `#microsoft.graph.groupPolicyPresentationListBox`
    ListBox(GroupPolicyPresentationListBox),
    /// `#microsoft.graph.groupPolicyPresentationLongDecimalTextBox`
    LongDecimalTextBox(GroupPolicyPresentationLongDecimalTextBox),
    /// `#microsoft.graph.groupPolicyPresentationMultiTextBox`
    MultiTextBox(GroupPolicyPresentationMultiTextBox),
    /// `#microsoft.graph.groupPolicyPresentationText`
    Text(GroupPolicyPresentationText),
    /// `#microsoft.graph.groupPolicyPresentationTextBox`
    TextBox(GroupPolicyPresentationTextBox),
    /// Fallback for unknown or absent discriminators
    Other(GroupPolicyPresentationBase),
}

impl GroupPolicyPresentation {
    /// Whether the discriminator names a concrete presentation type
    pub fn matches(odata_type: &str) -> bool {
        matches!(
            odata_type,
            GroupPolicyPresentationCheckBox::ODATA_TYPE
                | GroupPolicyPresentationComboBox::ODATA_TYPE
                | GroupPolicyPresentationDecimalTextBox::ODATA_TYPE
                | GroupPolicyPresentationDropdownList::ODATA_TYPE
                | GroupPolicyPresentationListBox::ODATA_TYPE
                | GroupPolicyPresentationLongDecimalTextBox::ODATA_TYPE
                | GroupPolicyPresentationMultiTextBox::ODATA_TYPE
                | GroupPolicyPresentationText::ODATA_TYPE
                | GroupPolicyPresentationTextBox::ODATA_TYPE
        )
    }

    /// Shared presentation fields, whatever the concrete type
    pub fn base(&self) -> &GroupPolicyPresentationBase {
        match self {
            Self::CheckBox(p) => &p.base,
            Self::ComboBox(p) => &p.base,
            Self::DecimalTextBox(p) => &p.base,
            Self::DropdownList(p) => &p.base,
            Self::ListBox(p) => &p.base,
            Self::LongDecimalTextBox(p) => &p.base,
            Self::MultiTextBox(p) => &p.base,
            Self::Text(p) => &p.base,
            Self::TextBox(p) => &p.base,
            Self::Other(base) => base,
        }
    }
}

impl<'de> Deserialize<'de> for GroupPolicyPresentation {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        let value = Value::deserialize(deserializer)?;
        let discriminator = discriminator_of(&value).map(str::to_owned);
        let presentation = match discriminator.as_deref() {
            Some(GroupPolicyPresentationCheckBox::ODATA_TYPE) => {
                Self::CheckBox(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            Some(GroupPolicyPresentationComboBox::ODATA_TYPE) => {
                Self::ComboBox(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            Some(GroupPolicyPresentationDecimalTextBox::ODATA_TYPE) => {
                Self::DecimalTextBox(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            Some(GroupPolicyPresentationDropdownList::ODATA_TYPE) => {
                Self::DropdownList(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            Some(GroupPolicyPresentationListBox::ODATA_TYPE) => {
                Self::ListBox(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            Some(GroupPolicyPresentationLongDecimalTextBox::ODATA_TYPE) => {
                Self::LongDecimalTextBox(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            Some(GroupPolicyPresentationMultiTextBox::ODATA_TYPE) => {
                Self::MultiTextBox(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            Some(GroupPolicyPresentationText::ODATA_TYPE) => {
                Self::Text(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            Some(GroupPolicyPresentationTextBox::ODATA_TYPE) => {
                Self::TextBox(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            other => {
                if let Some(odata_type) = other {
                    debug!(
                        odata_type,
                        "unrecognized groupPolicyPresentation type, decoding as base"
                    );
                }
                Self::Other(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
        };
        Ok(presentation)
    }
}

// ============================================================================
// Presentation value family
// ============================================================================

/// Shared fields of every group policy presentation value
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPolicyPresentationValueBase {
    /// Inherited entity fields
    #[serde(flatten)]
    pub entity: Entity,

    /// Date and time the value was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,

    /// Date and time the value was last modified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<DateTime<Utc>>,
}

impl GroupPolicyPresentationValueBase {
    fn stamped(odata_type: &str) -> Self {
        Self {
            entity: Entity {
                odata_type: Some(odata_type.to_string()),
                ..Entity::default()
            },
            created_date_time: None,
            last_modified_date_time: None,
        }
    }
}

macro_rules! presentation_value_type {
    (
        $(#[$docs:meta])*
        $name:ident, $odata_type:literal, $value_field:ident: $value_ty:ty
    ) => {
        $(#[$docs])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            /// Inherited presentation value fields
            #[serde(flatten)]
            pub base: GroupPolicyPresentationValueBase,

            /// The configured value
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub $value_field: Option<$value_ty>,
        }

        impl $name {
            /// Discriminator stamped by [`Self::new`]
            pub const ODATA_TYPE: &'static str = $odata_type;

            /// Create an instance with the discriminator set
            pub fn new() -> Self {
                Self {
                    base: GroupPolicyPresentationValueBase::stamped(Self::ODATA_TYPE),
                    $value_field: None,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

presentation_value_type!(
    /// A boolean presentation value (check box)
    GroupPolicyPresentationValueBoolean,
    "#microsoft.graph.groupPolicyPresentationValueBoolean",
    value: bool
);

presentation_value_type!(
    /// An unsigned decimal presentation value (decimal text box)
    GroupPolicyPresentationValueDecimal,
    "#microsoft.graph.groupPolicyPresentationValueDecimal",
    value: u64
);

presentation_value_type!(
    /// A list of name-value pairs (list box)
    GroupPolicyPresentationValueList,
    "#microsoft.graph.groupPolicyPresentationValueList",
    values: Vec<KeyValuePair>
);

presentation_value_type!(
    /// A signed decimal presentation value (long decimal text box)
    GroupPolicyPresentationValueLongDecimal,
    "#microsoft.graph.groupPolicyPresentationValueLongDecimal",
    value: i64
);

presentation_value_type!(
    /// A list of strings (multi-line text box)
    GroupPolicyPresentationValueMultiText,
    "#microsoft.graph.groupPolicyPresentationValueMultiText",
    values: Vec<String>
);

presentation_value_type!(
    /// A string presentation value (text box or combo box)
    GroupPolicyPresentationValueText,
    "#microsoft.graph.groupPolicyPresentationValueText",
    value: String
);

/// A group policy presentation value, decoded by discriminator
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GroupPolicyPresentationValue {
    /// `#microsoft.graph.groupPolicyPresentationValueBoolean`
    Boolean(GroupPolicyPresentationValueBoolean),
    /// `#microsoft.graph.groupPolicyPresentationValueDecimal`
    Decimal(GroupPolicyPresentationValueDecimal),
    /// `#microsoft.graph.groupPolicyPresentationValueList`
    List(GroupPolicyPresentationValueList),
    /// `#microsoft.graph.groupPolicyPresentationValueLongDecimal`
    LongDecimal(GroupPolicyPresentationValueLongDecimal),
    /// `#microsoft.graph.groupPolicyPresentationValueMultiText`
    MultiText(GroupPolicyPresentationValueMultiText),
    /// `#microsoft.graph.groupPolicyPresentationValueText`
    Text(GroupPolicyPresentationValueText),
    /// Fallback for unknown or absent discriminators
    Other(GroupPolicyPresentationValueBase),
}

impl GroupPolicyPresentationValue {
    /// Whether the discriminator names a concrete presentation value type
    pub fn matches(odata_type: &str) -> bool {
        matches!(
            odata_type,
            GroupPolicyPresentationValueBoolean::ODATA_TYPE
                | GroupPolicyPresentationValueDecimal::ODATA_TYPE
                | GroupPolicyPresentationValueList::ODATA_TYPE
                | GroupPolicyPresentationValueLongDecimal::ODATA_TYPE
                | GroupPolicyPresentationValueMultiText::ODATA_TYPE
                | GroupPolicyPresentationValueText::ODATA_TYPE
        )
    }

    /// Shared presentation value fields, whatever the concrete type
    pub fn base(&self) -> &GroupPolicyPresentationValueBase {
        match self {
            Self::Boolean(v) => &v.base,
            Self::Decimal(v) => &v.base,
            Self::List(v) => &v.base,
            Self::LongDecimal(v) => &v.base,
            Self::MultiText(v) => &v.base,
            Self::Text(v) => &v.base,
            Self::Other(base) => base,
        }
    }
}

impl<'de> Deserialize<'de> for GroupPolicyPresentationValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        let value = Value::deserialize(deserializer)?;
        let discriminator = discriminator_of(&value).map(str::to_owned);
        let presentation_value = match discriminator.as_deref() {
            Some(GroupPolicyPresentationValueBoolean::ODATA_TYPE) => {
                Self::Boolean(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            Some(GroupPolicyPresentationValueDecimal::ODATA_TYPE) => {
                Self::Decimal(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            Some(GroupPolicyPresentationValueList::ODATA_TYPE) => {
                Self::List(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            Some(GroupPolicyPresentationValueLongDecimal::ODATA_TYPE) => {
                Self::LongDecimal(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            Some(GroupPolicyPresentationValueMultiText::ODATA_TYPE) => {
                Self::MultiText(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            Some(GroupPolicyPresentationValueText::ODATA_TYPE) => {
                Self::Text(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            other => {
                if let Some(odata_type) = other {
                    debug!(
                        odata_type,
                        "unrecognized groupPolicyPresentationValue type, decoding as base"
                    );
                }
                Self::Other(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
        };
        Ok(presentation_value)
    }
}
