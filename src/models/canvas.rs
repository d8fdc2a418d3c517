//! Canvas layout models for site pages

use crate::models::{Entity, WebPart};
use serde::{Deserialize, Serialize};

/// Layout of the content on a site page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasLayout {
    /// Inherited entity fields
    #[serde(flatten)]
    pub entity: Entity,

    /// Horizontal sections on the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_sections: Option<Vec<HorizontalSection>>,

    /// Vertical section on the page, if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_section: Option<VerticalSection>,
}

impl CanvasLayout {
    /// Create an empty canvas layout
    pub fn new() -> Self {
        Self::default()
    }
}

/// A horizontal section on a site page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizontalSection {
    /// Inherited entity fields
    #[serde(flatten)]
    pub entity: Entity,

    /// Columns in the section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<HorizontalSectionColumn>>,

    /// Emphasis of the section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<SectionEmphasisType>,

    /// Column layout of the section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<HorizontalSectionLayoutType>,
}

/// A column inside a horizontal section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizontalSectionColumn {
    /// Inherited entity fields
    #[serde(flatten)]
    pub entity: Entity,

    /// Web parts in the column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webparts: Option<Vec<WebPart>>,

    /// Width of the column; sums to 12 across a section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
}

/// The vertical section on a site page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerticalSection {
    /// Inherited entity fields
    #[serde(flatten)]
    pub entity: Entity,

    /// Emphasis of the section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<SectionEmphasisType>,

    /// Web parts in the section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webparts: Option<Vec<WebPart>>,
}

graph_enum!(
    /// Emphasis (background) of a page section
    SectionEmphasisType {
        /// No emphasis
        #[default]
        None = "none",
        /// Neutral emphasis; the service spells the wire value "netural"
        Neutral = "netural",
        /// Soft emphasis
        Soft = "soft",
        /// Strong emphasis
        Strong = "strong",
        /// Values the service may add later
        UnknownFutureValue = "unknownFutureValue",
    }
);

graph_enum!(
    /// Column layout of a horizontal section
    HorizontalSectionLayoutType {
        /// Unset
        #[default]
        None = "none",
        /// One column
        OneColumn = "oneColumn",
        /// Two columns
        TwoColumns = "twoColumns",
        /// Three columns
        ThreeColumns = "threeColumns",
        /// One-third column on the left
        OneThirdLeftColumn = "oneThirdLeftColumn",
        /// One-third column on the right
        OneThirdRightColumn = "oneThirdRightColumn",
        /// Full width
        FullWidth = "fullWidth",
        /// Values the service may add later
        UnknownFutureValue = "unknownFutureValue",
    }
);
