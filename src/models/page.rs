//! SharePoint site page models

use crate::models::{BaseItem, CanvasLayout, ServerProcessedContent, WebPart};
use crate::odata::AdditionalData;
use serde::{Deserialize, Serialize};

/// A page in the site pages list of a site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitePage {
    /// Inherited base-item fields
    #[serde(flatten)]
    pub base: BaseItem,

    /// Layout of the content on the page, including horizontal sections and
    /// the vertical section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_layout: Option<CanvasLayout>,

    /// Content type of the page. Inherited from baseItem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentTypeInfo>,

    /// Name of the page layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_layout: Option<PageLayoutType>,

    /// Promotion kind of the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion_kind: Option<PagePromotionType>,

    /// Publishing status and version of the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publishing_state: Option<PublicationFacet>,

    /// Reaction counts for the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactions: Option<ReactionsFacet>,

    /// Whether comments are shown at the bottom of the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_comments: Option<bool>,

    /// Whether recommended pages are shown at the bottom of the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_recommended_pages: Option<bool>,

    /// URL of the page's thumbnail image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_web_url: Option<String>,

    /// Title of the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Title area of the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_area: Option<TitleArea>,

    /// Web parts on the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_parts: Option<Vec<WebPart>>,
}

impl SitePage {
    /// Discriminator stamped by [`Self::new`]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.sitePage";

    /// Create a site page with the discriminator set
    pub fn new() -> Self {
        let mut base = BaseItem::new();
        base.entity.odata_type = Some(Self::ODATA_TYPE.to_string());
        Self {
            base,
            canvas_layout: None,
            content_type: None,
            page_layout: None,
            promotion_kind: None,
            publishing_state: None,
            reactions: None,
            show_comments: None,
            show_recommended_pages: None,
            thumbnail_web_url: None,
            title: None,
            title_area: None,
            web_parts: None,
        }
    }
}

impl Default for SitePage {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Page enums
// ============================================================================

graph_enum!(
    /// Layout of a site page
    PageLayoutType {
        /// Reserved by the service
        MicrosoftReserved = "microsoftReserved",
        /// A regular article page
        #[default]
        Article = "article",
        /// The site home page
        Home = "home",
        /// Values the service may add later
        UnknownFutureValue = "unknownFutureValue",
    }
);

graph_enum!(
    /// Promotion state of a site page
    PagePromotionType {
        /// Reserved by the service
        MicrosoftReserved = "microsoftReserved",
        /// A regular page
        #[default]
        Page = "page",
        /// A news post
        NewsPost = "newsPost",
        /// Values the service may add later
        UnknownFutureValue = "unknownFutureValue",
    }
);

graph_enum!(
    /// Layout of a title area
    TitleAreaLayoutType {
        /// Image and title
        #[default]
        ImageAndTitle = "imageAndTitle",
        /// Plain title
        Plain = "plain",
        /// Color block behind the title
        ColorBlock = "colorBlock",
        /// Title overlapping the image
        Overlap = "overlap",
        /// Values the service may add later
        UnknownFutureValue = "unknownFutureValue",
    }
);

graph_enum!(
    /// Text alignment of a title area
    TitleAreaTextAlignmentType {
        /// Left aligned
        #[default]
        Left = "left",
        /// Centered
        Center = "center",
        /// Values the service may add later
        UnknownFutureValue = "unknownFutureValue",
    }
);

// ============================================================================
// Page complex types
// ============================================================================

/// Content type information of an item
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeInfo {
    /// Identifier of the content type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Name of the content type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Properties not described by the model
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Publishing status of an item
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationFacet {
    /// State of publication: `published` or `checkout`. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Version of the published item. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,

    /// Properties not described by the model
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Reaction counts for a page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionsFacet {
    /// Number of comments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<i64>,

    /// Number of likes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like_count: Option<i64>,

    /// Number of shares
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_count: Option<i64>,

    /// Properties not described by the model
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Title area on a SharePoint page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleArea {
    /// Alternative text on the title area
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_text: Option<String>,

    /// Whether the title area has a gradient effect enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_gradient_effect: Option<bool>,

    /// URL of the image in the title area
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_web_url: Option<String>,

    /// Layout of the title area
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<TitleAreaLayoutType>,

    /// Collections of data processed by server-side services such as search
    /// index and link fixup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_processed_content: Option<ServerProcessedContent>,

    /// Whether the author should be shown in the title area
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_author: Option<bool>,

    /// Whether the published date should be shown in the title area
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_published_date: Option<bool>,

    /// Whether the text block above the title should be shown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_text_block_above_title: Option<bool>,

    /// The text above the title line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_above_title: Option<String>,

    /// Text alignment of the title area
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_alignment: Option<TitleAreaTextAlignmentType>,

    /// Properties not described by the model
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}
