//! Integration tests against realistic Graph beta payloads
//!
//! Exercises the full decode path the way connector code uses it: collection
//! envelope → concrete entity → nested complex types, plus the round-trip
//! guarantee (every property the service sent is reproduced on serialize).

// The nested page fixtures expand past json!'s default recursion budget.
#![recursion_limit = "256"]

use graph_beta_models::models::{
    AnyEntity, GroupPolicyPresentation, HorizontalSectionLayoutType, PageLayoutType,
    PagePromotionType, SectionEmphasisType, Site, SitePage, WebPart,
};
use graph_beta_models::odata::{from_json_value, to_json_value};
use graph_beta_models::Collection;
use pretty_assertions::assert_eq;
use serde_json::json;

/// A site page payload shaped like the beta `GET /sites/{id}/pages` items,
/// without timestamp properties so raw JSON equality holds exactly.
fn sample_site_page() -> serde_json::Value {
    json!({
        "@odata.type": "#microsoft.graph.sitePage",
        "id": "65e59907-59d5-44ff-a038-7109a7bf9e12",
        "name": "Home.aspx",
        "webUrl": "https://contoso.sharepoint.com/SitePages/Home.aspx",
        "title": "Home",
        "pageLayout": "home",
        "promotionKind": "page",
        "showComments": false,
        "showRecommendedPages": true,
        "publishingState": {"level": "published", "versionId": "1.0"},
        "reactions": {"commentCount": 3, "likeCount": 12},
        "titleArea": {
            "enableGradientEffect": true,
            "layout": "imageAndTitle",
            "showAuthor": true,
            "textAlignment": "left",
            "serverProcessedContent": {
                "imageSources": [{"key": "imageSource", "value": "/SiteAssets/banner.jpg"}]
            }
        },
        "canvasLayout": {
            "horizontalSections": [{
                "id": "1",
                "emphasis": "netural",
                "layout": "twoColumns",
                "columns": [
                    {
                        "id": "1",
                        "width": 6,
                        "webparts": [{
                            "@odata.type": "#microsoft.graph.textWebPart",
                            "id": "c3688c0f-e1a6-4f72-a1c6-0ff612c525f5",
                            "innerHtml": "<h2>Welcome</h2>"
                        }]
                    },
                    {
                        "id": "2",
                        "width": 6,
                        "webparts": [{
                            "@odata.type": "#microsoft.graph.standardWebPart",
                            "id": "8e4cb4b7-cad2-4bbe-9a4b-16f265ef6ae1",
                            "webPartType": "d1d91016-032f-456d-98a4-721247c305e8",
                            "data": {
                                "dataVersion": "1.9",
                                "title": "Image",
                                "properties": {"imageSourceType": 2, "altText": ""},
                                "serverProcessedContent": {
                                    "imageSources": [{"key": "imageSource", "value": "/SiteAssets/photo.jpg"}],
                                    "customMetadata": [{"key": "imageSource", "value": {"siteId": "s-1"}}]
                                }
                            }
                        }]
                    }
                ]
            }],
            "verticalSection": {
                "emphasis": "soft",
                "webparts": [{
                    "@odata.type": "#microsoft.graph.contosoWeatherWebPart",
                    "id": "0f4bbb94-9a5c-4c3b-befa-a8eef9f7bc9b",
                    "city": "Oslo"
                }]
            }
        }
    })
}

#[test]
fn site_page_decodes_nested_layout() {
    let page: SitePage = from_json_value(sample_site_page()).unwrap();

    assert_eq!(page.title.as_deref(), Some("Home"));
    assert_eq!(page.page_layout, Some(PageLayoutType::Home));
    assert_eq!(page.promotion_kind, Some(PagePromotionType::Page));
    assert_eq!(
        page.publishing_state.as_ref().unwrap().level.as_deref(),
        Some("published")
    );

    let layout = page.canvas_layout.as_ref().unwrap();
    let sections = layout.horizontal_sections.as_ref().unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].emphasis, Some(SectionEmphasisType::Neutral));
    assert_eq!(
        sections[0].layout,
        Some(HorizontalSectionLayoutType::TwoColumns)
    );

    let columns = sections[0].columns.as_ref().unwrap();
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0].width, Some(6));
    let webparts = columns[0].webparts.as_ref().unwrap();
    assert!(matches!(webparts[0], WebPart::Text(_)));

    // the vertical section carries a web part type this crate doesn't know
    let vertical = layout.vertical_section.as_ref().unwrap();
    let WebPart::Other(unknown) = &vertical.webparts.as_ref().unwrap()[0] else {
        panic!("expected fallback web part");
    };
    assert_eq!(
        unknown.entity.additional_data.get("city"),
        Some(&json!("Oslo"))
    );
}

#[test]
fn site_page_round_trips_byte_for_byte() {
    let body = sample_site_page();
    let page: SitePage = from_json_value(body.clone()).unwrap();
    assert_eq!(to_json_value(&page).unwrap(), body);
}

#[test]
fn site_page_reparse_equals_original_model() {
    let page: SitePage = from_json_value(sample_site_page()).unwrap();
    let reparsed: SitePage = from_json_value(to_json_value(&page).unwrap()).unwrap();
    assert_eq!(reparsed, page);
}

#[test]
fn page_collection_envelope() {
    let body = json!({
        "@odata.context": "https://graph.microsoft.com/beta/$metadata#sites('s-1')/pages",
        "@odata.nextLink": "https://graph.microsoft.com/beta/sites/s-1/pages?$skiptoken=Paged%3dTRUE",
        "value": [sample_site_page()]
    });

    let pages: Collection<SitePage> = from_json_value(body.clone()).unwrap();
    assert_eq!(pages.value.len(), 1);
    assert!(pages.has_next_page());
    assert_eq!(to_json_value(&pages).unwrap(), body);
}

#[test]
fn site_with_timestamps_round_trips_at_model_level() {
    let site: Site = from_json_value(json!({
        "@odata.type": "#microsoft.graph.site",
        "id": "contoso.sharepoint.com,2C712604-1370-44E7,2D2C2C58-3F11-4565",
        "createdDateTime": "2016-06-01T07:15:53Z",
        "lastModifiedDateTime": "2023-02-10T22:01:17Z",
        "displayName": "Team Site",
        "root": {},
        "siteCollection": {"hostname": "contoso.sharepoint.com"},
        "sharepointIds": {
            "siteId": "2C712604-1370-44E7",
            "webId": "2D2C2C58-3F11-4565",
            "tenantId": "t-1"
        }
    }))
    .unwrap();

    assert_eq!(site.display_name.as_deref(), Some("Team Site"));
    assert!(site.root.is_some());
    assert_eq!(
        site.site_collection.as_ref().unwrap().hostname.as_deref(),
        Some("contoso.sharepoint.com")
    );

    // chrono reformats the UTC offset, so compare models rather than bytes
    let reparsed: Site = from_json_value(to_json_value(&site).unwrap()).unwrap();
    assert_eq!(reparsed, site);
}

#[test]
fn entity_dispatch_over_mixed_collection() {
    let body = json!({
        "value": [
            {"@odata.type": "#microsoft.graph.sitePage", "id": "1", "title": "A"},
            {"@odata.type": "#microsoft.graph.groupPolicyDefinition", "id": "2",
             "displayName": "Policy", "presentations": [
                 {"@odata.type": "#microsoft.graph.groupPolicyPresentationTextBox",
                  "id": "3", "label": "Server", "maxLength": 256, "required": true}
             ]},
            {"@odata.type": "#microsoft.graph.mailFolder", "id": "4", "displayName": "Inbox"}
        ]
    });

    let entities: Collection<AnyEntity> = from_json_value(body.clone()).unwrap();
    assert_eq!(entities.value.len(), 3);

    assert!(matches!(entities.value[0], AnyEntity::SitePage(_)));

    let AnyEntity::GroupPolicyDefinition(definition) = &entities.value[1] else {
        panic!("expected definition");
    };
    let presentations = definition.presentations.as_ref().unwrap();
    let GroupPolicyPresentation::TextBox(text_box) = &presentations[0] else {
        panic!("expected text box presentation");
    };
    assert_eq!(text_box.max_length, Some(256));

    assert!(matches!(entities.value[2], AnyEntity::Other(_)));

    // unknown entity types still round-trip the whole envelope
    assert_eq!(to_json_value(&entities).unwrap(), body);
}
