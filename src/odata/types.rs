//! OData types and helpers
//!
//! The discriminator constant, additional-data map, and the generic
//! collection response wrapper returned by every Graph list endpoint.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire name of the OData type discriminator property
pub const ODATA_TYPE: &str = "@odata.type";

/// Properties not described by a model, preserved for round-tripping
pub type AdditionalData = serde_json::Map<String, Value>;

/// Read the `@odata.type` discriminator from a JSON value.
///
/// Returns `None` when the value is not an object, the property is absent,
/// or the property is not a string. Callers treat all three the same way:
/// fall back to the base type.
pub fn discriminator_of(value: &Value) -> Option<&str> {
    value.as_object()?.get(ODATA_TYPE)?.as_str()
}

/// Generic OData collection response.
///
/// Every Graph list endpoint wraps its results in this envelope. The link
/// and count annotations are data only; following `@odata.nextLink` is the
/// caller's job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Collection<T> {
    /// The page of results
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,

    /// URL of the next page, if any
    #[serde(
        rename = "@odata.nextLink",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub next_link: Option<String>,

    /// Delta link for incremental queries
    #[serde(
        rename = "@odata.deltaLink",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub delta_link: Option<String>,

    /// Total count, present when requested with `$count`
    #[serde(
        rename = "@odata.count",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub count: Option<i64>,

    /// Metadata context URL
    #[serde(
        rename = "@odata.context",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub context: Option<String>,

    /// Annotations not modeled above
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl<T> Collection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            value: Vec::new(),
            next_link: None,
            delta_link: None,
            count: None,
            context: None,
            additional_data: AdditionalData::new(),
        }
    }

    /// Whether the server reported another page
    pub fn has_next_page(&self) -> bool {
        self.next_link.is_some()
    }
}

// ============================================================================
// JSON helpers
// ============================================================================

/// Deserialize a model from a JSON string
pub fn from_json_str<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Deserialize a model from an already-parsed JSON value.
///
/// The value is known to be valid JSON, so any failure here is a shape
/// mismatch and reported as [`Error::Decode`].
pub fn from_json_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|err| Error::decode(err.to_string()))
}

/// Serialize a model to a JSON string
pub fn to_json_string<T: Serialize>(model: &T) -> Result<String> {
    Ok(serde_json::to_string(model)?)
}

/// Serialize a model to a JSON value
pub fn to_json_value<T: Serialize>(model: &T) -> Result<Value> {
    Ok(serde_json::to_value(model)?)
}
