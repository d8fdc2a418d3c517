//! Error types for the Graph beta model layer
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Note that an unknown `@odata.type` is never an error: polymorphic
//! families fall back to their base type instead.

use thiserror::Error;

/// The main error type for the model layer
#[derive(Error, Debug)]
pub enum Error {
    /// Payload is not valid JSON, or a property has the wrong type
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Payload parsed as JSON but is not the shape the model requires
    #[error("Failed to decode model: {message}")]
    Decode {
        /// What was wrong with the payload
        message: String,
    },

    /// A property the caller requires was absent from the payload
    #[error("Missing required property: {property}")]
    MissingProperty {
        /// Wire name of the absent property
        property: String,
    },
}

impl Error {
    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a missing property error
    pub fn missing_property(property: impl Into<String>) -> Self {
        Self::MissingProperty {
            property: property.into(),
        }
    }
}

/// Result type alias for the model layer
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::decode("expected a JSON object");
        assert_eq!(
            err.to_string(),
            "Failed to decode model: expected a JSON object"
        );

        let err = Error::missing_property("id");
        assert_eq!(err.to_string(), "Missing required property: id");
    }

    #[test]
    fn test_json_parse_conversion() {
        let inner = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = inner.into();
        assert!(err.to_string().starts_with("Failed to parse JSON:"));
    }
}
