//! OData plumbing shared by every model
//!
//! # Overview
//!
//! Discriminator inspection, the `additional_data` map type, the generic
//! collection response wrapper, and thin JSON helpers. No paging or
//! transport logic lives here; `@odata.nextLink` is carried as data for the
//! caller to act on.

mod types;

pub use types::{
    discriminator_of, from_json_str, from_json_value, to_json_string, to_json_value,
    AdditionalData, Collection, ODATA_TYPE,
};

#[cfg(test)]
mod tests;
