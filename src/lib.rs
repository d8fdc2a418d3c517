//! # Microsoft Graph beta models
//!
//! Typed, serde-backed models for the Microsoft Graph beta API (OData),
//! as consumed by M365 data connectors.
//!
//! ## Features
//!
//! - **Plain data models**: one struct per API resource or complex type,
//!   optional fields, camelCase wire names
//! - **Inheritance via flattening**: every entity embeds its parent type,
//!   bottoming out at [`models::Entity`]
//! - **Lossless round-trips**: properties the crate does not model are
//!   preserved in each model's `additional_data` map
//! - **Polymorphic dispatch**: family enums select the concrete type from
//!   the `@odata.type` discriminator, falling back to the base type for
//!   unknown values
//!
//! ## Quick Start
//!
//! ```rust
//! use graph_beta_models::models::SitePage;
//! use graph_beta_models::odata::from_json_str;
//!
//! let page: SitePage = from_json_str(
//!     r##"{"@odata.type": "#microsoft.graph.sitePage", "title": "Home"}"##,
//! ).unwrap();
//! assert_eq!(page.title.as_deref(), Some("Home"));
//! ```
//!
//! This crate is a marshaling layer only: no HTTP transport, request
//! building, paging, retries, or auth. Those belong to the surrounding
//! connector code.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// OData plumbing: discriminators, collections, additional data
pub mod odata;

/// Graph beta model types
pub mod models;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use odata::{AdditionalData, Collection, ODATA_TYPE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
