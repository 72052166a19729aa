//! LeFrecce API Client Library
//!
//! This crate wraps the private HTTP API behind lefrecce.it, the
//! Trenitalia booking site.
//!
//! # Features
//! - Location autocomplete and journey search
//! - Login/session handling through a per-client cookie jar
//! - Offer selection, passenger submission and payment
//! - Ticket retrieval, to memory or straight to a file
//!
//! The upstream API is an undocumented third-party contract; responses
//! are returned as raw `serde_json::Value` rather than modeled types.

pub mod api;
pub mod client;
pub mod error;
pub mod params;
pub mod types;

// Re-export main types for convenience
pub use api::LefrecceApi;
pub use client::{ClientConfig, LefrecceClient};
pub use error::{LefrecceError, Result};
pub use params::{SolutionsQuery, Traveler};
pub use types::{NameValue, ReturnFlag, Selection};
