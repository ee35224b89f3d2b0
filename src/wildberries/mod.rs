//! Wildberries card API: HTTP client, request headers, body encoding, and data models.

pub mod client;
pub mod encoding;
pub mod headers;
pub mod models;

pub use client::{ProductSource, WbClient};
pub use models::{LookupResult, Product, ProductResponse};
