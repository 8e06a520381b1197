//! API endpoint modules organized by resource.
//!
//! Each module adds typed methods on `ApiClient` for one group of endpoints.

pub mod collections;
pub mod documents;
pub mod media;
pub mod public;
pub mod webhooks;
