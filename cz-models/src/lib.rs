//! ContentZen Models - Data records mirroring the service's resources.
//!
//! The client never owns the lifecycle of these records; it only serializes
//! request bodies and deserializes response snapshots. Field names match the
//! service's snake_case wire format.

pub mod models;

// Re-export key types
pub use models::collection::{Collection, CollectionField, CollectionSchema};
pub use models::document::{Document, DocumentState};
pub use models::media::Media;
pub use models::webhook::Webhook;
