//! ContentZen API - HTTP client for the ContentZen CMS REST API.
//!
//! This crate provides a typed client covering documents, collections,
//! media, and webhooks. It handles bearer authentication, per-operation
//! status checks, JSON decoding and single-shot media transfer. There is no
//! retry, caching, or pagination handling: each method is one round trip.

pub mod client;
pub mod endpoints;
pub mod response;

// Re-export key types
pub use client::{ApiClient, Expect};
pub use response::DataEnvelope;
pub use cz_models::{
    Collection, CollectionField, CollectionSchema, Document, DocumentState, Media, Webhook,
};
