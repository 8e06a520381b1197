//! Media entity model.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Metadata for a binary asset. The bytes themselves go through the
/// upload and download endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub uuid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alt_text: String,
    /// Public URL the service serves the asset from.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

impl Media {
    /// Metadata update carrying only a new alt text.
    pub fn with_alt_text(alt_text: impl Into<String>) -> Self {
        Self {
            alt_text: alt_text.into(),
            ..Self::default()
        }
    }
}
