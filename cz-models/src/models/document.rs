//! Document entity model.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::null_as_default;

/// A single content record inside a collection.
///
/// The payload shape is defined by the owning collection's schema and is kept
/// as a free-form JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Server-assigned identifier; empty for documents not yet created.
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub uuid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payload: Map<String, Value>,
    /// Language tag, e.g. "en".
    #[serde(default, deserialize_with = "null_as_default")]
    pub lang: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: DocumentState,
}

impl Document {
    /// Build a new (not yet created) document.
    pub fn new(lang: impl Into<String>, state: DocumentState, payload: Map<String, Value>) -> Self {
        Self {
            uuid: String::new(),
            payload,
            lang: lang.into(),
            state,
        }
    }

    /// Look up a top-level payload value.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.payload.get(name)
    }

    /// Look up a top-level payload value as a string.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.payload.get(name).and_then(|v| v.as_str())
    }

    pub fn is_published(&self) -> bool {
        self.state == DocumentState::Published
    }
}

/// Publication state of a document.
///
/// States the client does not know about are preserved verbatim in `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentState {
    #[default]
    Draft,
    Published,
    Other(String),
}

impl DocumentState {
    pub fn as_str(&self) -> &str {
        match self {
            DocumentState::Draft => "draft",
            DocumentState::Published => "published",
            DocumentState::Other(s) => s,
        }
    }
}

impl From<String> for DocumentState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "draft" => DocumentState::Draft,
            "published" => DocumentState::Published,
            _ => DocumentState::Other(s),
        }
    }
}

impl From<&str> for DocumentState {
    fn from(s: &str) -> Self {
        DocumentState::from(s.to_string())
    }
}

impl From<DocumentState> for String {
    fn from(state: DocumentState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for DocumentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
