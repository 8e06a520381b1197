//! Webhook entity model.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A server-side subscription that calls `url` when any of `events` fires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub uuid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Target URL the service calls.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Event names, e.g. "document.created".
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<String>,
    /// HTTP method used for the outbound call, e.g. "POST".
    #[serde(default, deserialize_with = "null_as_default")]
    pub method: String,
}

impl Webhook {
    pub fn new<I, S>(
        name: impl Into<String>,
        url: impl Into<String>,
        events: I,
        method: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            uuid: String::new(),
            name: name.into(),
            url: url.into(),
            events: events.into_iter().map(Into::into).collect(),
            method: method.into(),
        }
    }

    pub fn subscribes_to(&self, event: &str) -> bool {
        self.events.iter().any(|e| e == event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_new() {
        let wh = Webhook::new(
            "notify",
            "https://example.com/hook",
            ["document.created", "document.updated"],
            "POST",
        );
        assert!(wh.subscribes_to("document.created"));
        assert!(!wh.subscribes_to("media.deleted"));

        let json = serde_json::to_value(&wh).unwrap();
        assert_eq!(json["events"][1], "document.updated");
        assert_eq!(json["method"], "POST");
    }

    #[test]
    fn test_webhook_null_events() {
        let wh: Webhook =
            serde_json::from_str(r#"{"uuid":"w-1","name":"n","events":null}"#).unwrap();
        assert!(wh.events.is_empty());
        assert!(wh.method.is_empty());
    }
}
