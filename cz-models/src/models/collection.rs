//! Collection and collection-field entity models.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Schema description returned by the schema endpoint.
///
/// The shape is defined by the service and differs per collection, so it is
/// kept as an ordered JSON object rather than a fixed record.
pub type CollectionSchema = serde_json::Map<String, serde_json::Value>;

/// A named, schema-defined grouping of documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub uuid: String,
    /// Machine name, used in paths and queries.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Whether published documents are readable without a token.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_public: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: Vec<CollectionField>,
}

impl Collection {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub fn with_field(mut self, field: CollectionField) -> Self {
        self.fields.push(field);
        self
    }

    /// Find a field definition by name.
    pub fn field(&self, name: &str) -> Option<&CollectionField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// One field definition in a collection schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionField {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Type tag, one of the values returned by the field-types endpoint.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub field_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "is_false", deserialize_with = "null_as_default")]
    pub unique: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl CollectionField {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            ..Self::default()
        }
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_wire_names() {
        let field = CollectionField::new("title", "text").required();
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["required"], true);
        assert!(json.get("unique").is_none());
        assert!(json.get("field_type").is_none());
    }

    #[test]
    fn test_unique_serialized_only_when_set() {
        let field = CollectionField::new("slug", "text").unique();
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["unique"], true);
    }

    #[test]
    fn test_collection_from_server_json() {
        let col: Collection = serde_json::from_value(json!({
            "uuid": "col-1",
            "name": "posts",
            "display_name": "Posts",
            "description": null,
            "is_public": true,
            "fields": [
                {"name": "title", "type": "text", "display_name": "Title", "required": true}
            ]
        }))
        .unwrap();
        assert_eq!(col.uuid, "col-1");
        assert!(col.is_public);
        assert!(col.description.is_empty());
        let title = col.field("title").unwrap();
        assert_eq!(title.field_type, "text");
        assert!(title.required);
        assert!(!title.unique);
    }

    #[test]
    fn test_builder() {
        let col = Collection::new("posts", "Posts")
            .with_description("Blog posts")
            .public(true)
            .with_field(CollectionField::new("title", "text").display_name("Title").required());
        assert_eq!(col.fields.len(), 1);
        assert_eq!(col.fields[0].display_name, "Title");
        assert!(col.is_public);
    }
}
