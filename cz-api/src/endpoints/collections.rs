//! Collection management and schema introspection endpoints.

use tracing::debug;

use cz_core::error::CzResult;
use cz_models::{Collection, CollectionField, CollectionSchema};

use crate::client::ApiClient;

impl ApiClient {
    /// List all collections of the project the token belongs to.
    pub async fn collections(&self) -> CzResult<Vec<Collection>> {
        let cols: Vec<Collection> = self.get_json("/collections").await?;
        debug!("fetched {} collections", cols.len());
        Ok(cols)
    }

    /// Get a collection by ID.
    pub async fn collection(&self, collection_id: &str) -> CzResult<Collection> {
        self.get_json(&format!("/collections/{collection_id}")).await
    }

    /// Create a collection and return the stored record.
    pub async fn create_collection(&self, collection: &Collection) -> CzResult<Collection> {
        self.post_json("/collections", collection).await
    }

    /// Update a collection's definition.
    pub async fn update_collection(
        &self,
        collection_id: &str,
        collection: &Collection,
    ) -> CzResult<Collection> {
        self.put_json(&format!("/collections/{collection_id}"), collection)
            .await
    }

    /// Delete a collection.
    pub async fn delete_collection(&self, collection_id: &str) -> CzResult<()> {
        self.delete(&format!("/collections/{collection_id}")).await
    }

    /// Get the schema of a collection. Its shape is defined by the service.
    pub async fn collection_schema(&self, collection_id: &str) -> CzResult<CollectionSchema> {
        self.get_json(&format!("/collections/{collection_id}/schema"))
            .await
    }

    /// Get the field definitions of a collection.
    pub async fn collection_fields(&self, collection_id: &str) -> CzResult<Vec<CollectionField>> {
        self.get_json(&format!("/collections/{collection_id}/fields"))
            .await
    }

    /// List the field type tags the service supports.
    pub async fn field_types(&self) -> CzResult<Vec<String>> {
        self.get_json("/collections/field-types").await
    }
}
