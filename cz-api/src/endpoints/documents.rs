//! Authenticated document endpoints.

use tracing::debug;

use cz_core::error::CzResult;
use cz_models::Document;

use crate::client::ApiClient;

impl ApiClient {
    /// List every document in a collection, regardless of state.
    pub async fn documents(&self, collection_id: &str) -> CzResult<Vec<Document>> {
        let docs: Vec<Document> = self.get_json(&format!("/documents/{collection_id}")).await?;
        debug!("fetched {} documents from {collection_id}", docs.len());
        Ok(docs)
    }

    /// Create a document in a collection and return the stored record.
    pub async fn create_document(&self, collection_id: &str, doc: &Document) -> CzResult<Document> {
        self.post_json(&format!("/documents/{collection_id}"), doc).await
    }

    /// Replace a document's content.
    pub async fn update_document(
        &self,
        collection_id: &str,
        document_id: &str,
        doc: &Document,
    ) -> CzResult<Document> {
        self.put_json(&format!("/documents/{collection_id}/{document_id}"), doc)
            .await
    }

    /// Delete a document.
    pub async fn delete_document(&self, collection_id: &str, document_id: &str) -> CzResult<()> {
        self.delete(&format!("/documents/{collection_id}/{document_id}"))
            .await
    }
}
