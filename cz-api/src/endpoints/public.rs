//! Public document endpoints. These never send the API token.

use tracing::debug;

use cz_core::constants::PUBLISHED_STATE;
use cz_core::error::CzResult;
use cz_models::Document;

use crate::client::ApiClient;
use crate::response::DataEnvelope;

impl ApiClient {
    /// List the published documents of a public collection.
    ///
    /// The `state=published` filter is always sent; whether the service
    /// enforces it on its own is not assumed.
    pub async fn public_documents(&self, collection_id: &str) -> CzResult<Vec<Document>> {
        let env: DataEnvelope<Document> = self
            .get_public_json(&format!(
                "/documents/collection/{collection_id}?state={PUBLISHED_STATE}"
            ))
            .await?;
        let docs = env.into_data();
        debug!("fetched {} public documents from {collection_id}", docs.len());
        Ok(docs)
    }

    /// Fetch one published document from a public collection.
    pub async fn public_document(
        &self,
        collection_id: &str,
        document_id: &str,
    ) -> CzResult<Document> {
        self.get_public_json(&format!("/documents/collection/{collection_id}/{document_id}"))
            .await
    }
}
