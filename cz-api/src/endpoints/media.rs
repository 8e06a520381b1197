//! Media endpoints: metadata CRUD plus single-shot upload and download.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use cz_core::constants::UPLOAD_FORM_FIELD;
use cz_core::error::{CzError, CzResult};
use cz_models::Media;

use crate::client::ApiClient;

impl ApiClient {
    /// List all media of the project.
    pub async fn media_list(&self) -> CzResult<Vec<Media>> {
        self.get_json("/media/ls").await
    }

    /// Get media metadata by ID.
    pub async fn media(&self, media_id: &str) -> CzResult<Media> {
        self.get_json(&format!("/media/{media_id}")).await
    }

    /// Update media metadata (alt text).
    pub async fn update_media(&self, media_id: &str, media: &Media) -> CzResult<Media> {
        self.put_json(&format!("/media/{media_id}"), media).await
    }

    /// Delete a media file.
    pub async fn delete_media(&self, media_id: &str) -> CzResult<()> {
        self.delete(&format!("/media/{media_id}")).await
    }

    /// Upload a local file and return the created media record.
    ///
    /// The file is read fully into memory and sent as the `file` part of a
    /// multipart form, named after the path's base name.
    pub async fn upload_media(&self, file_path: impl AsRef<Path>) -> CzResult<Media> {
        self.require_token()?;

        let path = file_path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| UPLOAD_FORM_FIELD.to_string());
        debug!("uploading {file_name} ({} bytes)", bytes.len());

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/octet-stream")
            .map_err(|e| CzError::Http(format!("invalid mime type: {e}")))?;
        let form = Form::new().part(UPLOAD_FORM_FIELD, part);

        let resp = self.post_multipart("/media/upload", form).await?;
        ApiClient::parse_response(resp).await
    }

    /// Download a media file to `dest`, creating or truncating it.
    ///
    /// The destination is only opened after the server accepted the
    /// request. A failure mid-stream leaves whatever was written so far.
    /// Returns the number of bytes written.
    pub async fn download_media(&self, media_id: &str, dest: impl AsRef<Path>) -> CzResult<u64> {
        let mut resp = self.get(&format!("/media/{media_id}/download")).await?;

        let dest = dest.as_ref();
        let mut file = tokio::fs::File::create(dest).await?;
        let mut written: u64 = 0;

        while let Some(chunk) = resp.chunk().await.map_err(ApiClient::classify_error)? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        debug!("downloaded {media_id} to {} ({written} bytes)", dest.display());
        Ok(written)
    }
}
