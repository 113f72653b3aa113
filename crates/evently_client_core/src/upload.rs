//! Upload collaborator: turns staged files into permanent URLs.

use crate::api::{self, ApiClient};
use crate::error::UploadError;
use crate::models::UploadedFile;
use crate::staging::StagedFile;
use async_trait::async_trait;

#[async_trait(?Send)]
pub trait UploadService {
    /// One result per file, in order. An empty result is a failure.
    async fn upload(&self, files: Vec<StagedFile>) -> Result<Vec<UploadedFile>, UploadError>;
}

/// Multipart POST to the upload route (`{upload_url}?slug={endpoint}`).
#[derive(Clone, Debug)]
pub struct HttpUploadService {
    api: ApiClient,
}

impl HttpUploadService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl UploadService for HttpUploadService {
    async fn upload(&self, files: Vec<StagedFile>) -> Result<Vec<UploadedFile>, UploadError> {
        let config = self.api.config();
        let count = files.len();
        let mut form = reqwest::multipart::Form::new();
        for f in files {
            let part = reqwest::multipart::Part::bytes(f.bytes)
                .file_name(f.name)
                .mime_str(&f.content_type)
                .map_err(|e| UploadError::Request(e.to_string()))?;
            form = form.part("files", part);
        }
        tracing::debug!(files = count, endpoint = %config.upload_endpoint, "uploading images");
        let resp = self
            .api
            .request(reqwest::Method::POST, &config.upload_url)
            .query(&[("slug", config.upload_endpoint.as_str())])
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Request(e.to_string()))?;
        let status = resp.status().as_u16();
        let text = resp
            .text()
            .await
            .map_err(|e| UploadError::Request(e.to_string()))?;
        api::uploads_from_response(status, &text)
    }
}
