//! HTTP remote media backend
//!
//! Speaks the remote media service's REST API with basic credentials from
//! [`RemoteStoreConfig`]. Each trait operation is one request; errors are
//! translated pass-through and nothing is retried. The client keeps the
//! transport's default timeout behavior.

use crate::traits::{RemoteAsset, RemoteMedia, StoreError, StoreResult, UploadContext};
use async_trait::async_trait;
use depot_core::{RemoteStoreConfig, StorageKind};
use serde::Deserialize;

/// HTTP implementation of [`RemoteMedia`].
pub struct HttpRemoteMedia {
    client: reqwest::Client,
    config: RemoteStoreConfig,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    resources: Vec<RemoteAsset>,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

/// Flat `key=value|key=value` encoding the remote store uses for context
/// metadata.
fn context_to_wire(context: &UploadContext) -> String {
    format!(
        "original_filename={}|uploaded_by={}|upload_date={}",
        context.original_filename,
        context.uploaded_by,
        context.upload_date.to_rfc3339()
    )
}

impl HttpRemoteMedia {
    pub fn new(config: RemoteStoreConfig) -> Self {
        HttpRemoteMedia {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.cloud_name,
            path
        )
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.basic_auth(&self.config.api_key, Some(&self.config.api_secret))
    }

    /// Surface a non-success response as a store error, reading the body for
    /// the remote's message.
    async fn fail(response: reqwest::Response, operation: &str) -> StoreError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        StoreError::Unknown(format!("{operation} failed with {status}: {body}"))
    }
}

#[async_trait]
impl RemoteMedia for HttpRemoteMedia {
    async fn upload(
        &self,
        key: &str,
        kind: StorageKind,
        bytes: Vec<u8>,
        context: &UploadContext,
    ) -> StoreResult<RemoteAsset> {
        let url = self.endpoint(&format!("{}/upload", kind.as_remote_type()));
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(context.original_filename.clone());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("public_id", key.to_string())
            .text("context", context_to_wire(context));

        let response = self
            .authorized(self.client.post(&url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::fail(response, "upload").await);
        }

        response
            .json::<RemoteAsset>()
            .await
            .map_err(|e| StoreError::Unknown(format!("upload response malformed: {e}")))
    }

    async fn resources(&self, prefix: &str, max_results: usize) -> StoreResult<Vec<RemoteAsset>> {
        let url = self.endpoint("resources/search");
        let response = self
            .authorized(self.client.get(&url))
            .query(&[
                ("expression", format!("public_id:{prefix}*")),
                ("max_results", max_results.to_string()),
                ("with_field", "context".to_string()),
            ])
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::fail(response, "list").await);
        }

        let search = response
            .json::<SearchResponse>()
            .await
            .map_err(|e| StoreError::Unknown(format!("list response malformed: {e}")))?;
        Ok(search.resources)
    }

    async fn destroy(&self, public_id: &str, kind: StorageKind) -> StoreResult<bool> {
        let url = self.endpoint(&format!("{}/destroy", kind.as_remote_type()));
        let response = self
            .authorized(self.client.post(&url))
            .form(&[("public_id", public_id), ("invalidate", "true")])
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::fail(response, "destroy").await);
        }

        let destroy = response
            .json::<DestroyResponse>()
            .await
            .map_err(|e| StoreError::Unknown(format!("destroy response malformed: {e}")))?;

        match destroy.result.as_str() {
            "ok" => Ok(true),
            "not found" => Ok(false),
            other => Err(StoreError::Unknown(format!(
                "destroy returned unexpected result: {other}"
            ))),
        }
    }
}
