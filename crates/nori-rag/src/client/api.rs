//! RetrievalBackend trait implementation for HttpBackend.

use async_trait::async_trait;
use tracing::debug;

use crate::request::OutgoingRequest;
use crate::{BackendReply, RagError, RetrievalBackend};

use super::http::{transport_error, HttpBackend};

#[async_trait]
impl RetrievalBackend for HttpBackend {
    async fn send(&self, request: &OutgoingRequest) -> Result<BackendReply, RagError> {
        debug!(url = %self.config.url, "retrieval backend request");

        let response = self
            .http
            .post(&self.config.url)
            .headers(self.headers.clone())
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        debug!(status, bytes = body.len(), "retrieval backend response");
        Ok(BackendReply { status, body })
    }
}
