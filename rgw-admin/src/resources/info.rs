//! Cluster info, served at `info`.
use crate::{ApiRequest, ApiResponse, Client, Result};

/// Cluster info such as the storage backends and their fsid.
pub fn info() -> ApiRequest {
    ApiRequest::get("info")
}

/// Cluster info bound to a [`Client`].
#[derive(Debug, Clone, Copy)]
pub struct Info<'a> {
    client: &'a Client,
}

impl<'a> Info<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// See [`info`].
    pub async fn get(&self) -> Result<ApiResponse> {
        self.client.send(info()).await
    }
}
