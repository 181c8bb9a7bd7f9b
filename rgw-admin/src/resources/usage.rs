//! Usage operations, served below `usage`.
use super::Args;
use crate::{ApiRequest, ApiResponse, Client, Result};

const USAGE: &str = "usage";

/// Usage info, filtered by `args` such as `uid`, `start` or `end`.
pub fn info(args: Args<'_>) -> ApiRequest {
    ApiRequest::get(USAGE).args(args.iter().copied())
}

/// Trim usage info.
pub fn trim(args: Args<'_>) -> ApiRequest {
    ApiRequest::delete(USAGE).args(args.iter().copied())
}

/// Usage operations bound to a [`Client`].
#[derive(Debug, Clone, Copy)]
pub struct Usage<'a> {
    client: &'a Client,
}

impl<'a> Usage<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// See [`info`].
    pub async fn info(&self, args: Args<'_>) -> Result<ApiResponse> {
        self.client.send(info(args)).await
    }

    /// See [`trim`].
    pub async fn trim(&self, args: Args<'_>) -> Result<ApiResponse> {
        self.client.send(trim(args)).await
    }
}
