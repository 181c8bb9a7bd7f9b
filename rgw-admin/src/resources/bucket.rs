//! Bucket operations, served below `bucket` and `metadata/bucket`.
use serde_json::Value;

use super::Args;
use crate::{ApiRequest, ApiResponse, Client, Result};

const BUCKET: &str = "bucket";

/// List bucket names.
pub fn list() -> ApiRequest {
    ApiRequest::get("metadata/bucket")
}

/// Bucket info, filtered by `args` such as `bucket` or `uid`.
pub fn info(args: Args<'_>) -> ApiRequest {
    ApiRequest::get(BUCKET).args(args.iter().copied())
}

/// Remove a bucket.
pub fn remove(bucket: &str, args: Args<'_>) -> ApiRequest {
    ApiRequest::delete(BUCKET)
        .arg("bucket", bucket)
        .args(args.iter().copied())
}

/// Check the bucket index.
pub fn check(bucket: &str, args: Args<'_>) -> ApiRequest {
    ApiRequest::get(BUCKET)
        .flag("index")
        .arg("bucket", bucket)
        .args(args.iter().copied())
}

/// Link a bucket to the user `uid`.
pub fn link(bucket: &str, uid: &str, args: Args<'_>) -> ApiRequest {
    ApiRequest::put(BUCKET)
        .arg("bucket", bucket)
        .arg("uid", uid)
        .args(args.iter().copied())
}

/// Unlink a bucket from the user `uid`.
pub fn unlink(bucket: &str, uid: &str, args: Args<'_>) -> ApiRequest {
    ApiRequest::post(BUCKET)
        .arg("bucket", bucket)
        .arg("uid", uid)
        .args(args.iter().copied())
}

/// Bucket policy.
pub fn policy(bucket: &str, args: Args<'_>) -> ApiRequest {
    ApiRequest::get(BUCKET)
        .flag("policy")
        .arg("bucket", bucket)
        .args(args.iter().copied())
}

/// Remove an object from a bucket.
pub fn remove_object(bucket: &str, object: &str, args: Args<'_>) -> ApiRequest {
    ApiRequest::delete(BUCKET)
        .arg("bucket", bucket)
        .arg("object", object)
        .args(args.iter().copied())
}

/// Set the quota of a bucket owned by `uid`. `quota` is sent as the body.
pub fn set_quota(uid: &str, bucket: &str, quota: Value) -> ApiRequest {
    ApiRequest::put(BUCKET)
        .flag("quota")
        .arg("uid", uid)
        .arg("bucket", bucket)
        .json(quota)
}

/// Bucket operations bound to a [`Client`].
#[derive(Debug, Clone, Copy)]
pub struct Bucket<'a> {
    client: &'a Client,
}

impl<'a> Bucket<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// See [`list`].
    pub async fn list(&self) -> Result<ApiResponse> {
        self.client.send(list()).await
    }

    /// See [`info`].
    pub async fn info(&self, args: Args<'_>) -> Result<ApiResponse> {
        self.client.send(info(args)).await
    }

    /// See [`remove`].
    pub async fn remove(&self, bucket: &str, args: Args<'_>) -> Result<ApiResponse> {
        self.client.send(remove(bucket, args)).await
    }

    /// See [`check`].
    pub async fn check(&self, bucket: &str, args: Args<'_>) -> Result<ApiResponse> {
        self.client.send(check(bucket, args)).await
    }

    /// See [`link`].
    pub async fn link(&self, bucket: &str, uid: &str, args: Args<'_>) -> Result<ApiResponse> {
        self.client.send(link(bucket, uid, args)).await
    }

    /// See [`unlink`].
    pub async fn unlink(&self, bucket: &str, uid: &str, args: Args<'_>) -> Result<ApiResponse> {
        self.client.send(unlink(bucket, uid, args)).await
    }

    /// See [`policy`].
    pub async fn policy(&self, bucket: &str, args: Args<'_>) -> Result<ApiResponse> {
        self.client.send(policy(bucket, args)).await
    }

    /// See [`remove_object`].
    pub async fn remove_object(
        &self,
        bucket: &str,
        object: &str,
        args: Args<'_>,
    ) -> Result<ApiResponse> {
        self.client.send(remove_object(bucket, object, args)).await
    }

    /// See [`set_quota`].
    pub async fn set_quota(&self, uid: &str, bucket: &str, quota: Value) -> Result<ApiResponse> {
        self.client.send(set_quota(uid, bucket, quota)).await
    }
}
