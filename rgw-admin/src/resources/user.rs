//! User operations, served below `user` and `metadata/user`.
use serde_json::Value;

use super::Args;
use crate::{ApiRequest, ApiResponse, Client, Result};

const USER: &str = "user";

/// List user ids.
pub fn list() -> ApiRequest {
    ApiRequest::get("metadata/user")
}

/// User info.
pub fn info(uid: &str, args: Args<'_>) -> ApiRequest {
    ApiRequest::get(USER).arg("uid", uid).args(args.iter().copied())
}

/// Create a user.
pub fn create(uid: &str, display_name: &str, args: Args<'_>) -> ApiRequest {
    ApiRequest::put(USER)
        .arg("uid", uid)
        .arg("display-name", display_name)
        .args(args.iter().copied())
}

/// Modify a user.
pub fn modify(uid: &str, args: Args<'_>) -> ApiRequest {
    ApiRequest::post(USER).arg("uid", uid).args(args.iter().copied())
}

/// Remove a user.
pub fn remove(uid: &str, args: Args<'_>) -> ApiRequest {
    ApiRequest::delete(USER).arg("uid", uid).args(args.iter().copied())
}

fn subuser(req: ApiRequest, uid: &str, name: &str, args: Args<'_>) -> ApiRequest {
    req.flag("subuser")
        .arg("uid", uid)
        .arg("subuser", name)
        .args(args.iter().copied())
}

/// Create a subuser of `uid`.
pub fn create_subuser(uid: &str, name: &str, args: Args<'_>) -> ApiRequest {
    subuser(ApiRequest::put(USER), uid, name, args)
}

/// Modify a subuser of `uid`.
pub fn modify_subuser(uid: &str, name: &str, args: Args<'_>) -> ApiRequest {
    subuser(ApiRequest::post(USER), uid, name, args)
}

/// Remove a subuser of `uid`.
pub fn remove_subuser(uid: &str, name: &str, args: Args<'_>) -> ApiRequest {
    subuser(ApiRequest::delete(USER), uid, name, args)
}

/// Create a key for `uid`.
pub fn create_key(uid: &str, args: Args<'_>) -> ApiRequest {
    ApiRequest::put(USER)
        .flag("key")
        .arg("uid", uid)
        .args(args.iter().copied())
}

/// Remove the key `access_key`.
pub fn remove_key(access_key: &str, args: Args<'_>) -> ApiRequest {
    ApiRequest::delete(USER)
        .flag("key")
        .arg("access-key", access_key)
        .args(args.iter().copied())
}

/// Grant `caps` to `uid`, e.g. `usage=read,write;users=read`.
pub fn add_capability(uid: &str, caps: &str) -> ApiRequest {
    ApiRequest::put(USER)
        .flag("caps")
        .arg("uid", uid)
        .arg("user-caps", caps)
}

/// Revoke `caps` from `uid`.
pub fn remove_capability(uid: &str, caps: &str) -> ApiRequest {
    ApiRequest::delete(USER)
        .flag("caps")
        .arg("uid", uid)
        .arg("user-caps", caps)
}

/// Quota of `uid`; `quota_type` is `user` or `bucket`.
pub fn get_quota(uid: &str, quota_type: &str) -> ApiRequest {
    ApiRequest::get(USER)
        .flag("quota")
        .arg("uid", uid)
        .arg("quota-type", quota_type)
}

/// Set the quota of `uid`. `quota` is sent as the body.
pub fn set_quota(uid: &str, quota_type: &str, quota: Value) -> ApiRequest {
    ApiRequest::put(USER)
        .flag("quota")
        .arg("uid", uid)
        .arg("quota-type", quota_type)
        .json(quota)
}

/// User operations bound to a [`Client`].
#[derive(Debug, Clone, Copy)]
pub struct User<'a> {
    client: &'a Client,
}

impl<'a> User<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// See [`list`].
    pub async fn list(&self) -> Result<ApiResponse> {
        self.client.send(list()).await
    }

    /// See [`info`].
    pub async fn info(&self, uid: &str, args: Args<'_>) -> Result<ApiResponse> {
        self.client.send(info(uid, args)).await
    }

    /// See [`create`].
    pub async fn create(
        &self,
        uid: &str,
        display_name: &str,
        args: Args<'_>,
    ) -> Result<ApiResponse> {
        self.client.send(create(uid, display_name, args)).await
    }

    /// See [`modify`].
    pub async fn modify(&self, uid: &str, args: Args<'_>) -> Result<ApiResponse> {
        self.client.send(modify(uid, args)).await
    }

    /// See [`remove`].
    pub async fn remove(&self, uid: &str, args: Args<'_>) -> Result<ApiResponse> {
        self.client.send(remove(uid, args)).await
    }

    /// See [`create_subuser`].
    pub async fn create_subuser(
        &self,
        uid: &str,
        name: &str,
        args: Args<'_>,
    ) -> Result<ApiResponse> {
        self.client.send(create_subuser(uid, name, args)).await
    }

    /// See [`modify_subuser`].
    pub async fn modify_subuser(
        &self,
        uid: &str,
        name: &str,
        args: Args<'_>,
    ) -> Result<ApiResponse> {
        self.client.send(modify_subuser(uid, name, args)).await
    }

    /// See [`remove_subuser`].
    pub async fn remove_subuser(
        &self,
        uid: &str,
        name: &str,
        args: Args<'_>,
    ) -> Result<ApiResponse> {
        self.client.send(remove_subuser(uid, name, args)).await
    }

    /// See [`create_key`].
    pub async fn create_key(&self, uid: &str, args: Args<'_>) -> Result<ApiResponse> {
        self.client.send(create_key(uid, args)).await
    }

    /// See [`remove_key`].
    pub async fn remove_key(&self, access_key: &str, args: Args<'_>) -> Result<ApiResponse> {
        self.client.send(remove_key(access_key, args)).await
    }

    /// See [`add_capability`].
    pub async fn add_capability(&self, uid: &str, caps: &str) -> Result<ApiResponse> {
        self.client.send(add_capability(uid, caps)).await
    }

    /// See [`remove_capability`].
    pub async fn remove_capability(&self, uid: &str, caps: &str) -> Result<ApiResponse> {
        self.client.send(remove_capability(uid, caps)).await
    }

    /// See [`get_quota`].
    pub async fn get_quota(&self, uid: &str, quota_type: &str) -> Result<ApiResponse> {
        self.client.send(get_quota(uid, quota_type)).await
    }

    /// See [`set_quota`].
    pub async fn set_quota(&self, uid: &str, quota_type: &str, quota: Value) -> Result<ApiResponse> {
        self.client.send(set_quota(uid, quota_type, quota)).await
    }
}
