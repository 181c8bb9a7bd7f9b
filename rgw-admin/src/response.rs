use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde_json::Value;

use crate::{Error, Result};

/// Decoded answer of the admin API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    value: Option<Value>,
}

impl ApiResponse {
    /// Wrap a response without judging its status.
    ///
    /// A body that is empty or not JSON leaves [`ApiResponse::value`] unset.
    pub fn new(resp: http::Response<Bytes>) -> Self {
        let (parts, body) = resp.into_parts();
        let value = serde_json::from_slice(&body).ok();

        Self {
            status: parts.status,
            headers: parts.headers,
            value,
        }
    }

    /// Decode a response, turning a non-2xx status into [`Error::Api`].
    ///
    /// The error code is the `Code` field of the error document, falling
    /// back to the status reason.
    pub fn from_response(resp: http::Response<Bytes>) -> Result<Self> {
        let (parts, body) = resp.into_parts();

        if !parts.status.is_success() {
            let code = serde_json::from_slice::<Value>(&body)
                .ok()
                .as_ref()
                .and_then(|v| v.get("Code"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| {
                    parts
                        .status
                        .canonical_reason()
                        .unwrap_or("Unknown")
                        .to_string()
                });

            return Err(Error::Api {
                code,
                status: parts.status,
            });
        }

        let value = if body.is_empty() {
            None
        } else {
            Some(serde_json::from_slice(&body)?)
        };

        Ok(Self {
            status: parts.status,
            headers: parts.headers,
            value,
        })
    }

    /// HTTP status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Whether the status is 2xx.
    pub fn succeeded(&self) -> bool {
        self.status.is_success()
    }

    /// Whether the status is not 2xx.
    pub fn failed(&self) -> bool {
        !self.succeeded()
    }

    /// Whether the decoded object has a non-null field `name`.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field `name` of the decoded object. A `null` field reads as absent.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.value
            .as_ref()
            .and_then(|v| v.get(name))
            .filter(|v| !v.is_null())
    }

    /// Field `name` of the decoded object, or `default`.
    pub fn get_or<'a>(&'a self, name: &str, default: &'a Value) -> &'a Value {
        self.get(name).unwrap_or(default)
    }

    /// Decoded body.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Consume the response and return the decoded body.
    pub fn into_value(self) -> Option<Value> {
        self.value
    }
}
