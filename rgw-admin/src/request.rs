use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderValue, Method};
use percent_encoding::utf8_percent_encode;
use rgw_admin_core::canonical::AWS_QUERY_ENCODE_SET;
use serde_json::Value;

use crate::Result;

const APPLICATION_JSON: &str = "application/json";

/// An unsigned admin API call.
///
/// `path` is relative to the admin prefix, e.g. `bucket` or
/// `metadata/user`. Query pairs are kept in insertion order and a flag
/// sub-resource is a pair with an empty value.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Resource path below the admin prefix.
    pub path: String,
    /// Query parameters in the order they are sent.
    pub query: Vec<(String, String)>,
    /// JSON document sent as the request body.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Create a request without parameters.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Shortcut for `GET`.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Shortcut for `PUT`.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Shortcut for `POST`.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Shortcut for `DELETE`.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a flag sub-resource such as `quota`, sent as `quota=`.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.query.push((name.into(), String::new()));
        self
    }

    /// Append a query parameter.
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append query parameters in order.
    pub fn args<K, V>(mut self, args: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(args.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Send `body` as a JSON document.
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Build the http request against `endpoint`.
    ///
    /// ```
    /// use rgw_admin::ApiRequest;
    ///
    /// let req = ApiRequest::put("bucket")
    ///     .flag("quota")
    ///     .arg("uid", "foo")
    ///     .arg("bucket", "mybucket")
    ///     .into_http("http://gateway", "admin")
    ///     .unwrap();
    /// assert_eq!(
    ///     req.uri(),
    ///     "http://gateway/admin/bucket?quota=&uid=foo&bucket=mybucket"
    /// );
    /// ```
    pub fn into_http(self, endpoint: &str, admin_path: &str) -> Result<http::Request<Bytes>> {
        let mut uri = endpoint.trim_end_matches('/').to_string();
        for segment in [admin_path, self.path.as_str()] {
            let segment = segment.trim_matches('/');
            if !segment.is_empty() {
                uri.push('/');
                uri.push_str(segment);
            }
        }

        for (idx, (k, v)) in self.query.iter().enumerate() {
            uri.push(if idx == 0 { '?' } else { '&' });
            uri.extend(utf8_percent_encode(k, &AWS_QUERY_ENCODE_SET));
            uri.push('=');
            uri.extend(utf8_percent_encode(v, &AWS_QUERY_ENCODE_SET));
        }

        let mut builder = http::Request::builder()
            .method(self.method)
            .uri(uri)
            .header(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));

        let body = match self.body {
            None => Bytes::new(),
            Some(v) => {
                builder = builder.header(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
                Bytes::from(serde_json::to_vec(&v)?)
            }
        };

        Ok(builder.body(body)?)
    }
}
