//! AWS signature version 2 builder
use std::collections::HashSet;
use std::fmt::Write;
use std::time::Duration;

use http::header::{AUTHORIZATION, CONTENT_TYPE, DATE};
use http::HeaderValue;
use log::debug;
use once_cell::sync::Lazy;
use rgw_admin_core::canonical::{content_md5, expires, CONTENT_MD5};
use rgw_admin_core::hash::base64_hmac_sha1;
use rgw_admin_core::time::DateTime;
use rgw_admin_core::{Context, Credential, Error, Result};
use rgw_admin_core::{SignRequest, SigningMethod, SigningRequest};

use crate::constants::*;

/// RequestSigner that implements AWS signature version 2.
///
/// - [Signing and authenticating REST requests](https://docs.aws.amazon.com/AmazonS3/latest/userguide/RESTAuthentication.html)
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestSigner;

impl RequestSigner {
    /// Create a builder.
    pub fn new() -> Self {
        Self
    }
}

impl SignRequest for RequestSigner {
    fn sign_request(
        &self,
        ctx: &Context,
        req: &mut SigningRequest,
        cred: &Credential,
        expires_in: Option<Duration>,
    ) -> Result<()> {
        let now = ctx.now();
        let method = SigningMethod::from(expires_in);

        let md5 = content_md5(req)?;
        let date = match method {
            SigningMethod::Header => expires(req, now)?,
            SigningMethod::Query(d) => expires_at(now, d)?.to_string(),
        };

        if let Some(token) = &cred.session_token {
            let mut value: HeaderValue = token.parse()?;
            value.set_sensitive(true);
            req.headers.insert(X_AMZ_SECURITY_TOKEN, value);
        }

        let string_to_sign = string_to_sign(req, &md5, &date)?;
        let signature =
            base64_hmac_sha1(cred.secret_access_key.as_bytes(), string_to_sign.as_bytes());

        if !md5.is_empty() {
            req.headers.insert(CONTENT_MD5, md5.parse()?);
        }

        match method {
            SigningMethod::Header => {
                req.headers.insert(DATE, date.parse()?);
                req.headers.insert(AUTHORIZATION, {
                    let mut value: HeaderValue =
                        format!("AWS {}:{}", cred.access_key_id, signature).parse()?;
                    value.set_sensitive(true);

                    value
                });
            }
            SigningMethod::Query(_) => {
                req.headers.remove(AUTHORIZATION);
                req.query_push(AWS_ACCESS_KEY_ID, &cred.access_key_id);
                req.query_push(EXPIRES, date);
                req.query_push(SIGNATURE, signature);
            }
        }

        Ok(())
    }
}

fn expires_at(now: DateTime, expires_in: Duration) -> Result<i64> {
    let delta = chrono::TimeDelta::from_std(expires_in)
        .map_err(|e| Error::request_invalid("expires_in is out of range").with_source(e))?;
    let at = now
        .checked_add_signed(delta)
        .ok_or_else(|| Error::request_invalid("expires_in is out of range"))?;

    Ok(at.timestamp())
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// VERB + "\n" +
/// Content-MD5 + "\n" +
/// Content-Type + "\n" +
/// Date + "\n" +
/// CanonicalizedAmzHeaders +
/// CanonicalizedResource;
/// ```
fn string_to_sign(req: &SigningRequest, md5: &str, date: &str) -> Result<String> {
    let mut s = String::new();
    writeln!(&mut s, "{}", req.method.as_str())?;
    writeln!(&mut s, "{md5}")?;
    writeln!(&mut s, "{}", req.header_get_or_default(&CONTENT_TYPE)?)?;
    writeln!(&mut s, "{date}")?;
    s.write_str(&canonicalize_amz_headers(req)?)?;
    s.write_str(&canonicalize_resource(req))?;

    debug!("string to sign: {}", &s);
    Ok(s)
}

/// Every `x-amz-*` header as a `name:value\n` line, sorted by name.
fn canonicalize_amz_headers(req: &SigningRequest) -> Result<String> {
    let headers = req.header_to_vec_with_prefix(X_AMZ_PREFIX)?;
    if headers.is_empty() {
        return Ok(String::new());
    }

    let mut s = SigningRequest::header_to_string(headers, ":", "\n");
    s.push('\n');
    Ok(s)
}

fn canonicalize_resource(req: &SigningRequest) -> String {
    let params = req.query_to_vec_with_filter(is_sub_resource);
    let params_str = SigningRequest::query_to_string(params, "=", "&");

    if params_str.is_empty() {
        req.path.to_string()
    } else {
        format!("{}?{params_str}", req.path)
    }
}

fn is_sub_resource(param: &str) -> bool {
    SUBRESOURCES.contains(param)
}

// Sub-resources are case sensitive.
static SUBRESOURCES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "acl",
        "cors",
        "delete",
        "lifecycle",
        "location",
        "logging",
        "notification",
        "partNumber",
        "policy",
        "quota",
        "requestPayment",
        "response-cache-control",
        "response-content-disposition",
        "response-content-encoding",
        "response-content-language",
        "response-content-type",
        "response-expires",
        "restore",
        "tagging",
        "torrent",
        "uploadId",
        "uploads",
        "versionId",
        "versioning",
        "versions",
        "website",
    ])
});
