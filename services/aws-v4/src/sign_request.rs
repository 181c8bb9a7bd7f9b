use crate::constants::*;
use http::{header, HeaderValue};
use log::debug;
use percent_encoding::{percent_decode_str, utf8_percent_encode};
use rgw_admin_core::canonical::{canonical_query_string, AWS_QUERY_ENCODE_SET, AWS_URI_ENCODE_SET};
use rgw_admin_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use rgw_admin_core::time::{format_date, format_iso8601, DateTime};
use rgw_admin_core::{Context, Credential, Error, Result};
use rgw_admin_core::{SignRequest, SigningMethod, SigningRequest};
use std::fmt::Write;
use std::time::Duration;

/// RequestSigner that implement AWS SigV4.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
#[derive(Debug, Clone)]
pub struct RequestSigner {
    service: String,
    region: String,
}

impl RequestSigner {
    /// Create a new builder for AWS V4 signer.
    pub fn new(service: &str, region: &str) -> Self {
        Self {
            service: service.into(),
            region: region.into(),
        }
    }

    /// Service name placed in the credential scope.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Region placed in the credential scope.
    pub fn region(&self) -> &str {
        &self.region
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
        if self.region.is_empty() {
            return Err(Error::config_invalid("region is required for signature v4"));
        }
        if self.service.is_empty() {
            return Err(Error::config_invalid(
                "service is required for signature v4",
            ));
        }

        // One instant for the date header, the scope and the signing key.
        let now = ctx.now();
        let method = SigningMethod::from(expires_in);

        let payload = payload_hash(req, method)?;
        canonicalize_header(req, cred, method, &payload, now)?;
        canonicalize_query(req, cred, method, now, &self.service, &self.region)?;

        // build canonical request and string to sign.
        let creq = canonical_request_string(req, &payload)?;
        debug!("calculated canonical request: {creq}");
        let encoded_req = hex_sha256(creq.as_bytes());

        // Scope: "20220313/<region>/<service>/aws4_request"
        let scope = format!(
            "{}/{}/{}/aws4_request",
            format_date(now),
            self.region,
            self.service
        );
        debug!("calculated scope: {scope}");

        // StringToSign:
        //
        // AWS4-HMAC-SHA256
        // 20220313T072004Z
        // 20220313/<region>/<service>/aws4_request
        // <hashed_canonical_request>
        let string_to_sign = {
            let mut f = String::new();
            writeln!(f, "{AWS4_HMAC_SHA256}")?;
            writeln!(f, "{}", format_iso8601(now))?;
            writeln!(f, "{}", &scope)?;
            write!(f, "{}", &encoded_req)?;
            f
        };
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key =
            generate_signing_key(&cred.secret_access_key, now, &self.region, &self.service);
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        match method {
            SigningMethod::Query(_) => req.query_push(X_AMZ_SIGNATURE, signature),
            SigningMethod::Header => {
                let mut authorization: HeaderValue = format!(
                    "{AWS4_HMAC_SHA256} Credential={}/{}, SignedHeaders={}, Signature={}",
                    cred.access_key_id,
                    scope,
                    req.header_name_to_vec_sorted().join(";"),
                    signature
                )
                .parse()?;
                authorization.set_sensitive(true);

                req.headers.insert(header::AUTHORIZATION, authorization);
            }
        }

        Ok(())
    }
}

/// Resolve the payload hash.
///
/// A caller-supplied `x-amz-content-sha256` wins. Otherwise header signing
/// hashes the body and presigned requests leave it unsigned.
fn payload_hash(req: &SigningRequest, method: SigningMethod) -> Result<String> {
    if let Some(v) = req.headers.get(X_AMZ_CONTENT_SHA_256) {
        return Ok(v.to_str()?.to_string());
    }

    Ok(match method {
        SigningMethod::Header => hex_sha256(&req.body),
        SigningMethod::Query(_) => UNSIGNED_PAYLOAD.to_string(),
    })
}

fn canonical_request_string(req: &SigningRequest, payload: &str) -> Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    // Insert method
    writeln!(f, "{}", req.method)?;
    // Insert encoded path
    let path = percent_decode_str(&req.path).decode_utf8()?;
    writeln!(f, "{}", utf8_percent_encode(&path, &AWS_URI_ENCODE_SET))?;
    // Insert query
    writeln!(
        f,
        "{}",
        canonical_query_string(&req.query, &AWS_QUERY_ENCODE_SET)
    )?;
    // Insert signed headers
    let signed_headers = req.header_name_to_vec_sorted();
    for name in signed_headers.iter() {
        writeln!(f, "{}:{}", name, req.header_value_joined(name)?)?;
    }
    writeln!(f)?;
    writeln!(f, "{}", signed_headers.join(";"))?;
    write!(f, "{payload}")?;

    Ok(f)
}

fn canonicalize_header(
    req: &mut SigningRequest,
    cred: &Credential,
    method: SigningMethod,
    payload: &str,
    now: DateTime,
) -> Result<()> {
    // Header names and values need to be normalized according to Step 4 of https://docs.aws.amazon.com/general/latest/gr/sigv4-create-canonical-request.html
    for (_, value) in req.headers.iter_mut() {
        SigningRequest::header_value_normalize(value)
    }

    // A signature of an earlier attempt must not be signed itself.
    req.headers.remove(header::AUTHORIZATION);

    // Insert HOST header if not present.
    if req.headers.get(header::HOST).is_none() {
        req.headers
            .insert(header::HOST, req.authority.as_str().parse()?);
    }

    if method == SigningMethod::Header {
        req.headers
            .insert(X_AMZ_DATE, HeaderValue::try_from(format_iso8601(now))?);

        if req.headers.get(X_AMZ_CONTENT_SHA_256).is_none() {
            req.headers
                .insert(X_AMZ_CONTENT_SHA_256, HeaderValue::try_from(payload)?);
        }

        // Insert X_AMZ_SECURITY_TOKEN header if security token exists.
        if let Some(token) = &cred.session_token {
            let mut value = HeaderValue::from_str(token)?;
            // Set token value sensitive to valid leaking.
            value.set_sensitive(true);

            req.headers.insert(X_AMZ_SECURITY_TOKEN, value);
        }
    }

    Ok(())
}

fn canonicalize_query(
    req: &mut SigningRequest,
    cred: &Credential,
    method: SigningMethod,
    now: DateTime,
    service: &str,
    region: &str,
) -> Result<()> {
    let SigningMethod::Query(expire) = method else {
        return Ok(());
    };

    req.query_push(X_AMZ_ALGORITHM, AWS4_HMAC_SHA256);
    req.query_push(
        X_AMZ_CREDENTIAL,
        format!(
            "{}/{}/{}/{}/aws4_request",
            cred.access_key_id,
            format_date(now),
            region,
            service
        ),
    );
    req.query_push(X_AMZ_DATE_QUERY, format_iso8601(now));
    req.query_push(X_AMZ_EXPIRES, expire.as_secs().to_string());
    let signed_headers = req.header_name_to_vec_sorted().join(";");
    req.query_push(X_AMZ_SIGNED_HEADERS, signed_headers);

    if let Some(token) = &cred.session_token {
        req.query_push(X_AMZ_SECURITY_TOKEN_QUERY, token);
    }

    Ok(())
}

fn generate_signing_key(secret: &str, time: DateTime, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), format_date(time).as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), "aws4_request".as_bytes())
}
