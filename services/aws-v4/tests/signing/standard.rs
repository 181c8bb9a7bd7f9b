use super::{init_signer, request};
use http::Method;
use pretty_assertions::assert_eq;
use rgw_admin_core::Result;

const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

#[test]
fn test_list_buckets() -> Result<()> {
    let signer = init_signer(None);
    let req = request(Method::GET, "http://gateway/admin/metadata/bucket", "");

    let signed = signer.sign(&req)?;

    assert_eq!(signed.headers()["host"], "gateway");
    assert_eq!(signed.headers()["x-amz-date"], "20220815T165012Z");
    assert_eq!(signed.headers()["x-amz-content-sha256"], EMPTY_SHA256);
    assert_eq!(
        signed.headers()["authorization"],
        "AWS4-HMAC-SHA256 Credential=access_key_id/20220815/default/s3/aws4_request, \
         SignedHeaders=host;x-amz-content-sha256;x-amz-date, \
         Signature=c73d2e18021c81e6678a695fce392a016b2831bd20b8ee4023b0506614bf8574"
    );
    assert!(signed.headers()["authorization"].is_sensitive());
    Ok(())
}

#[test]
fn test_set_quota() -> Result<()> {
    let signer = init_signer(None);
    let mut req = request(
        Method::PUT,
        "http://gateway/admin/bucket?quota=&uid=foo&bucket=mybucket",
        r#"{"enabled":true}"#,
    );
    req.headers_mut().insert(
        "content-type",
        "application/json".parse().expect("must be valid"),
    );

    let signed = signer.sign(&req)?;

    assert_eq!(
        signed.uri().to_string(),
        "http://gateway/admin/bucket?quota=&uid=foo&bucket=mybucket"
    );
    assert_eq!(
        signed.headers()["x-amz-content-sha256"],
        "26b3426b2593763c96d0890b4a77a0bbf66d13fc512b0c6b138a23c290f30a2a"
    );
    assert_eq!(
        signed.headers()["authorization"],
        "AWS4-HMAC-SHA256 Credential=access_key_id/20220815/default/s3/aws4_request, \
         SignedHeaders=content-type;host;x-amz-content-sha256;x-amz-date, \
         Signature=5b7c40f0d9ad571de01623f2a49a11198dc2fdb99d40d6fd85002ebb52d93150"
    );
    assert_eq!(signed.body(), req.body());
    assert!(!req.headers().contains_key("authorization"));
    Ok(())
}

#[test]
fn test_signing_is_deterministic() -> Result<()> {
    let req = request(
        Method::GET,
        "http://gateway/admin/usage?uid=foo&show-entries=true",
        "",
    );

    let first = init_signer(None).sign(&req)?;
    let second = init_signer(None).sign(&req)?;

    assert_eq!(first.headers(), second.headers());
    assert_eq!(first.uri(), second.uri());
    Ok(())
}

#[test]
fn test_query_order_does_not_change_signature() -> Result<()> {
    let signer = init_signer(None);
    let a = request(
        Method::PUT,
        "http://gateway/admin/bucket?quota=&uid=foo&bucket=mybucket",
        "",
    );
    let b = request(
        Method::PUT,
        "http://gateway/admin/bucket?bucket=mybucket&uid=foo&quota=",
        "",
    );

    assert_eq!(
        signer.sign(&a)?.headers()["authorization"],
        signer.sign(&b)?.headers()["authorization"]
    );
    Ok(())
}

#[test]
fn test_session_token_header() -> Result<()> {
    let signer = init_signer(Some("security_token"));
    let req = request(Method::GET, "http://gateway/admin/info", "");

    let signed = signer.sign(&req)?;

    assert_eq!(signed.headers()["x-amz-security-token"], "security_token");
    assert!(signed.headers()["x-amz-security-token"].is_sensitive());
    assert!(signed.headers()["authorization"]
        .to_str()?
        .contains("SignedHeaders=host;x-amz-content-sha256;x-amz-date;x-amz-security-token,"));
    Ok(())
}

#[test]
fn test_stale_date_is_overwritten() -> Result<()> {
    let signer = init_signer(None);
    let mut req = request(Method::GET, "http://gateway/admin/metadata/bucket", "");
    req.headers_mut().insert(
        "x-amz-date",
        "20200101T000000Z".parse().expect("must be valid"),
    );

    let signed = signer.sign(&req)?;

    assert_eq!(signed.headers()["x-amz-date"], "20220815T165012Z");
    assert!(signed.headers()["authorization"]
        .to_str()?
        .ends_with("Signature=c73d2e18021c81e6678a695fce392a016b2831bd20b8ee4023b0506614bf8574"));
    Ok(())
}
