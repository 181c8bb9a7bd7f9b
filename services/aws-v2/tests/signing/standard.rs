use super::{fixed_context, json_request, signer};
use http::Method;
use pretty_assertions::assert_eq;
use regex::Regex;
use rgw_admin_core::{Context, Credential, ErrorKind, Result};

#[test]
fn test_request_is_signed() -> Result<()> {
    let signer = signer(Context::new(), Credential::new("access key", "secret key"));
    let req = json_request(Method::GET, "http://gateway/foo", "");

    let signed = signer.sign(&req)?;

    assert_eq!(signed.headers().get_all("date").iter().count(), 1);
    let auth = signed.headers().get_all("authorization");
    assert_eq!(auth.iter().count(), 1);

    let re = Regex::new(r"^AWS access key:([a-zA-Z0-9+/]){27}=$").expect("regex must be valid");
    let value = signed.headers()["authorization"].to_str()?;
    assert!(re.is_match(value), "unexpected authorization: {value}");
    Ok(())
}

#[test]
fn test_known_signature() -> Result<()> {
    let signer = signer(fixed_context(), Credential::new("access key", "secret key"));
    let req = json_request(Method::GET, "http://gateway/foo", "");

    let signed = signer.sign(&req)?;

    assert_eq!(signed.headers()["date"], "Mon, 15 Aug 2022 16:50:12 +0000");
    assert_eq!(
        signed.headers()["authorization"],
        "AWS access key:TKUtF3cqIfvm/zFLHR/AqqDEues="
    );
    Ok(())
}

#[test]
fn test_existing_date_is_signed_verbatim() -> Result<()> {
    let signer = signer(Context::new(), Credential::new("access key", "secret key"));
    let mut req = json_request(Method::GET, "http://gateway/foo", "");
    req.headers_mut().insert(
        "date",
        "Mon, 15 Aug 2022 16:50:12 +0000".parse().expect("must be valid"),
    );

    let signed = signer.sign(&req)?;

    // The wall clock is ignored once the caller pinned the date.
    assert_eq!(
        signed.headers()["authorization"],
        "AWS access key:TKUtF3cqIfvm/zFLHR/AqqDEues="
    );
    Ok(())
}

#[test]
fn test_set_quota_signs_body_digest() -> Result<()> {
    let signer = signer(fixed_context(), Credential::new("access key", "secret key"));
    let req = json_request(
        Method::PUT,
        "http://gateway/admin/bucket?quota=&uid=foo&bucket=mybucket",
        r#"{"enabled":true}"#,
    );

    let signed = signer.sign(&req)?;

    assert_eq!(
        signed.uri().to_string(),
        "http://gateway/admin/bucket?quota=&uid=foo&bucket=mybucket"
    );
    assert_eq!(
        signed.headers()["content-md5"],
        "ebd28baaaa212dca587bc607653bbaf0"
    );
    assert_eq!(
        signed.headers()["authorization"],
        "AWS access key:aVdRjXHTf/ppHq3Jfk/n22CeqJk="
    );
    assert_eq!(signed.body(), req.body());
    assert!(!req.headers().contains_key("authorization"));
    Ok(())
}

#[test]
fn test_session_token_is_signed() -> Result<()> {
    let signer = signer(
        fixed_context(),
        Credential::new("access key", "secret key").with_session_token("token"),
    );
    let mut req = json_request(Method::GET, "http://gateway/foo", "");
    req.headers_mut()
        .append("x-amz-meta-a", "one".parse().expect("must be valid"));
    req.headers_mut()
        .append("x-amz-meta-a", "two".parse().expect("must be valid"));

    let signed = signer.sign(&req)?;

    assert_eq!(signed.headers()["x-amz-security-token"], "token");
    assert!(signed.headers()["x-amz-security-token"].is_sensitive());
    assert_eq!(
        signed.headers()["authorization"],
        "AWS access key:DLPQ9+GDpR0cfBU1HvWm41R8R7g="
    );
    Ok(())
}

#[test]
fn test_resigning_keeps_signature_stable() -> Result<()> {
    let signer = signer(fixed_context(), Credential::new("access key", "secret key"));
    let req = json_request(Method::GET, "http://gateway/admin/bucket?policy=&bucket=b", "");

    let first = signer.sign(&req)?;
    let second = signer.sign(&first)?;

    assert_eq!(
        first.headers()["authorization"],
        second.headers()["authorization"]
    );
    Ok(())
}

#[test]
fn test_empty_credential_is_rejected() {
    let signer = signer(Context::new(), Credential::new("access key", ""));
    let req = json_request(Method::GET, "http://gateway/foo", "");

    let err = signer.sign(&req).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
}
