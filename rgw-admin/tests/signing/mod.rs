use pretty_assertions::assert_eq;
use regex::Regex;
use rgw_admin::{Config, Result, SignatureVersion};
use serde_json::json;

use crate::mock::{client, empty, v2_client};

fn v4_config() -> Config {
    Config::new("acesskey", "secretkey")
        .with_signature_version(SignatureVersion::V4)
        .with_region("default")
}

#[tokio::test]
async fn test_set_quota_is_signed_with_v2() -> Result<()> {
    let (client, http) = v2_client(vec![empty()]);

    client
        .bucket()
        .set_quota("foo", "mybucket", json!({"enabled": true}))
        .await?;

    let req = &http.requests()[0];
    let re = Regex::new(r"^AWS acesskey:[a-zA-Z0-9+/]{27}=$").unwrap();
    assert!(re.is_match(req.header("authorization")), "{req:?}");
    assert_eq!(req.header("date"), "Mon, 15 Aug 2022 16:50:12 +0000");
    // md5 of `{"enabled":true}`
    assert_eq!(
        req.header("content-md5"),
        "ebd28baaaa212dca587bc607653bbaf0"
    );
    Ok(())
}

#[tokio::test]
async fn test_set_quota_is_signed_with_v4() -> Result<()> {
    let (client, http) = client(v4_config(), vec![empty()]);

    client
        .bucket()
        .set_quota("foo", "mybucket", json!({"enabled": true}))
        .await?;

    let req = &http.requests()[0];
    assert_eq!(
        req.uri,
        "http://gateway/admin/bucket?quota=&uid=foo&bucket=mybucket"
    );
    let re = Regex::new(
        r"^AWS4-HMAC-SHA256 Credential=acesskey/20220815/default/s3/aws4_request, SignedHeaders=accept;content-type;host;x-amz-content-sha256;x-amz-date, Signature=[0-9a-f]{64}$",
    )
    .unwrap();
    assert!(re.is_match(req.header("authorization")), "{req:?}");
    assert_eq!(req.header("x-amz-date"), "20220815T165012Z");
    assert_eq!(
        req.header("x-amz-content-sha256"),
        "26b3426b2593763c96d0890b4a77a0bbf66d13fc512b0c6b138a23c290f30a2a"
    );
    Ok(())
}

#[tokio::test]
async fn test_session_token_is_sent() -> Result<()> {
    let config = Config {
        session_token: Some("token".to_string()),
        ..v4_config()
    };
    let (client, http) = client(config, vec![empty()]);

    client.info().get().await?;

    let req = &http.requests()[0];
    assert_eq!(req.header("x-amz-security-token"), "token");
    assert!(req
        .header("authorization")
        .contains("SignedHeaders=accept;host;x-amz-content-sha256;x-amz-date;x-amz-security-token,"));
    Ok(())
}

#[tokio::test]
async fn test_signing_is_stable_for_a_fixed_clock() -> Result<()> {
    let (client, http) = client(v4_config(), vec![empty(), empty()]);

    client.bucket().list().await?;
    client.bucket().list().await?;

    let requests = http.requests();
    assert_eq!(
        requests[0].header("authorization"),
        requests[1].header("authorization")
    );
    Ok(())
}

#[tokio::test]
async fn test_transport_failure_is_reported() {
    let (client, http) = v2_client(vec![]);

    let err = client.bucket().list().await.unwrap_err();

    match err {
        rgw_admin::Error::Core(err) => {
            assert_eq!(err.kind(), rgw_admin_core::ErrorKind::Unexpected)
        }
        err => panic!("unexpected error: {err:?}"),
    }
    assert_eq!(http.requests().len(), 1);
}

#[test]
fn test_config_from_toml_drives_the_signer() -> Result<()> {
    let config = Config::from_toml(
        r#"
access_key_id = "acesskey"
secret_access_key = "secretkey"
signature_version = "v4"
region = "default"
"#,
    )?;
    let (client, _) = client(config, vec![]);

    let req = client.sign(rgw_admin::resources::info::info())?;
    assert!(req.headers()["authorization"]
        .to_str()
        .unwrap()
        .starts_with("AWS4-HMAC-SHA256 Credential=acesskey/20220815/default/s3/aws4_request"));
    Ok(())
}
