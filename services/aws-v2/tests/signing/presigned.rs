use std::time::Duration;

use super::{fixed_context, signer};
use bytes::Bytes;
use pretty_assertions::assert_eq;
use rgw_admin_core::{Credential, Result};

#[test]
fn test_presigned_query() -> Result<()> {
    let signer = signer(fixed_context(), Credential::new("access key", "secret key"));
    let req = http::Request::get("http://gateway/admin/bucket?policy=&bucket=mybucket")
        .body(Bytes::new())?;

    let signed = signer.sign_query(&req, Duration::from_secs(300))?;

    assert!(!signed.headers().contains_key("authorization"));
    assert_eq!(
        signed.uri().query(),
        Some(
            "policy=&bucket=mybucket&AWSAccessKeyId=access%20key&Expires=1660582512\
             &Signature=K5LaxZ6%2FB2vY4MewPnRbXylS4PQ%3D"
        )
    );
    Ok(())
}
