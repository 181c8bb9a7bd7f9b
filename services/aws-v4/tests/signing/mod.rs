mod standard;

use bytes::Bytes;
use chrono::{TimeZone, Utc};
use rgw_admin_aws_v4::RequestSigner;
use rgw_admin_core::{Context, Credential, Signer, StaticClock};

pub fn init_signer(token: Option<&str>) -> Signer<RequestSigner> {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_clock(StaticClock(
        Utc.with_ymd_and_hms(2022, 8, 15, 16, 50, 12).unwrap(),
    ));
    let mut cred = Credential::new("access_key_id", "secret_access_key");
    if let Some(token) = token {
        cred = cred.with_session_token(token);
    }

    Signer::new(ctx, RequestSigner::new("s3", "default"), cred)
}

pub fn request(method: http::Method, uri: &str, body: &'static str) -> http::Request<Bytes> {
    let mut req = http::Request::new(Bytes::from_static(body.as_bytes()));
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().expect("url must be valid");

    req
}
