mod presigned;
mod standard;

use bytes::Bytes;
use chrono::{TimeZone, Utc};
use rgw_admin_aws_v2::RequestSigner;
use rgw_admin_core::{Context, Credential, Signer, StaticClock};

/// `Mon, 15 Aug 2022 16:50:12 +0000`
pub fn fixed_context() -> Context {
    let _ = env_logger::builder().is_test(true).try_init();

    Context::new().with_clock(StaticClock(
        Utc.with_ymd_and_hms(2022, 8, 15, 16, 50, 12).unwrap(),
    ))
}

pub fn signer(ctx: Context, cred: Credential) -> Signer<RequestSigner> {
    Signer::new(ctx, RequestSigner::new(), cred)
}

pub fn json_request(method: http::Method, uri: &str, body: &'static str) -> http::Request<Bytes> {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .header("Accept", "application/json")
        .header("Content-Type", "application/json")
        .body(Bytes::from_static(body.as_bytes()))
        .expect("request must be valid")
}
