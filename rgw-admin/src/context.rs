use rgw_admin_core::{Context, OsEnv};
use rgw_admin_http_send_reqwest::ReqwestHttpSend;

/// Context reading the process environment and sending requests with a
/// default [`reqwest::Client`].
pub fn default_context() -> Context {
    default_context_with_client(reqwest::Client::new())
}

/// Same as [`default_context`] but sending requests with `client`.
pub fn default_context_with_client(client: reqwest::Client) -> Context {
    Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::new(client))
}
