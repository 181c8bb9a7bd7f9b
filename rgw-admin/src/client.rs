use std::time::Duration;

use bytes::Bytes;
use log::debug;
use rgw_admin_core::Context;

use crate::middleware::{signing_middleware, SigningMiddleware};
use crate::resources::{Bucket, Info, Usage, User};
use crate::{ApiRequest, ApiResponse, Config, Result};

/// Client of the RADOS Gateway admin API.
///
/// ```no_run
/// use rgw_admin::{Client, Config};
///
/// # async fn example() -> rgw_admin::Result<()> {
/// let client = Client::new("http://gateway", Config::new("access key", "secret key"))?;
/// let buckets = client.bucket().list().await?;
/// println!("{:?}", buckets.value());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    endpoint: String,
    config: Config,
    signer: SigningMiddleware,
}

impl Client {
    /// Create a client for `endpoint`, e.g. `http://gateway`.
    ///
    /// Requests are sent through [`default_context`](crate::default_context)
    /// when the `default-context` feature is enabled. Without it a
    /// transport must be installed with [`Client::with_context`].
    pub fn new(endpoint: impl Into<String>, config: Config) -> Result<Self> {
        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            return Err(rgw_admin_core::Error::config_invalid("endpoint must not be empty").into());
        }

        #[cfg(feature = "default-context")]
        let ctx = crate::default_context();
        #[cfg(not(feature = "default-context"))]
        let ctx = Context::new();

        let signer = signing_middleware(ctx, &config)?;
        Ok(Self {
            endpoint,
            config,
            signer,
        })
    }

    /// Use `ctx` for the transport, environment and clock.
    pub fn with_context(mut self, ctx: Context) -> Result<Self> {
        self.signer = signing_middleware(ctx, &self.config)?;
        Ok(self)
    }

    /// Endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Config of this client.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Context used to sign and send requests.
    pub fn context(&self) -> &Context {
        self.signer.context()
    }

    /// Build and sign `req` without sending it.
    pub fn sign(&self, req: ApiRequest) -> Result<http::Request<Bytes>> {
        let req = req.into_http(&self.endpoint, self.config.admin_path())?;
        Ok(self.signer.sign(&req)?)
    }

    /// Build `req` as a presigned URL valid for `expires_in`.
    pub fn presign(&self, req: ApiRequest, expires_in: Duration) -> Result<http::Request<Bytes>> {
        let req = req.into_http(&self.endpoint, self.config.admin_path())?;
        Ok(self.signer.sign_query(&req, expires_in)?)
    }

    /// Sign and send `req`, decoding the response.
    pub async fn send(&self, req: ApiRequest) -> Result<ApiResponse> {
        let req = self.sign(req)?;
        debug!("sending {} {}", req.method(), req.uri());

        let resp = self.context().http_send(req).await?;
        debug!("admin api responded {}", resp.status());

        ApiResponse::from_response(resp)
    }

    /// Bucket operations.
    pub fn bucket(&self) -> Bucket<'_> {
        Bucket::new(self)
    }

    /// User operations.
    pub fn user(&self) -> User<'_> {
        User::new(self)
    }

    /// Usage operations.
    pub fn usage(&self) -> Usage<'_> {
        Usage::new(self)
    }

    /// Cluster info.
    pub fn info(&self) -> Info<'_> {
        Info::new(self)
    }
}
