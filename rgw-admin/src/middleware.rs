use std::time::Duration;

use bytes::Bytes;
use log::debug;
use rgw_admin_core::{Context, Credential, SignRequest, Signer, SigningRequest};

use crate::{Config, Result, SignatureVersion};

/// Signer selected by [`Config::signature_version`].
#[derive(Debug, Clone)]
pub enum RequestSigner {
    /// AWS signature version 2.
    V2(rgw_admin_aws_v2::RequestSigner),
    /// AWS signature version 4.
    V4(rgw_admin_aws_v4::RequestSigner),
}

impl RequestSigner {
    /// Pick the signer for `config`.
    ///
    /// The config is validated first, so a V4 signer is never built without
    /// a region or service.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        Ok(match config.signature_version() {
            SignatureVersion::V2 => RequestSigner::V2(rgw_admin_aws_v2::RequestSigner::new()),
            SignatureVersion::V4 => RequestSigner::V4(rgw_admin_aws_v4::RequestSigner::new(
                config.service(),
                config.region(),
            )),
        })
    }

    /// Signature version of this signer.
    pub fn version(&self) -> SignatureVersion {
        match self {
            RequestSigner::V2(_) => SignatureVersion::V2,
            RequestSigner::V4(_) => SignatureVersion::V4,
        }
    }
}

impl SignRequest for RequestSigner {
    fn sign_request(
        &self,
        ctx: &Context,
        req: &mut SigningRequest,
        cred: &Credential,
        expires_in: Option<Duration>,
    ) -> rgw_admin_core::Result<()> {
        debug!("signing request with signature {}", self.version());

        match self {
            RequestSigner::V2(s) => s.sign_request(ctx, req, cred, expires_in),
            RequestSigner::V4(s) => s.sign_request(ctx, req, cred, expires_in),
        }
    }
}

/// Attaches authentication to admin requests right before they are sent.
///
/// Every call reads the clock of its [`Context`] again, so signing the same
/// unsigned request twice yields two independent signatures.
pub type SigningMiddleware = Signer<RequestSigner>;

/// Build the [`SigningMiddleware`] described by `config`.
pub fn signing_middleware(ctx: Context, config: &Config) -> Result<SigningMiddleware> {
    let signer = RequestSigner::from_config(config)?;
    Ok(Signer::new(ctx, signer, config.credential()))
}

/// Sign `req` with the version selected by `config`.
///
/// ```
/// use rgw_admin::{sign, Config, Context};
///
/// # fn main() -> rgw_admin::Result<()> {
/// let req = http::Request::get("http://gateway/admin/metadata/bucket")
///     .body(bytes::Bytes::new())?;
/// let signed = sign(&Context::new(), &req, &Config::new("access key", "secret key"))?;
///
/// assert!(signed.headers()["authorization"]
///     .to_str()
///     .unwrap()
///     .starts_with("AWS access key:"));
/// # Ok(())
/// # }
/// ```
pub fn sign(
    ctx: &Context,
    req: &http::Request<Bytes>,
    config: &Config,
) -> Result<http::Request<Bytes>> {
    Ok(signing_middleware(ctx.clone(), config)?.sign(req)?)
}
