use crate::utils::RedactHeaders;
use crate::{Context, Credential, Error, Result, SignRequest, SigningRequest};
use bytes::Bytes;
use log::debug;
use std::sync::Arc;
use std::time::Duration;

/// Signer is the main struct used to sign the request.
///
/// The incoming request is never touched: it is copied into a
/// [`SigningRequest`], the copy is signed and the result is returned as a
/// new request. A failed signing leaves nothing half-applied.
#[derive(Clone, Debug)]
pub struct Signer<S: SignRequest> {
    ctx: Context,
    builder: Arc<S>,
    credential: Credential,
}

impl<S: SignRequest> Signer<S> {
    /// Create a new signer.
    pub fn new(ctx: Context, builder: S, credential: Credential) -> Self {
        Self {
            ctx,
            builder: Arc::new(builder),
            credential,
        }
    }

    /// Get the context this signer reads its clock from.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Get the request builder.
    pub fn builder(&self) -> &S {
        &self.builder
    }

    /// Sign the request with an `Authorization` header.
    pub fn sign(&self, req: &http::Request<Bytes>) -> Result<http::Request<Bytes>> {
        self.sign_inner(req, None)
    }

    /// Sign the request into its query string, valid for `expires_in`.
    pub fn sign_query(
        &self,
        req: &http::Request<Bytes>,
        expires_in: Duration,
    ) -> Result<http::Request<Bytes>> {
        self.sign_inner(req, Some(expires_in))
    }

    fn sign_inner(
        &self,
        req: &http::Request<Bytes>,
        expires_in: Option<Duration>,
    ) -> Result<http::Request<Bytes>> {
        if !self.credential.is_valid() {
            return Err(Error::credential_invalid(
                "access key id and secret access key must not be empty",
            ));
        }

        let mut signing = SigningRequest::build(req)?;
        self.builder
            .sign_request(&self.ctx, &mut signing, &self.credential, expires_in)?;
        debug!(
            "signed {} {}{} with {:?}, headers: {:?}",
            signing.method,
            signing.authority,
            signing.path,
            self.builder,
            RedactHeaders(&signing.headers)
        );

        signing.apply()
    }
}
