use crate::{Context, Credential, Result, SigningRequest};
use std::fmt::Debug;
use std::time::Duration;

/// SignRequest is the trait used by signer to sign the request.
///
/// Implementations are pure transforms: everything they need is read from
/// `ctx`, `req` and `cred`, and the only state they touch is the
/// [`SigningRequest`] they are handed.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Sign the request in place.
    ///
    /// ## Credential
    ///
    /// The `cred` parameter is the credential required by the signer to sign the request.
    ///
    /// ## Expires In
    ///
    /// The `expires_in` parameter specifies the expiration time for the result.
    /// With `Some`, the signature is carried by the query string instead of the
    /// `Authorization` header.
    fn sign_request(
        &self,
        ctx: &Context,
        req: &mut SigningRequest,
        cred: &Credential,
        expires_in: Option<Duration>,
    ) -> Result<()>;
}
