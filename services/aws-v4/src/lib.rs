//! AWS signature version 4 for the RADOS Gateway admin API.
//!
//! Both forms are supported: the `Authorization` header and presigned
//! query parameters.
//!
//! ## Example
//!
//! ```
//! use rgw_admin_aws_v4::RequestSigner;
//! use rgw_admin_core::{Context, Credential, Signer};
//!
//! # fn main() -> rgw_admin_core::Result<()> {
//! let signer = Signer::new(
//!     Context::new(),
//!     RequestSigner::new("s3", "default"),
//!     Credential::new("access_key_id", "secret_access_key"),
//! );
//!
//! let req = http::Request::get("http://gateway/admin/usage")
//!     .body(bytes::Bytes::new())?;
//! let signed = signer.sign(&req)?;
//!
//! assert!(signed.headers()["authorization"]
//!     .to_str()?
//!     .starts_with("AWS4-HMAC-SHA256 Credential=access_key_id/"));
//! # Ok(())
//! # }
//! ```

mod constants;

mod sign_request;
pub use sign_request::RequestSigner;
