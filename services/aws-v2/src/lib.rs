//! AWS signature version 2 for the RADOS Gateway admin API.
//!
//! The gateway still accepts the legacy `AWS <key>:<signature>` scheme,
//! an HMAC-SHA1 over a short newline separated string-to-sign.
//!
//! ## Example
//!
//! ```
//! use rgw_admin_aws_v2::RequestSigner;
//! use rgw_admin_core::{Context, Credential, Signer};
//!
//! # fn main() -> rgw_admin_core::Result<()> {
//! let signer = Signer::new(
//!     Context::new(),
//!     RequestSigner::new(),
//!     Credential::new("access key", "secret key"),
//! );
//!
//! let req = http::Request::get("http://gateway/admin/bucket?bucket=mybucket")
//!     .body(bytes::Bytes::new())?;
//! let signed = signer.sign(&req)?;
//!
//! assert!(signed.headers()["authorization"]
//!     .to_str()?
//!     .starts_with("AWS access key:"));
//! # Ok(())
//! # }
//! ```

mod constants;

mod sign_request;
pub use sign_request::RequestSigner;
