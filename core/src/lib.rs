//! Core components for signing RADOS Gateway admin requests.
//!
//! This crate provides the foundational types and traits shared by the
//! signature implementations and the admin client.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds implementations for HTTP sending, environment access and the clock
//! - **SigningRequest**: A private copy of an outgoing request that signers are free to mutate
//! - **SignRequest**: The trait every signature version implements
//! - **Signer**: The orchestrator that snapshots a request, signs the copy and hands back a new request
//!
//! ## Example
//!
//! ```
//! use rgw_admin_core::{Context, Credential, Signer, SignRequest, SigningRequest, Result};
//! use std::time::Duration;
//!
//! // Implement request signer
//! #[derive(Debug)]
//! struct MySigner;
//!
//! impl SignRequest for MySigner {
//!     fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         req: &mut SigningRequest,
//!         cred: &Credential,
//!         _expires_in: Option<Duration>,
//!     ) -> Result<()> {
//!         req.headers
//!             .insert("x-my-key", cred.access_key_id.parse()?);
//!         Ok(())
//!     }
//! }
//!
//! # fn example() -> Result<()> {
//! let signer = Signer::new(
//!     Context::new(),
//!     MySigner,
//!     Credential::new("access_key", "secret_key"),
//! );
//!
//! let req = http::Request::get("http://gateway/admin/info")
//!     .body(bytes::Bytes::new())?;
//! let signed = signer.sign(&req)?;
//! assert!(signed.headers().contains_key("x-my-key"));
//! assert!(!req.headers().contains_key("x-my-key"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Traits
//!
//! - [`HttpSend`]: For sending HTTP requests
//! - [`Env`]: For environment variable access
//! - [`Clock`]: For reading the signing time
//! - [`SignRequest`]: For service-specific request signing
//!
//! ## Utilities
//!
//! - [`canonical`]: Canonical forms shared by every signature version
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod canonical;
pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Clock;
pub use context::Context;
pub use context::Env;
pub use context::HttpSend;
pub use context::NoopHttpSend;
pub use context::OsEnv;
pub use context::StaticClock;
pub use context::StaticEnv;
pub use context::SystemClock;

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::SignRequest;
mod credential;
pub use credential::Credential;
mod request;
pub use request::{SigningMethod, SigningRequest};
mod signer;
pub use signer::Signer;
