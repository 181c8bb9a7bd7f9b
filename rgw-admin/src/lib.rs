#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub use rgw_admin_core::{
    Clock, Context, Credential, Env, HttpSend, OsEnv, SignRequest, Signer, SigningRequest,
    StaticClock, StaticEnv, SystemClock,
};

/// AWS signature version 2.
pub mod v2 {
    pub use rgw_admin_aws_v2::*;
}

/// AWS signature version 4.
pub mod v4 {
    pub use rgw_admin_aws_v4::*;
}

mod client;
pub use client::Client;

mod config;
pub use config::{Config, SignatureVersion};

pub mod constants;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::{default_context, default_context_with_client};

mod error;
pub use error::{Error, Result};

mod middleware;
pub use middleware::{sign, signing_middleware, RequestSigner, SigningMiddleware};

mod request;
pub use request::ApiRequest;

pub mod resources;

mod response;
pub use response::ApiResponse;
