//! Admin API resources.
//!
//! Each module exposes plain builder functions returning [`ApiRequest`]
//! values and a handle pairing those builders with [`Client::send`].
//! Extra caller arguments are appended after the fixed parameters of a
//! call.
//!
//! [`ApiRequest`]: crate::ApiRequest
//! [`Client::send`]: crate::Client::send

pub mod bucket;
pub use bucket::Bucket;

pub mod info;
pub use info::Info;

pub mod usage;
pub use usage::Usage;

pub mod user;
pub use user::User;

/// Extra query arguments of a call, sent in order.
pub type Args<'a> = &'a [(&'a str, &'a str)];
