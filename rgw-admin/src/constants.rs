//! Environment variable names and defaults of [`Config`](crate::Config).

/// Access key id.
pub const RGW_ADMIN_ACCESS_KEY_ID: &str = "RGW_ADMIN_ACCESS_KEY_ID";
/// Secret access key.
pub const RGW_ADMIN_SECRET_ACCESS_KEY: &str = "RGW_ADMIN_SECRET_ACCESS_KEY";
/// Session token of temporary credentials.
pub const RGW_ADMIN_SESSION_TOKEN: &str = "RGW_ADMIN_SESSION_TOKEN";
/// `v2` or `v4`.
pub const RGW_ADMIN_SIGNATURE_VERSION: &str = "RGW_ADMIN_SIGNATURE_VERSION";
/// Region of the signature v4 credential scope.
pub const RGW_ADMIN_REGION: &str = "RGW_ADMIN_REGION";
/// Service of the signature v4 credential scope.
pub const RGW_ADMIN_SERVICE: &str = "RGW_ADMIN_SERVICE";
/// Path prefix of the admin API.
pub const RGW_ADMIN_PATH: &str = "RGW_ADMIN_PATH";

/// Service used when none is configured.
pub const DEFAULT_SERVICE: &str = "s3";
/// Admin path used when none is configured.
pub const DEFAULT_ADMIN_PATH: &str = "admin";
