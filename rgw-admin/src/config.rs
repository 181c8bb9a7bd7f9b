use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use rgw_admin_core::utils::Redact;
use rgw_admin_core::{Context, Credential};
use serde::Deserialize;

use crate::constants::*;
use crate::Result;

/// Signature scheme used to authenticate admin requests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum SignatureVersion {
    /// Legacy HMAC-SHA1 `AWS <key>:<signature>`.
    #[default]
    V2,
    /// `AWS4-HMAC-SHA256`.
    V4,
}

impl FromStr for SignatureVersion {
    type Err = rgw_admin_core::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v2" => Ok(SignatureVersion::V2),
            "v4" => Ok(SignatureVersion::V4),
            v => Err(rgw_admin_core::Error::config_invalid(format!(
                "unknown signature version '{v}', expected v2 or v4"
            ))),
        }
    }
}

impl TryFrom<String> for SignatureVersion {
    type Error = rgw_admin_core::Error;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl Display for SignatureVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SignatureVersion::V2 => f.write_str("v2"),
            SignatureVersion::V4 => f.write_str("v4"),
        }
    }
}

/// Config for the admin client.
///
/// Every field is optional so that explicit values, TOML documents and the
/// environment can be layered. Unset fields fall back to the defaults
/// documented on each accessor.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RGW_ADMIN_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RGW_ADMIN_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `session_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RGW_ADMIN_SESSION_TOKEN`]
    pub session_token: Option<String>,
    /// `signature_version` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RGW_ADMIN_SIGNATURE_VERSION`]
    /// - default to `v2`
    pub signature_version: Option<SignatureVersion>,
    /// `region` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RGW_ADMIN_REGION`]
    pub region: Option<String>,
    /// `service` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RGW_ADMIN_SERVICE`]
    /// - default to `s3`
    pub service: Option<String>,
    /// `admin_path` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RGW_ADMIN_PATH`]
    /// - default to `admin`
    pub admin_path: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("session_token", &Redact::from(&self.session_token))
            .field("signature_version", &self.signature_version)
            .field("region", &self.region)
            .field("service", &self.service)
            .field("admin_path", &self.admin_path)
            .finish()
    }
}

impl Config {
    /// Create a config from an access key pair.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: Some(access_key_id.into()),
            secret_access_key: Some(secret_access_key.into()),
            ..Default::default()
        }
    }

    /// Set the signature version.
    pub fn with_signature_version(mut self, version: SignatureVersion) -> Self {
        self.signature_version = Some(version);
        self
    }

    /// Set the region used by signature v4.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Parse config from a TOML document using the field names as keys.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            rgw_admin_core::Error::config_invalid("failed to parse config as toml")
                .with_source(e)
                .into()
        })
    }

    /// Fill unset fields from the environment of `ctx`.
    pub fn from_env(mut self, ctx: &Context) -> Result<Self> {
        let envs = ctx.env_vars();

        if let Some(v) = envs.get(RGW_ADMIN_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v.clone());
        }
        if let Some(v) = envs.get(RGW_ADMIN_SECRET_ACCESS_KEY) {
            self.secret_access_key.get_or_insert(v.clone());
        }
        if let Some(v) = envs.get(RGW_ADMIN_SESSION_TOKEN) {
            self.session_token.get_or_insert(v.clone());
        }
        if let Some(v) = envs.get(RGW_ADMIN_SIGNATURE_VERSION) {
            if self.signature_version.is_none() {
                self.signature_version = Some(v.parse()?);
            }
        }
        if let Some(v) = envs.get(RGW_ADMIN_REGION) {
            self.region.get_or_insert(v.clone());
        }
        if let Some(v) = envs.get(RGW_ADMIN_SERVICE) {
            self.service.get_or_insert(v.clone());
        }
        if let Some(v) = envs.get(RGW_ADMIN_PATH) {
            self.admin_path.get_or_insert(v.clone());
        }

        Ok(self)
    }

    /// Check the config before any request is built.
    pub fn validate(&self) -> Result<()> {
        if !self.credential().is_valid() {
            return Err(rgw_admin_core::Error::credential_invalid(
                "access_key_id and secret_access_key are required",
            )
            .into());
        }

        if self.signature_version() == SignatureVersion::V4 {
            if self.region().is_empty() {
                return Err(rgw_admin_core::Error::config_invalid(
                    "region is required for signature v4",
                )
                .into());
            }
            if self.service().is_empty() {
                return Err(rgw_admin_core::Error::config_invalid(
                    "service is required for signature v4",
                )
                .into());
            }
        }

        Ok(())
    }

    /// Credential built from the key pair and session token.
    pub fn credential(&self) -> Credential {
        Credential {
            access_key_id: self.access_key_id.clone().unwrap_or_default(),
            secret_access_key: self.secret_access_key.clone().unwrap_or_default(),
            session_token: self.session_token.clone(),
        }
    }

    /// Signature version, `v2` when unset.
    pub fn signature_version(&self) -> SignatureVersion {
        self.signature_version.unwrap_or_default()
    }

    /// Region, empty when unset.
    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or_default()
    }

    /// Service name, `s3` when unset.
    pub fn service(&self) -> &str {
        self.service.as_deref().unwrap_or(DEFAULT_SERVICE)
    }

    /// Path prefix of the admin API without surrounding slashes, `admin` when unset.
    pub fn admin_path(&self) -> &str {
        self.admin_path
            .as_deref()
            .unwrap_or(DEFAULT_ADMIN_PATH)
            .trim_matches('/')
    }
}
