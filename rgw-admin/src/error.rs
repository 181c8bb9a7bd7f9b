use http::StatusCode;
use thiserror::Error;

/// Errors returned by the admin client.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration, signing or transport failed.
    #[error(transparent)]
    Core(#[from] rgw_admin_core::Error),

    /// The gateway answered with a non-2xx status.
    #[error("admin api returned {status}: {code}")]
    Api {
        /// `Code` field of the error document, or the status reason.
        code: String,
        /// HTTP status of the response.
        status: StatusCode,
    },

    /// A successful response carried a body that is not JSON.
    #[error("failed to decode admin api response")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Status code of an [`Error::Api`] error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Error code of an [`Error::Api`] error.
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Error::Core(err.into())
    }
}

/// Result type of the admin client.
pub type Result<T> = std::result::Result<T, Error>;
