//! Utility functions and types.

use http::HeaderMap;
use std::fmt::{Debug, Formatter};

/// Redact a secret for `Debug` output.
///
/// Values shorter than 12 bytes are fully masked. Longer values keep their
/// first and last three characters so different keys stay distinguishable.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = self.0;
        match s.len() {
            0 => f.write_str("EMPTY"),
            n if n < 12 || !s.is_char_boundary(3) || !s.is_char_boundary(n - 3) => {
                f.write_str("***")
            }
            n => write!(f, "{}***{}", &s[..3], &s[n - 3..]),
        }
    }
}

/// Debug view over a header map that masks sensitive values.
///
/// Headers flagged with [`http::HeaderValue::set_sensitive`] and the
/// `authorization` header are printed through [`Redact`].
pub struct RedactHeaders<'a>(pub &'a HeaderMap);

impl Debug for RedactHeaders<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut m = f.debug_map();
        for (k, v) in self.0 {
            let v = v.to_str().unwrap_or("<binary>");
            if k == http::header::AUTHORIZATION || self.0.get(k).is_some_and(|v| v.is_sensitive())
            {
                m.entry(&k.as_str(), &Redact(v));
            } else {
                m.entry(&k.as_str(), &v);
            }
        }
        m.finish()
    }
}
