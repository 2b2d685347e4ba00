//! Pre-encoded Basic auth credential.

use std::fmt;

use base64::Engine;
use reqwest::header::HeaderValue;

use crate::error::{ApiError, Result};

/// An opaque, already-encoded credential (typically base64 of `user:token`).
///
/// The string is used verbatim after `Basic `. It is not checked for being
/// base64, only for being representable in a header.
#[derive(Clone)]
pub struct EncodedCredential {
    header: HeaderValue,
}

impl EncodedCredential {
    pub fn new(encoded: impl AsRef<str>) -> Result<Self> {
        let mut header = HeaderValue::from_str(&format!("Basic {}", encoded.as_ref()))
            .map_err(ApiError::InvalidCredential)?;
        header.set_sensitive(true);
        Ok(Self { header })
    }

    /// Encode `user:token` the way Jira Cloud expects for API tokens.
    pub fn from_user_token(user: impl AsRef<str>, token: impl AsRef<str>) -> Result<Self> {
        let raw = format!("{}:{}", user.as_ref(), token.as_ref());
        Self::new(base64::engine::general_purpose::STANDARD.encode(raw))
    }

    pub(crate) fn authorization(&self) -> HeaderValue {
        self.header.clone()
    }
}

impl fmt::Debug for EncodedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedCredential")
            .field("header", &"Basic <redacted>")
            .finish()
    }
}

impl TryFrom<&str> for EncodedCredential {
    type Error = ApiError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn used_verbatim() {
        let credential = EncodedCredential::new("encodedCredentials").unwrap();
        assert_eq!(credential.authorization(), "Basic encodedCredentials");
        assert!(credential.authorization().is_sensitive());
    }

    #[test]
    fn from_user_token_is_base64() {
        let credential = EncodedCredential::from_user_token("test_user", "test_token").unwrap();
        assert_eq!(
            credential.authorization(),
            "Basic dGVzdF91c2VyOnRlc3RfdG9rZW4="
        );
    }

    #[test]
    fn rejects_control_characters() {
        let err = EncodedCredential::new("abc\r\ndef").unwrap_err();
        assert!(matches!(err, ApiError::InvalidCredential(_)));
    }

    #[test]
    fn debug_redacts_secret() {
        let credential = EncodedCredential::try_from("c2VjcmV0").unwrap();
        let rendered = format!("{credential:?}");
        assert!(!rendered.contains("c2VjcmV0"));
    }
}
