//! Validated newtype wrappers for client construction values.
//!
//! These wrappers validate their contents on construction so that a
//! malformed store hash or token is rejected before any request is made.

use std::fmt;

use crate::error::ConfigError;

/// A validated BigCommerce store hash.
///
/// The store hash is the short identifier that appears in the store's API
/// path (`https://api.bigcommerce.com/stores/{hash}/...`).
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::StoreHash;
///
/// let hash = StoreHash::new("abc123").unwrap();
/// assert_eq!(hash.as_ref(), "abc123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreHash(String);

impl StoreHash {
    /// Creates a new validated store hash.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStoreHash`] if the hash is empty, or
    /// [`ConfigError::InvalidStoreHash`] if it contains characters that
    /// cannot appear in a URL path segment.
    pub fn new(hash: impl Into<String>) -> Result<Self, ConfigError> {
        let hash = hash.into();
        if hash.is_empty() {
            return Err(ConfigError::EmptyStoreHash);
        }
        if !hash.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidStoreHash { hash });
        }
        Ok(Self(hash))
    }
}

impl AsRef<str> for StoreHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated API account access token.
///
/// The token is sent as the `X-Auth-Token` header on every request. Its
/// `Debug` implementation masks the value so it cannot leak into logs.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::AccessToken;
///
/// let token = AccessToken::new("secret-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_hash_accepts_alphanumeric() {
        let hash = StoreHash::new("abc123").unwrap();
        assert_eq!(hash.as_ref(), "abc123");
        assert_eq!(hash.to_string(), "abc123");
    }

    #[test]
    fn test_store_hash_rejects_empty() {
        assert!(matches!(StoreHash::new(""), Err(ConfigError::EmptyStoreHash)));
    }

    #[test]
    fn test_store_hash_rejects_path_breaking_characters() {
        let result = StoreHash::new("abc/123");
        assert!(matches!(result, Err(ConfigError::InvalidStoreHash { hash }) if hash == "abc/123"));
    }

    #[test]
    fn test_access_token_rejects_empty() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_debug_is_masked() {
        let token = AccessToken::new("super-secret").unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("super-secret"));
        assert_eq!(debug, "AccessToken(*****)");
    }
}
