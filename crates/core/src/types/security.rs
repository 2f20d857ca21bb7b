//! Secret values and resolved credentials

use super::identifier::Identifier;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A decrypted secret as returned by the secret-revealing collaborator.
///
/// The value is wiped on drop and never shown by `Debug`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Secret(String);

impl Secret {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the plaintext value
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// One identifier together with its revealed secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub identifier: Identifier,
    pub secret: Secret,
}

impl Credential {
    #[must_use]
    pub fn new(identifier: Identifier, secret: Secret) -> Self {
        Self { identifier, secret }
    }

    pub fn username(&self) -> &str {
        self.identifier.username()
    }
}
