//! Resolved user identity as returned by the identity provider.

use serde::{Deserialize, Serialize};

/// A single name/value attribute attached to a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct UserAttribute {
    pub name: String,
    pub value: String,
}

impl UserAttribute {
    /// Creates an attribute from any string-like pair.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The identity an access token resolves to.
///
/// The attribute list is passed through from the identity provider
/// verbatim; Strato does not interpret individual attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct UserIdentity {
    /// Provider-side username the token belongs to.
    pub username: String,

    /// Profile attributes reported by the provider.
    pub attributes: Vec<UserAttribute>,
}

impl UserIdentity {
    /// Creates an identity with the given username and attributes.
    pub fn new(username: impl Into<String>, attributes: Vec<UserAttribute>) -> Self {
        Self {
            username: username.into(),
            attributes,
        }
    }
}
