//! Error types for the collaborator client crate.

/// Errors that can occur while talking to an external collaborator.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CloudError {
    /// A collaborator API request failed (connection, transport, or a
    /// non-success status from the service).
    #[error("API request failed: {0}")]
    Api(String),

    /// A collaborator responded with a body the client could not decode.
    #[error("unexpected response from {endpoint}: {reason}")]
    UnexpectedResponse { endpoint: String, reason: String },

    /// No access token was supplied to the identity client.
    #[error("missing access token")]
    MissingToken,

    /// The identity provider could not resolve the token to a user.
    #[error("access token rejected: {reason}")]
    TokenRejected { reason: String },
}
