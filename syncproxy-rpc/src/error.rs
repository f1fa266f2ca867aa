//! Error types for message identity checks.
//!
//! Field accessors never produce these; they report malformed data as absent.

use crate::message::MessageRole;

pub type Result<T> = std::result::Result<T, RpcError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RpcError {
    #[error("expected function '{expected}', found '{found}'")]
    FunctionMismatch { expected: String, found: String },

    #[error("expected a {expected} message, found a {found}")]
    RoleMismatch {
        expected: MessageRole,
        found: MessageRole,
    },

    #[error("store has no request, response or notification entry")]
    MissingEnvelope,

    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),
}
