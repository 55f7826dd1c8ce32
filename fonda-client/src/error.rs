//! Client error types and the top-level propagation policy

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (unreachable, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required (401)
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error (400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflicting state (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Other non-success status
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local pre-flight check failed before any network call
    #[error(transparent)]
    Domain(#[from] AppError),

    /// A sibling call for the same entity is still in flight
    #[error("Duplicate request: {0}")]
    DuplicateRequest(String),

    /// Session token could not be decoded
    #[error(transparent)]
    Session(#[from] crate::session::SessionError),
}

/// What the top-level handler should do with an error
///
/// Validation and policy errors render inline next to the offending
/// field; auth errors force re-authentication; permission errors warn
/// without logging the user out; everything else surfaces verbatim and
/// is never retried automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDisposition {
    /// Clear the session and force re-authentication
    ClearSession,
    /// Show a dismissible warning, keep the session
    Warn,
    /// Render next to the offending field, no network side effects
    Inline,
    /// Surface to the user verbatim
    Surface,
}

impl ClientError {
    pub fn disposition(&self) -> ErrorDisposition {
        match self {
            ClientError::Unauthorized | ClientError::Session(_) => ErrorDisposition::ClearSession,
            ClientError::Forbidden(_) => ErrorDisposition::Warn,
            ClientError::Validation(_) | ClientError::DuplicateRequest(_) => {
                ErrorDisposition::Inline
            }
            ClientError::Domain(err) => match err.code {
                ErrorCode::NotAuthenticated
                | ErrorCode::TokenExpired
                | ErrorCode::TokenInvalid => ErrorDisposition::ClearSession,
                ErrorCode::PermissionDenied | ErrorCode::RoleRequired | ErrorCode::StaffOnly => {
                    ErrorDisposition::Warn
                }
                _ => ErrorDisposition::Inline,
            },
            ClientError::Http(_)
            | ClientError::InvalidResponse(_)
            | ClientError::NotFound(_)
            | ClientError::Conflict(_)
            | ClientError::Server { .. }
            | ClientError::Serialization(_) => ErrorDisposition::Surface,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disposition_auth() {
        assert_eq!(
            ClientError::Unauthorized.disposition(),
            ErrorDisposition::ClearSession
        );
        assert_eq!(
            ClientError::Forbidden("nope".into()).disposition(),
            ErrorDisposition::Warn
        );
    }

    #[test]
    fn test_disposition_local_errors_inline() {
        assert_eq!(
            ClientError::Validation("bad field".into()).disposition(),
            ErrorDisposition::Inline
        );
        assert_eq!(
            ClientError::Domain(AppError::validation("bad")).disposition(),
            ErrorDisposition::Inline
        );
        assert_eq!(
            ClientError::Domain(AppError::new(ErrorCode::SaleAlreadyFinalized)).disposition(),
            ErrorDisposition::Inline
        );
        assert_eq!(
            ClientError::DuplicateRequest("finalize:1".into()).disposition(),
            ErrorDisposition::Inline
        );
    }

    #[test]
    fn test_disposition_network_surfaces() {
        let err = ClientError::Server {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(err.disposition(), ErrorDisposition::Surface);
        assert_eq!(
            ClientError::NotFound("sale 9".into()).disposition(),
            ErrorDisposition::Surface
        );
    }
}
