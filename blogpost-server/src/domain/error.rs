use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum DomainError {
    #[error("Missing `{0}` in request body")]
    MissingField(&'static str),

    #[error("validation failed for '{field}': {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    #[error("Request path id and request body id values must match")]
    IdMismatch,

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("invalid credentials: {0}")]
    InvalidCredentials(AuthRejection),

    #[error("unexpected domain error: {0}")]
    Unexpected(String),
}

/// Why a Basic credential pair was refused. Only ever logged, never sent to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum AuthRejection {
    #[error("Incorrect username")]
    IncorrectUsername,

    #[error("Incorrect password")]
    IncorrectPassword,
}
