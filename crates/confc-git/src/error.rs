//! Error types for confc-git

/// Result type for confc-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during commit lookup
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Repository has no commits")]
    EmptyRepository,
}
