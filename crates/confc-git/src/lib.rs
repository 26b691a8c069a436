//! Git commit lookup for generated headers.
//!
//! The compiler embeds the short HEAD hash of the project repository in
//! the emitted header. Lookup failures are not fatal to callers: the CLI
//! degrades to a header without the hash.

pub mod error;

pub use error::{Error, Result};

use std::path::Path;

use git2::Repository;
use tracing::debug;

/// Resolve the short HEAD commit hash for the repository containing
/// `start_dir`. Discovery walks upward from `start_dir` the way
/// `git rev-parse` does, so any directory inside the work tree works.
pub fn head_short_hash(start_dir: &Path) -> Result<String> {
    let repo = Repository::discover(start_dir)?;
    let head = match repo.head() {
        Ok(head) => head,
        Err(e)
            if e.code() == git2::ErrorCode::UnbornBranch
                || e.code() == git2::ErrorCode::NotFound =>
        {
            return Err(Error::EmptyRepository);
        }
        Err(e) => return Err(e.into()),
    };
    let commit = head.peel_to_commit()?;
    let short_hash = format!("{:.7}", commit.id());
    debug!(hash = %short_hash, "resolved HEAD commit");
    Ok(short_hash)
}
