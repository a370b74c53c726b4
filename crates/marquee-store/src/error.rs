use thiserror::Error;

/// Errors surfaced by store mutations.
///
/// Read paths never fail; missing or unreadable values fall back to empty
/// defaults so a damaged profile degrades instead of wedging the app.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A list name was empty after trimming.
    #[error("list name cannot be empty")]
    EmptyName,

    /// Another list already uses this name (compared case-insensitively).
    #[error("a list named \"{0}\" already exists")]
    DuplicateName(String),

    /// The backing key/value store failed while writing.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}
