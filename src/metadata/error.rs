//! Metadata loading errors

use crate::core::error_handling::ContextualError;

/// Result type alias for metadata operations
pub type MetadataResult<T> = std::result::Result<T, MetadataError>;

/// Errors raised while loading an installed environment from disk.
///
/// Individual malformed records are skipped with a warning rather than
/// surfaced here; only problems that make the whole environment unusable
/// become errors.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// The environment directory does not exist or is not a directory
    #[error("environment directory not found: {path}")]
    MissingDirectory { path: String },

    /// The record search pattern could not be compiled
    #[error("invalid metadata search pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl ContextualError for MetadataError {
    fn is_user_actionable(&self) -> bool {
        // A missing directory is fixed by pointing --env-dir at the right
        // place; pattern failures are system errors.
        matches!(self, MetadataError::MissingDirectory { .. })
    }

    fn user_message(&self) -> Option<String> {
        match self {
            MetadataError::MissingDirectory { .. } => Some(self.to_string()),
            MetadataError::Pattern { .. } => None,
        }
    }
}
