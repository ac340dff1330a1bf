//! Resolution errors

use crate::core::error_handling::ContextualError;

/// Result type alias for resolution operations
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

/// Errors raised while resolving the package under test
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No override, setup.cfg or setup.py yielded a package name
    #[error("no package name found in directory: {directory}")]
    NotFound { directory: String },

    /// A build-configuration file existed but could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ContextualError for ResolveError {
    fn is_user_actionable(&self) -> bool {
        // A missing name is fixed by the user (set the override or add the
        // name to the build configuration); read failures are system errors.
        matches!(self, ResolveError::NotFound { .. })
    }

    fn user_message(&self) -> Option<String> {
        match self {
            ResolveError::NotFound { .. } => Some(self.to_string()),
            ResolveError::Io { .. } => None,
        }
    }
}
