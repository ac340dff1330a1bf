//! Generic error handling utilities
//!
//! Provides unified error handling that can work across different error types
//! while maintaining domain-specific error logging patterns.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// This trait enables generic error handling functions to determine whether an error
/// should show specific user messages or generic context with debug details.
///
/// # Implementation Consistency
/// **IMPORTANT**: When `is_user_actionable()` returns `true`, `user_message()` should return
/// `Some(message)` with a helpful, actionable message. When `is_user_actionable()` returns
/// `false`, `user_message()` should return `None`. This ensures consistent error handling
/// behavior across the application.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error contains a specific, user-actionable message
    /// that should be displayed directly to the user
    ///
    /// Examples of user-actionable errors:
    /// - Package name resolution failures
    /// - Configuration errors with clear fixes
    ///
    /// Examples of system errors:
    /// - IO failures
    /// - Malformed metadata records
    fn is_user_actionable(&self) -> bool;

    /// Returns the specific user message if this is a user-actionable error
    ///
    /// This should return Some(message) when is_user_actionable() returns true,
    /// and None otherwise. The message should be clear, concise, and actionable.
    fn user_message(&self) -> Option<String>;
}

/// Log errors with appropriate detail level based on error specificity
///
/// - Shows specific messages for user-actionable errors (preserves detail)
/// - Shows generic context with debug details for system errors
/// - Ensures consistent error formatting across all modules
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    // Always emit a primary fatal line containing at least some context plus
    // useful detail. If the error is user-actionable we prefer its user message.
    if error.is_user_actionable() {
        if let Some(user_msg) = error.user_message() {
            log::error!("FATAL: {}", user_msg);
        } else {
            log::error!("FATAL: {}", operation_context);
        }
    } else {
        log::error!("FATAL: {}", operation_context);
    }
    // Detail only at debug level
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
