//! Operational error context propagation with `anyhow`.
//!
//! Failures that the preferences flow deliberately swallows (a broken theme
//! descriptor, a settings file that could not be written) still deserve a
//! trace. This module attaches context to them and routes them to the log.

use std::{error::Error as StdError, fmt::Display};

use {
    anyhow::{Context, Error, Result as AnyhowResult},
    tracing::{debug, warn},
};

/// Extension trait for attaching context to foreign errors.
pub trait ResultExt<T, E> {
    /// Adds context to an error with a formatted string.
    fn add_contextf(self, format: impl Display) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn add_contextf(self, format: impl Display) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.context(format.to_string())
    }
}

/// Centralized error reporting.
///
/// `ErrorReporter` logs an error together with the component that
/// observed it, so swallowed failures stay visible when tracing is on.
pub struct ErrorReporter;

impl ErrorReporter {
    /// Reports an expected failure that only matters while debugging.
    pub fn debug(error: &Error, context: &str) {
        debug!(context = context, error = %format!("{error:#}"), "Ignored failure");
    }

    /// Reports a failure the user may notice later.
    pub fn warn(error: &Error, context: &str) {
        warn!(context = context, error = %format!("{error:#}"), "Operation failed");
    }
}
