//! Error handling built on `thiserror` and `anyhow`.
//!
//! Domain errors describe what went wrong in settings persistence and
//! descriptor parsing; the operational layer adds context and routes
//! swallowed failures into the log.

pub mod domain;
pub mod operational;

pub use {
    domain::PreferencesError,
    operational::{ErrorReporter, ResultExt},
};
