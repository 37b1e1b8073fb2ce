//! Shared application context with reactive updates to views.
//!
//! This module provides the state every open window shares and the
//! publish/subscribe mechanism views use to follow changes.

pub mod app_state;

pub use app_state::{AppState, AppStateEvent, StateObserver};
