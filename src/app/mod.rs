//! Application-level modules for the tally GUI.
//!
//! This module owns the state cells and binds the counter and theme
//! operations to the views.

mod app_state;
mod application_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use theme_coordinator::ThemeCoordinator;
