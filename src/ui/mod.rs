//! UI panel rendering subsystem
//!
//! Views are stateless: they draw the value they are given and report what the
//! user did. Nothing happens for an interaction the caller chooses to ignore.
//! - Counter view (count button and reset)
//! - Theme view (theme selector and reset)
//! - Panel manager (layout and interaction routing)

pub mod counter_view;
pub mod theme_view;
pub mod panel_manager;
