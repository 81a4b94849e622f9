//! Centralized application state for the tally GUI.
//!
//! The state cells live here rather than in the views, so the views stay
//! stateless and the logic functions only ever borrow the cells.

use rtally::{counter, theme, Count, DiagnosticSink, KeyValueStore, RootMarkers, StateCell, ThemeOption};

/// Main application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Counter value shown on the count button
    pub count: StateCell<Count>,

    /// Selected theme
    pub theme: StateCell<ThemeOption>,

    /// Theme markers read by the theme coordinator
    pub markers: RootMarkers,
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds both features from persisted storage. Runs once, when the window is created.
    pub fn mount(&mut self, store: &dyn KeyValueStore, sink: &dyn DiagnosticSink) {
        counter::initialize(&mut self.count, store, sink);
        theme::initialize(&mut self.theme, store, &mut self.markers, sink);
    }
}
