//! Application-level coordination.
//!
//! Binds view interactions to the counter and theme operations.

use rtally::{counter, theme, DiagnosticSink, KeyValueStore};
use crate::app::AppState;
use crate::ui::counter_view::CounterInteraction;
use crate::ui::panel_manager::PanelInteraction;
use crate::ui::theme_view::ThemeInteraction;

/// Coordinates interaction handling.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Applies a panel interaction to the state and persists the result.
    ///
    /// Storage failures go to `sink`; the state change is kept either way.
    pub fn handle_interaction(
        state: &mut AppState,
        interaction: PanelInteraction,
        store: &mut dyn KeyValueStore,
        sink: &dyn DiagnosticSink,
    ) {
        match interaction {
            PanelInteraction::Counter(CounterInteraction::Increment) => {
                counter::increment(&mut state.count, store, sink);
            }
            PanelInteraction::Counter(CounterInteraction::Reset) => {
                counter::reset(&mut state.count, store, sink);
            }
            PanelInteraction::Theme(ThemeInteraction::Change(option)) => {
                theme::change(&mut state.theme, store, &mut state.markers, sink, option);
            }
            PanelInteraction::Theme(ThemeInteraction::Reset) => {
                theme::reset(&mut state.theme, store, &mut state.markers, sink);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtally::{Count, MemoryStore, RecordingSink, StoreError, ThemeOption};

    #[test]
    fn test_counter_interactions() {
        let mut store = MemoryStore::new();
        let sink = RecordingSink::new();
        let mut state = AppState::new();

        let increment = PanelInteraction::Counter(CounterInteraction::Increment);
        ApplicationCoordinator::handle_interaction(&mut state, increment, &mut store, &sink);
        ApplicationCoordinator::handle_interaction(&mut state, increment, &mut store, &sink);
        assert_eq!(*state.count.get(), Count::Number(2));
        assert_eq!(store.peek("count"), Some("2"));

        let reset = PanelInteraction::Counter(CounterInteraction::Reset);
        ApplicationCoordinator::handle_interaction(&mut state, reset, &mut store, &sink);
        assert_eq!(*state.count.get(), Count::Number(0));
        assert_eq!(store.peek("count"), Some("0"));
    }

    #[test]
    fn test_theme_interactions_survive_write_failure() {
        let mut store = MemoryStore::new();
        store.fail_writes_with(StoreError::Unavailable);
        let sink = RecordingSink::new();
        let mut state = AppState::new();

        let change = PanelInteraction::Theme(ThemeInteraction::Change(ThemeOption::Dark));
        ApplicationCoordinator::handle_interaction(&mut state, change, &mut store, &sink);
        assert_eq!(*state.theme.get(), ThemeOption::Dark);

        let reset = PanelInteraction::Theme(ThemeInteraction::Reset);
        ApplicationCoordinator::handle_interaction(&mut state, reset, &mut store, &sink);
        assert_eq!(*state.theme.get(), ThemeOption::System);
        assert!(state.markers.is_empty());
        assert_eq!(sink.len(), 2);
    }
}
