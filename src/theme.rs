//! Theme feature: a light/dark/system selection persisted under the `theme` key.
//!
//! The cell and the root markers are always updated together, before any
//! write is attempted. Stored text that is not one of the three options
//! falls back to [`ThemeOption::System`] silently.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::cell::StateCell;
use crate::diagnostics::{swallow, DiagnosticSink, READ_FAILED, THEME_WRITE_FAILED};
use crate::markers::{sync_markers, Marker, MarkerSet};
use crate::storage::{KeyValueStore, StoreError};

/// Storage key of the theme selection.
pub const THEME_KEY: &str = "theme";

/// Selectable theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeOption {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeOption {
    /// Options in the order they are offered to the user.
    pub const ALL: [ThemeOption; 3] = [ThemeOption::System, ThemeOption::Light, ThemeOption::Dark];

    /// Exact match against the stored representation.
    pub fn parse(text: &str) -> Option<ThemeOption> {
        match text {
            "light" => Some(ThemeOption::Light),
            "dark" => Some(ThemeOption::Dark),
            "system" => Some(ThemeOption::System),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeOption::Light => "light",
            ThemeOption::Dark => "dark",
            ThemeOption::System => "system",
        }
    }

    /// Human-readable label for selectors.
    pub fn label(self) -> &'static str {
        match self {
            ThemeOption::Light => "Light",
            ThemeOption::Dark => "Dark",
            ThemeOption::System => "System",
        }
    }

    /// Root marker for this option; `System` has none.
    pub fn marker(self) -> Option<Marker> {
        match self {
            ThemeOption::Light => Some(Marker::Light),
            ThemeOption::Dark => Some(Marker::Dark),
            ThemeOption::System => None,
        }
    }
}

impl fmt::Display for ThemeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing text that names no theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}', expected light, dark or system")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeOption {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeOption::parse(s).ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

fn load(store: &dyn KeyValueStore) -> Result<ThemeOption, StoreError> {
    let stored = store.get(THEME_KEY)?;
    Ok(stored
        .as_deref()
        .and_then(ThemeOption::parse)
        .unwrap_or_default())
}

/// Seeds `cell` and the markers from the store at mount time.
///
/// A read failure is reported and leaves both the cell and the markers as they were.
pub fn initialize(
    cell: &mut StateCell<ThemeOption>,
    store: &dyn KeyValueStore,
    markers: &mut dyn MarkerSet,
    sink: &dyn DiagnosticSink,
) {
    tracing::debug!("theme initialization running");
    if let Some(theme) = swallow(sink, READ_FAILED, load(store)) {
        cell.set(theme);
        sync_markers(markers, theme);
    }
}

/// Switches to `theme`, updates the markers, then persists.
pub fn change(
    cell: &mut StateCell<ThemeOption>,
    store: &mut dyn KeyValueStore,
    markers: &mut dyn MarkerSet,
    sink: &dyn DiagnosticSink,
    theme: ThemeOption,
) {
    cell.set(theme);
    sync_markers(markers, theme);
    swallow(sink, THEME_WRITE_FAILED, store.set(THEME_KEY, theme.as_str()));
}

/// Same as [`change`] with [`ThemeOption::System`].
pub fn reset(
    cell: &mut StateCell<ThemeOption>,
    store: &mut dyn KeyValueStore,
    markers: &mut dyn MarkerSet,
    sink: &dyn DiagnosticSink,
) {
    change(cell, store, markers, sink, ThemeOption::System);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingSink;
    use crate::markers::RootMarkers;
    use crate::storage::MemoryStore;

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(ThemeOption::parse("dark"), Some(ThemeOption::Dark));
        assert_eq!(ThemeOption::parse("Dark"), None);
        assert_eq!(ThemeOption::parse(" light"), None);
        assert_eq!("purple".parse::<ThemeOption>(), Err(UnknownTheme("purple".to_string())));
    }

    #[test]
    fn test_initialize_without_entry_defaults_to_system() {
        let store = MemoryStore::new();
        let sink = RecordingSink::new();
        let mut markers = RootMarkers::new();
        markers.add(Marker::Light);
        let mut cell = StateCell::new(ThemeOption::Dark);

        initialize(&mut cell, &store, &mut markers, &sink);

        assert_eq!(*cell.get(), ThemeOption::System);
        assert!(markers.is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_initialize_with_stored_dark() {
        let store = MemoryStore::with_entries([(THEME_KEY, "dark")]);
        let sink = RecordingSink::new();
        let mut markers = RootMarkers::new();
        let mut cell = StateCell::default();

        initialize(&mut cell, &store, &mut markers, &sink);

        assert_eq!(*cell.get(), ThemeOption::Dark);
        assert_eq!(markers.iter().collect::<Vec<_>>(), vec![Marker::Dark]);
    }

    #[test]
    fn test_initialize_with_invalid_value_falls_back_silently() {
        let store = MemoryStore::with_entries([(THEME_KEY, "purple")]);
        let sink = RecordingSink::new();
        let mut markers = RootMarkers::new();
        let mut cell = StateCell::new(ThemeOption::Light);

        initialize(&mut cell, &store, &mut markers, &sink);

        assert_eq!(*cell.get(), ThemeOption::System);
        assert!(markers.is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_initialize_read_failure_leaves_cell_untouched() {
        let mut store = MemoryStore::with_entries([(THEME_KEY, "dark")]);
        store.fail_reads_with(StoreError::Other("SecurityError".to_string()));
        let sink = RecordingSink::new();
        let mut markers = RootMarkers::new();
        let mut cell = StateCell::new(ThemeOption::Light);

        initialize(&mut cell, &store, &mut markers, &sink);

        assert_eq!(*cell.get(), ThemeOption::Light);
        assert_eq!(cell.assignments(), 0);
        assert!(markers.is_empty());
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.reports()[0].detail, "SecurityError");
    }

    #[test]
    fn test_change_light_then_dark() {
        let mut store = MemoryStore::new();
        let sink = RecordingSink::new();
        let mut markers = RootMarkers::new();
        let mut cell = StateCell::default();

        change(&mut cell, &mut store, &mut markers, &sink, ThemeOption::Light);
        assert!(markers.contains(Marker::Light));
        assert_eq!(store.peek(THEME_KEY), Some("light"));

        change(&mut cell, &mut store, &mut markers, &sink, ThemeOption::Dark);
        assert_eq!(*cell.get(), ThemeOption::Dark);
        assert_eq!(markers.iter().collect::<Vec<_>>(), vec![Marker::Dark]);
        assert_eq!(store.peek(THEME_KEY), Some("dark"));
    }

    #[test]
    fn test_change_write_failure_keeps_visible_theme() {
        let mut store = MemoryStore::new();
        store.fail_writes_with(StoreError::QuotaExceeded);
        let sink = RecordingSink::new();
        let mut markers = RootMarkers::new();
        let mut cell = StateCell::default();

        change(&mut cell, &mut store, &mut markers, &sink, ThemeOption::Light);

        assert_eq!(*cell.get(), ThemeOption::Light);
        assert!(markers.contains(Marker::Light));
        assert_eq!(store.peek(THEME_KEY), None);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.reports()[0].prefix, THEME_WRITE_FAILED);
    }

    #[test]
    fn test_reset_clears_markers_and_persists_system() {
        let mut store = MemoryStore::with_entries([(THEME_KEY, "dark")]);
        let sink = RecordingSink::new();
        let mut markers = RootMarkers::new();
        markers.add(Marker::Dark);
        let mut cell = StateCell::new(ThemeOption::Dark);

        reset(&mut cell, &mut store, &mut markers, &sink);

        assert_eq!(*cell.get(), ThemeOption::System);
        assert_eq!(store.peek(THEME_KEY), Some("system"));
        assert!(markers.is_empty());
    }
}
