pub mod cell;
pub mod counter;
pub mod diagnostics;
pub mod logging;
pub mod markers;
pub mod storage;
pub mod theme;

// Export state container
pub use cell::StateCell;

// Export storage backends
pub use storage::{EframeSnapshot, EframeStore, FileStore, KeyValueStore, MemoryStore, StoreError};

// Export diagnostics
pub use diagnostics::{swallow, Diagnostic, DiagnosticSink, RecordingSink, TracingSink};

// Export features
pub use counter::{Count, COUNT_KEY};
pub use markers::{sync_markers, Marker, MarkerSet, RootMarkers};
pub use theme::{ThemeOption, UnknownTheme, THEME_KEY};
