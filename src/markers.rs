//! Theme markers on the document root.
//!
//! At most one of the `light`/`dark` markers is present at any time. The
//! front ends read the markers to decide which visuals to use; no marker
//! means "follow the system preference".

use std::collections::BTreeSet;
use std::fmt;

use crate::theme::ThemeOption;

/// Named marker that can be attached to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Marker {
    Light,
    Dark,
}

impl Marker {
    pub const ALL: [Marker; 2] = [Marker::Light, Marker::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Marker::Light => "light",
            Marker::Dark => "dark",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set-membership style access to the root markers.
pub trait MarkerSet {
    fn add(&mut self, marker: Marker);
    fn remove(&mut self, marker: Marker);
    fn contains(&self, marker: Marker) -> bool;
}

/// In-memory marker set standing in for the document root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RootMarkers {
    markers: BTreeSet<Marker>,
}

impl RootMarkers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Marker> + '_ {
        self.markers.iter().copied()
    }
}

impl MarkerSet for RootMarkers {
    fn add(&mut self, marker: Marker) {
        self.markers.insert(marker);
    }

    fn remove(&mut self, marker: Marker) {
        self.markers.remove(&marker);
    }

    fn contains(&self, marker: Marker) -> bool {
        self.markers.contains(&marker)
    }
}

/// Brings the markers in line with `theme`.
///
/// Both markers are removed first; `light` and `dark` then add their own,
/// `system` adds nothing.
pub fn sync_markers(markers: &mut dyn MarkerSet, theme: ThemeOption) {
    for marker in Marker::ALL {
        markers.remove(marker);
    }
    if let Some(marker) = theme.marker() {
        markers.add(marker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_markers_is_mutually_exclusive() {
        let mut markers = RootMarkers::new();
        sync_markers(&mut markers, ThemeOption::Light);
        sync_markers(&mut markers, ThemeOption::Dark);

        assert!(markers.contains(Marker::Dark));
        assert!(!markers.contains(Marker::Light));
        assert_eq!(markers.iter().collect::<Vec<_>>(), vec![Marker::Dark]);
    }

    #[test]
    fn test_sync_markers_system_clears_everything() {
        let mut markers = RootMarkers::new();
        markers.add(Marker::Light);
        markers.add(Marker::Dark);

        sync_markers(&mut markers, ThemeOption::System);
        assert!(markers.is_empty());
    }
}
