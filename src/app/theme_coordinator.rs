//! Theme application.
//!
//! Translates the root markers into egui's theme preference.

use rtally::{Marker, MarkerSet, RootMarkers};

/// Coordinates theme application.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Picks the egui theme preference matching the markers.
    ///
    /// No marker means the OS preference is followed.
    pub fn preference_for(markers: &RootMarkers) -> egui::ThemePreference {
        if markers.contains(Marker::Dark) {
            egui::ThemePreference::Dark
        } else if markers.contains(Marker::Light) {
            egui::ThemePreference::Light
        } else {
            egui::ThemePreference::System
        }
    }

    /// Applies the markers to the egui context.
    ///
    /// Called every frame to ensure theme is correctly applied.
    pub fn apply_markers(ctx: &egui::Context, markers: &RootMarkers) {
        ctx.set_theme(Self::preference_for(markers));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtally::{sync_markers, ThemeOption};

    #[test]
    fn test_preference_follows_markers() {
        let mut markers = RootMarkers::new();
        assert_eq!(ThemeCoordinator::preference_for(&markers), egui::ThemePreference::System);

        sync_markers(&mut markers, ThemeOption::Light);
        assert_eq!(ThemeCoordinator::preference_for(&markers), egui::ThemePreference::Light);

        sync_markers(&mut markers, ThemeOption::Dark);
        assert_eq!(ThemeCoordinator::preference_for(&markers), egui::ThemePreference::Dark);
    }
}
