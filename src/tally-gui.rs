//! Tally GUI Application
//!
//! A counter and a light/dark/system theme selector, both persisted through
//! eframe's storage and restored when the window opens.
//!
//! The application is built with a modular architecture:
//! - `app/` - State ownership and coordination
//! - `ui/` - Stateless views and panel layout

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod ui;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use rtally::{EframeSnapshot, EframeStore, TracingSink};
use ui::panel_manager::PanelManager;

/// Application name; eframe derives the storage location from it.
const APP_ID: &str = "rtally";

/// Main application entry point.
fn main() -> eframe::Result {
    rtally::logging::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 260.0])
            .with_title("Tally"),
        ..Default::default()
    };

    eframe::run_native(
        APP_ID,
        options,
        Box::new(|cc| Ok(Box::new(TallyApp::new(cc)))),
    )
}

/// The main application.
///
/// - `ApplicationCoordinator` binds view interactions to the feature operations
/// - `ThemeCoordinator` turns the theme markers into egui visuals
/// - `PanelManager` handles layout and rendering
struct TallyApp {
    state: AppState,
    sink: TracingSink,
}

impl TallyApp {
    /// Creates the app and seeds both features from persistent storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let sink = TracingSink;
        let mut state = AppState::new();
        state.mount(&EframeSnapshot::new(cc.storage), &sink);
        ThemeCoordinator::apply_markers(&cc.egui_ctx, &state.markers);

        Self { state, sink }
    }
}

impl eframe::App for TallyApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_markers(ctx, &self.state.markers);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &self.state) {
            let mut store = EframeStore::new(frame.storage_mut());
            ApplicationCoordinator::handle_interaction(&mut self.state, interaction, &mut store, &self.sink);
        }
    }
}
