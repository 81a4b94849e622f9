//! Panel orchestration and layout management.
//!
//! Lays out the counter and theme views in the central panel and forwards
//! whatever the user did to the application coordinator.

use eframe::egui;
use crate::app::AppState;
use crate::ui::counter_view::{self, CounterInteraction};
use crate::ui::theme_view::{self, ThemeInteraction};

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelInteraction {
    Counter(CounterInteraction),
    Theme(ThemeInteraction),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &AppState) -> Option<PanelInteraction> {
        let mut interaction = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 3.0);
                ui.heading("eframe + egui");
                ui.add_space(16.0);

                if let Some(i) = counter_view::render_counter(ui, *state.count.get()) {
                    interaction = Some(PanelInteraction::Counter(i));
                }
                ui.add_space(8.0);
                if let Some(i) = theme_view::render_theme_selector(ui, *state.theme.get()) {
                    interaction = Some(PanelInteraction::Theme(i));
                }
            });
        });

        interaction
    }
}
