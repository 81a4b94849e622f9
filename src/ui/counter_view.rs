//! Counter view
//!
//! Draws the "count is N" button next to a reset button.

use eframe::egui;
use rtally::Count;

/// Result of user interaction with the counter view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterInteraction {
    /// User clicked the count button
    Increment,
    /// User clicked "Reset"
    Reset,
}

/// Renders the counter buttons
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `count` - The value to display
///
/// # Returns
/// * `Option<CounterInteraction>` - User interaction result
pub fn render_counter(ui: &mut egui::Ui, count: Count) -> Option<CounterInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button(format!("count is {}", count)).clicked() {
            interaction = Some(CounterInteraction::Increment);
        }
        if ui.button("Reset").clicked() {
            interaction = Some(CounterInteraction::Reset);
        }
    });

    interaction
}
