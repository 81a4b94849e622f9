//! Theme selector view
//!
//! Combo box over the three theme options plus a "Reset Theme" button.

use eframe::egui;
use rtally::ThemeOption;

/// Result of user interaction with the theme view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeInteraction {
    /// User picked a different option
    Change(ThemeOption),
    /// User clicked "Reset Theme"
    Reset,
}

/// Renders the theme selector
pub fn render_theme_selector(ui: &mut egui::Ui, theme: ThemeOption) -> Option<ThemeInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        let mut selected = theme;
        egui::ComboBox::from_id_salt("theme_selector")
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
                for option in ThemeOption::ALL {
                    ui.selectable_value(&mut selected, option, option.label());
                }
            });

        if selected != theme {
            interaction = Some(ThemeInteraction::Change(selected));
        }

        if ui.button("Reset Theme").clicked() {
            interaction = Some(ThemeInteraction::Reset);
        }
    });

    interaction
}
