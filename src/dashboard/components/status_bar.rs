//! Status line at the bottom of the window

use egui::RichText;
use std::path::Path;

use crate::dashboard::theme::ThemeColors;

pub fn render_status_bar(ui: &mut egui::Ui, status: &str, directory: &Path) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(status).size(12.0).color(ThemeColors::TEXT_PRIMARY));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(directory.display().to_string())
                    .size(11.0)
                    .color(ThemeColors::TEXT_MUTED),
            );
        });
    });
}
