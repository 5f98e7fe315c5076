//! File list - every screenshot, newest first

use egui::RichText;

use crate::dashboard::state::{DashboardState, UiAction};
use crate::dashboard::theme::ThemeColors;
use crate::library::ScreenshotLibrary;

/// Render the screenshot list. Clicking a row selects it.
pub fn render_files_view(ui: &mut egui::Ui, state: &mut DashboardState, library: &ScreenshotLibrary) {
    ui.label(
        RichText::new(format!("Screenshots ({})", library.entries().len()))
            .size(14.0)
            .strong(),
    );
    ui.add_space(6.0);

    if library.entries().is_empty() {
        ui.label(
            RichText::new("No screenshots yet")
                .color(ThemeColors::TEXT_MUTED),
        );
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for entry in library.entries() {
                let is_selected = library.selected() == Some(entry.name());
                let text = if is_selected {
                    RichText::new(entry.name()).color(ThemeColors::TEXT_ON_ACCENT)
                } else {
                    RichText::new(entry.name())
                };

                let mut response = ui.add_sized(
                    [ui.available_width(), 24.0],
                    egui::SelectableLabel::new(is_selected, text),
                );
                if let Some(at) = entry.created_at() {
                    response = response.on_hover_text(at.format("Captured %Y-%m-%d %H:%M:%S").to_string());
                }

                if response.clicked() && !is_selected {
                    state.push(UiAction::Select(entry.name().to_string()));
                }
            }
        });
}
