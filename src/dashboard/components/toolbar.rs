//! Header and action toolbar

use egui::{Color32, RichText, Vec2};

use crate::dashboard::state::{DashboardState, UiAction};
use crate::dashboard::theme::ThemeColors;

/// Title and the capture hotkey hint
pub fn render_header(ui: &mut egui::Ui, hotkey_hint: &str) {
    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Screenshot Manager")
                .size(22.0)
                .color(ThemeColors::ACCENT_PRIMARY)
                .strong(),
        );
        ui.add_space(4.0);
        ui.label(
            RichText::new(hotkey_hint)
                .size(13.0)
                .color(ThemeColors::TEXT_MUTED),
        );
    });
    ui.add_space(8.0);
}

/// Refresh, Rename, Delete and Open Folder
pub fn render_toolbar(ui: &mut egui::Ui, state: &mut DashboardState) {
    ui.horizontal(|ui| {
        if action_button(ui, "Refresh", ThemeColors::ACTION_REFRESH) {
            state.push(UiAction::Refresh);
        }
        if action_button(ui, "Rename", ThemeColors::ACTION_RENAME) {
            state.push(UiAction::BeginRename);
        }
        if action_button(ui, "Delete", ThemeColors::ACTION_DELETE) {
            state.push(UiAction::BeginDelete);
        }
        if action_button(ui, "Open Folder", ThemeColors::ACTION_FOLDER) {
            state.push(UiAction::OpenFolder);
        }
    });
    ui.add_space(8.0);
}

/// Pastel button with dark text
fn action_button(ui: &mut egui::Ui, label: &str, fill: Color32) -> bool {
    ui.add(
        egui::Button::new(
            RichText::new(label)
                .color(ThemeColors::TEXT_ON_ACCENT)
                .strong(),
        )
        .fill(fill)
        .min_size(Vec2::new(120.0, 32.0)),
    )
    .clicked()
}
