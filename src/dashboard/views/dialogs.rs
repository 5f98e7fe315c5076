//! Modal dialogs: rename, delete confirmation, messages and About

use egui::RichText;

use crate::dashboard::state::{DashboardState, MessageKind, UiAction};
use crate::dashboard::theme::ThemeColors;

/// Render whichever dialogs are open
pub fn render_dialogs(ctx: &egui::Context, state: &mut DashboardState) {
    render_rename_dialog(ctx, state);
    render_delete_confirm(ctx, state);
    render_message(ctx, state);
    render_about(ctx, state);
}

enum Outcome {
    Confirm,
    Cancel,
}

fn render_rename_dialog(ctx: &egui::Context, state: &mut DashboardState) {
    let Some(dialog) = state.rename.as_mut() else {
        return;
    };

    let mut outcome = None;
    egui::Window::new("Rename File")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.set_min_width(320.0);

            ui.label("Enter new filename (without extension):");
            ui.add_space(8.0);

            let response = ui.add(
                egui::TextEdit::singleline(&mut dialog.input).desired_width(f32::INFINITY),
            );
            if dialog.wants_focus {
                response.request_focus();
                dialog.wants_focus = false;
            }
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                outcome = Some(Outcome::Confirm);
            }

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    outcome = Some(Outcome::Cancel);
                }

                ui.add_space(8.0);

                if ui.add(
                    egui::Button::new(
                        RichText::new("Rename").color(ThemeColors::TEXT_ON_ACCENT)
                    )
                    .fill(ThemeColors::ACTION_RENAME)
                ).clicked() {
                    outcome = Some(Outcome::Confirm);
                }
            });
        });

    if ui_escape(ctx) {
        outcome = Some(Outcome::Cancel);
    }

    match outcome {
        Some(Outcome::Confirm) => {
            if let Some(action) = state.rename.take().and_then(|dialog| dialog.into_action()) {
                state.push(action);
            }
        }
        Some(Outcome::Cancel) => state.rename = None,
        None => {}
    }
}

fn render_delete_confirm(ctx: &egui::Context, state: &mut DashboardState) {
    let Some(name) = state.delete_confirm.clone() else {
        return;
    };

    let mut outcome = None;
    egui::Window::new("Confirm Delete")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(format!("Are you sure you want to delete '{}'?", name));
            ui.label(
                RichText::new("This action cannot be undone.")
                    .color(ThemeColors::ACCENT_WARNING)
            );

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    outcome = Some(Outcome::Cancel);
                }

                ui.add_space(8.0);

                if ui.add(
                    egui::Button::new(
                        RichText::new("Delete")
                            .color(ThemeColors::TEXT_ON_ACCENT)
                    )
                    .fill(ThemeColors::ACCENT_ERROR)
                ).clicked() {
                    outcome = Some(Outcome::Confirm);
                }
            });
        });

    if ui_escape(ctx) {
        outcome = Some(Outcome::Cancel);
    }

    match outcome {
        Some(Outcome::Confirm) => {
            state.delete_confirm = None;
            state.push(UiAction::Delete(name));
        }
        Some(Outcome::Cancel) => state.delete_confirm = None,
        None => {}
    }
}

fn render_message(ctx: &egui::Context, state: &mut DashboardState) {
    let Some(message) = &state.message else {
        return;
    };

    let color = match message.kind {
        MessageKind::Warning => ThemeColors::ACCENT_WARNING,
        MessageKind::Error => ThemeColors::ACCENT_ERROR,
    };

    let mut close = false;
    egui::Window::new(message.kind.title())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.set_min_width(280.0);
            ui.label(RichText::new(&message.text).color(color));
            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    close = true;
                }
            });
        });

    if close || ctx.input(|i| i.key_pressed(egui::Key::Enter)) || ui_escape(ctx) {
        state.message = None;
    }
}

fn render_about(ctx: &egui::Context, state: &mut DashboardState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    let mut close = false;
    egui::Window::new("About Screenshot Manager")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.set_min_width(360.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("Screenshot Manager").size(20.0).strong());
                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .size(14.0)
                        .color(ThemeColors::TEXT_MUTED),
                );
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);
                ui.label(env!("CARGO_PKG_DESCRIPTION"));
                ui.add_space(12.0);
                if ui.button("Close").clicked() {
                    close = true;
                }
            });
        });

    if !open || close {
        state.show_about = false;
    }
}

fn ui_escape(ctx: &egui::Context) -> bool {
    ctx.input(|i| i.key_pressed(egui::Key::Escape))
}
