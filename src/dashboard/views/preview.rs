//! Preview pane - the selected screenshot scaled to fit

use egui::{RichText, Rounding, Stroke};

use crate::dashboard::state::DashboardState;
use crate::dashboard::theme::{color_with_alpha, ThemeColors};
use crate::library::ScreenshotLibrary;

/// Render the preview pane.
///
/// The available area is reported to the library so the next selection
/// is rendered to fit it. The texture is rebuilt only when the library's
/// preview changes.
pub fn render_preview_view(ui: &mut egui::Ui, state: &mut DashboardState, library: &mut ScreenshotLibrary) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Preview").size(14.0).strong());
        if let Some(preview) = library.preview() {
            let (width, height) = preview.source_size;
            ui.label(
                RichText::new(format!("{} ({} x {})", preview.name, width, height))
                    .size(12.0)
                    .color(ThemeColors::TEXT_MUTED),
            );
        }
    });
    ui.add_space(6.0);

    egui::Frame::none()
        .fill(ThemeColors::BG_CANVAS)
        .rounding(Rounding::same(6.0))
        .stroke(Stroke::new(1.0, color_with_alpha(ThemeColors::ACCENT_PRIMARY, 60)))
        .show(ui, |ui| {
            let available = ui.available_size();
            ui.set_min_size(available);
            library.set_viewport(available.x, available.y);

            sync_texture(ui.ctx(), state, library);

            ui.centered_and_justified(|ui| match &state.preview_texture {
                Some(texture) => {
                    ui.add(egui::Image::new((texture.id(), texture.size_vec2())));
                }
                None => {
                    ui.label(
                        RichText::new("Select a screenshot to preview")
                            .color(ThemeColors::TEXT_MUTED),
                    );
                }
            });
        });
}

fn sync_texture(ctx: &egui::Context, state: &mut DashboardState, library: &ScreenshotLibrary) {
    let generation = library.preview_generation();
    if state.texture_generation == generation {
        return;
    }

    state.preview_texture = library.preview().map(|preview| {
        let (width, height) = preview.size();
        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [width as usize, height as usize],
            preview.image.as_raw(),
        );
        ctx.load_texture("screenshot_preview", color_image, egui::TextureOptions::LINEAR)
    });
    state.texture_generation = generation;
}
