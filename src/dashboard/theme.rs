//! Dashboard theme and styling
//!
//! Dark pastel theme shared by the browser window and its dialogs.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

/// Dark pastel color palette
pub struct ThemeColors;

impl ThemeColors {
    // Background colors
    pub const BG_DARK: Color32 = Color32::from_rgb(0x1e, 0x1e, 0x2e);
    pub const BG_CANVAS: Color32 = Color32::from_rgb(0x18, 0x18, 0x25);
    pub const BG_BUTTON: Color32 = Color32::from_rgb(0x31, 0x32, 0x44);
    pub const BG_HOVER: Color32 = Color32::from_rgb(0x45, 0x47, 0x5a);
    pub const BG_ACTIVE: Color32 = Color32::from_rgb(0x58, 0x5b, 0x70);

    // Accent colors
    pub const ACCENT_PRIMARY: Color32 = Color32::from_rgb(0x89, 0xb4, 0xfa);
    pub const ACCENT_WARNING: Color32 = Color32::from_rgb(0xf9, 0xe2, 0xaf);
    pub const ACCENT_ERROR: Color32 = Color32::from_rgb(0xf3, 0x8b, 0xa8);

    // Toolbar action colors
    pub const ACTION_REFRESH: Color32 = Color32::from_rgb(0x89, 0xdc, 0xeb);
    pub const ACTION_RENAME: Color32 = Color32::from_rgb(0xf5, 0xc2, 0xe7);
    pub const ACTION_DELETE: Color32 = Color32::from_rgb(0xeb, 0xa0, 0xac);
    pub const ACTION_FOLDER: Color32 = Color32::from_rgb(0xfa, 0xb3, 0x87);

    // Text colors
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xcd, 0xd6, 0xf4);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x7f, 0x84, 0x9c);
    /// Text drawn on pastel buttons and selected rows
    pub const TEXT_ON_ACCENT: Color32 = Color32::BLACK;

    pub const BORDER: Color32 = Color32::from_rgb(0x45, 0x47, 0x5a);
}

/// Apply the theme to egui
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let mut visuals = Visuals::dark();

    // Window and panel backgrounds
    visuals.window_fill = ThemeColors::BG_DARK;
    visuals.panel_fill = ThemeColors::BG_DARK;
    visuals.faint_bg_color = ThemeColors::BG_BUTTON;
    visuals.extreme_bg_color = ThemeColors::BG_CANVAS;
    visuals.override_text_color = Some(ThemeColors::TEXT_PRIMARY);

    // Widget colors
    visuals.widgets.noninteractive.bg_fill = ThemeColors::BG_DARK;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT_PRIMARY);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = ThemeColors::BG_BUTTON;
    visuals.widgets.inactive.weak_bg_fill = ThemeColors::BG_BUTTON;
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = ThemeColors::BG_HOVER;
    visuals.widgets.hovered.weak_bg_fill = ThemeColors::BG_HOVER;
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_fill = ThemeColors::BG_ACTIVE;
    visuals.widgets.active.weak_bg_fill = ThemeColors::BG_ACTIVE;
    visuals.widgets.active.rounding = Rounding::same(4.0);

    // Selected list rows use the accent color
    visuals.selection.bg_fill = ThemeColors::ACCENT_PRIMARY;
    visuals.selection.stroke = Stroke::new(1.0, ThemeColors::TEXT_ON_ACCENT);

    visuals.hyperlink_color = ThemeColors::ACCENT_PRIMARY;

    visuals.window_rounding = Rounding::same(8.0);
    visuals.window_shadow.blur = 8.0;
    visuals.window_stroke = Stroke::new(1.0, ThemeColors::BORDER);
    visuals.menu_rounding = Rounding::same(4.0);

    style.visuals = visuals;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(16.0);

    style.text_styles = [
        (TextStyle::Small, FontId::new(12.0, FontFamily::Monospace)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Monospace)),
        (TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(15.0, FontFamily::Monospace)),
        (TextStyle::Heading, FontId::new(20.0, FontFamily::Monospace)),
    ]
    .into();

    ctx.set_style(style);
}

/// Helper to create a color with modified alpha
pub fn color_with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
