//! Dashboard application entry point

use crossbeam_channel::Receiver;
use eframe::egui;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::capture::ScreenCapture;
use crate::config::AppConfig;
use crate::dashboard::components::{render_header, render_status_bar, render_toolbar};
use crate::dashboard::state::{DashboardState, UiAction};
use crate::dashboard::theme::{self, ThemeColors};
use crate::dashboard::views::{render_dialogs, render_files_view, render_preview_view};
use crate::hotkey::HotkeyManager;
use crate::library::{LibraryError, ScreenshotLibrary};
use crate::shared::{event_bus, AppEvent};
use crate::storage::{self, ScreenshotStore};
use crate::tray::{icon, SystemTray, TrayLifecycle, TrayState};

/// How often the hidden window wakes up to drain tray and hotkey events
const TRAY_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// The screenshot browser window
pub struct ScreenshotManagerApp {
    /// Listing, selection and preview
    library: ScreenshotLibrary,
    /// Dialogs and per-frame UI state
    state: DashboardState,
    /// Events from the hotkey listener and the tray icon
    events: Receiver<AppEvent>,
    /// Window/tray lifecycle
    tray: TrayLifecycle<SystemTray>,
    /// Kept alive so the capture hotkey stays registered
    _hotkeys: Option<HotkeyManager>,
    /// Hint shown under the title
    hotkey_hint: String,
    /// Whether theme has been applied
    theme_applied: bool,
    /// Minimize on the first frame
    start_minimized: bool,
}

impl ScreenshotManagerApp {
    /// Create the app. Runs on the UI thread inside eframe's creator.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, store: ScreenshotStore) -> Self {
        let (sender, events) = event_bus(Some(cc.egui_ctx.clone()));

        let source = ScreenCapture::new(config.capture_config());
        let mut library = ScreenshotLibrary::new(store, Box::new(source));
        let mut state = DashboardState::default();

        if let Err(e) = library.refresh() {
            state.error(e.to_string());
        }

        let hotkey = config.capture.hotkey.clone();
        let (hotkeys, hotkey_hint) = match HotkeyManager::new()
            .and_then(|mut manager| manager.register_capture_hotkey(&hotkey, sender.clone()).map(|_| manager))
        {
            Ok(manager) => (Some(manager), format!("Press {} to capture screenshot", hotkey)),
            Err(e) => {
                warn!("Capture hotkey unavailable: {}", e);
                state.warn(format!("Could not register the capture hotkey {}: {}", hotkey, e));
                (None, "Capture hotkey unavailable".to_string())
            }
        };

        let tray = TrayLifecycle::new(SystemTray::new(sender));

        Self {
            library,
            state,
            events,
            tray,
            _hotkeys: hotkeys,
            hotkey_hint,
            theme_applied: false,
            start_minimized: config.general.start_minimized,
        }
    }

    /// Create eframe options for the browser window
    pub fn options() -> eframe::NativeOptions {
        let image = icon::camera_image();
        let (width, height) = image.dimensions();
        let window_icon = egui::IconData {
            rgba: image.into_raw(),
            width,
            height,
        };

        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([900.0, 700.0])
                .with_min_inner_size([600.0, 400.0])
                .with_title("Screenshot Manager")
                .with_icon(Arc::new(window_icon)),
            ..Default::default()
        }
    }

    /// Drain events posted by the hotkey listener and the tray icon
    fn process_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.events.try_recv() {
            debug!("Handling event: {}", event.label());
            match event {
                AppEvent::CaptureRequested => self.capture(),
                AppEvent::RestoreRequested => {
                    if self.tray.restore() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Visible(true));
                        ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
                    }
                }
                AppEvent::ExitRequested => {
                    if self.tray.exit() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                }
            }
        }
    }

    fn capture(&mut self) {
        match self.library.capture() {
            Ok(name) => debug!("Capture finished: {}", name),
            Err(e) => self.state.error(e.to_string()),
        }
    }

    /// Hide the window behind a tray icon. If the icon cannot be
    /// created the window stays up and the error is shown.
    fn minimize_to_tray(&mut self, ctx: &egui::Context) {
        match self.tray.minimize() {
            Ok(true) => ctx.send_viewport_cmd(egui::ViewportCommand::Visible(false)),
            Ok(false) => {}
            Err(e) => self.state.error(e.to_string()),
        }
    }

    /// Closing the window minimizes; only Exit from the tray quits
    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.viewport().close_requested()) || self.tray.is_terminated() {
            return;
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        self.minimize_to_tray(ctx);
    }

    /// F5 refresh, F2 rename, Delete delete
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if self.state.is_modal_open() {
            return;
        }

        let (refresh, rename, delete) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::F5),
                i.key_pressed(egui::Key::F2),
                i.key_pressed(egui::Key::Delete),
            )
        });

        if refresh {
            self.state.push(UiAction::Refresh);
        }
        if rename {
            self.state.push(UiAction::BeginRename);
        }
        if delete {
            self.state.push(UiAction::BeginDelete);
        }
    }

    /// Apply the actions raised while drawing this frame
    fn apply_actions(&mut self, ctx: &egui::Context) {
        let actions = self.state.take_actions();
        if actions.is_empty() {
            return;
        }
        ctx.request_repaint();

        for action in actions {
            match action {
                UiAction::Refresh => {
                    if let Err(e) = self.library.refresh() {
                        self.state.error(e.to_string());
                    }
                }
                UiAction::Select(name) => {
                    if let Err(e) = self.library.select_by_name(&name) {
                        self.state.error(e.to_string());
                    }
                }
                UiAction::BeginRename => self.state.begin_rename(self.library.selected()),
                UiAction::Rename { old, new } => {
                    if let Err(e) = self.library.rename(&old, &new) {
                        self.state.error(e.to_string());
                    }
                }
                UiAction::BeginDelete => self.state.begin_delete(self.library.selected()),
                UiAction::Delete(name) => match self.library.delete(&name) {
                    Ok(()) => {}
                    Err(LibraryError::NotFound(_)) => {
                        self.state.warn(format!("'{}' was already deleted", name));
                    }
                    Err(e) => self.state.error(e.to_string()),
                },
                UiAction::OpenFolder => {
                    if let Err(e) = storage::open_in_file_manager(self.library.directory()) {
                        self.state.error(format!("Failed to open folder: {}", e));
                    }
                }
            }
        }
    }
}

impl eframe::App for ScreenshotManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme once
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        if self.start_minimized {
            self.start_minimized = false;
            info!("Starting minimized to tray");
            self.minimize_to_tray(ctx);
        }

        self.tray.backend().pump();
        self.process_events(ctx);
        self.handle_close_request(ctx);

        if self.tray.state() == TrayState::Tray {
            ctx.request_repaint_after(TRAY_POLL_INTERVAL);
        }

        self.handle_shortcuts(ctx);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            render_header(ui, &self.hotkey_hint);
            render_toolbar(ui, &mut self.state);
        });

        egui::TopBottomPanel::bottom("status_bar")
            .frame(egui::Frame::none().fill(ThemeColors::BG_BUTTON).inner_margin(6.0))
            .show(ctx, |ui| {
                render_status_bar(ui, self.library.status(), self.library.directory());
            });

        egui::SidePanel::left("file_list")
            .resizable(true)
            .default_width(300.0)
            .min_width(200.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                render_files_view(ui, &mut self.state, &self.library);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            render_preview_view(ui, &mut self.state, &mut self.library);
        });

        render_dialogs(ctx, &mut self.state);

        self.apply_actions(ctx);
    }
}

/// Run the browser window until Exit is chosen from the tray
pub fn run_dashboard(config: AppConfig, store: ScreenshotStore) -> Result<(), eframe::Error> {
    eframe::run_native(
        "Screenshot Manager",
        ScreenshotManagerApp::options(),
        Box::new(move |cc| Ok(Box::new(ScreenshotManagerApp::new(cc, config, store)))),
    )
}
