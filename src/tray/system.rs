//! System tray icon backed by `tray-icon`

use tracing::{debug, warn};
use tray_icon::menu::{Menu, MenuEvent, MenuItem};
use tray_icon::{TrayIcon, TrayIconBuilder, TrayIconEvent};

use super::{icon, TrayBackend, TrayError};
use crate::shared::{AppEvent, EventSender};

const RESTORE_ID: &str = "restore";
const EXIT_ID: &str = "exit";
const TOOLTIP: &str = "Screenshot Manager";

/// Platform tray icon. The icon only exists while the app is in the tray.
///
/// Menu and icon callbacks run on the platform's tray context and only
/// post events to the UI thread.
pub struct SystemTray {
    icon: Option<TrayIcon>,
}

impl SystemTray {
    /// Install the tray callbacks. Must be called on the UI thread.
    pub fn new(events: EventSender) -> Self {
        init_platform();

        let menu_events = events.clone();
        MenuEvent::set_event_handler(Some(move |event: MenuEvent| match event.id.0.as_str() {
            RESTORE_ID => menu_events.send(AppEvent::RestoreRequested),
            EXIT_ID => menu_events.send(AppEvent::ExitRequested),
            other => debug!("Ignoring menu event {}", other),
        }));

        TrayIconEvent::set_event_handler(Some(move |event: TrayIconEvent| {
            if let TrayIconEvent::DoubleClick { .. } = event {
                events.send(AppEvent::RestoreRequested);
            }
        }));

        Self { icon: None }
    }

    /// Run pending platform tray events. GTK needs this on Linux.
    pub fn pump(&self) {
        pump_platform();
    }
}

#[cfg(target_os = "linux")]
fn init_platform() {
    if gtk::is_initialized() {
        return;
    }
    if let Err(e) = gtk::init() {
        warn!("GTK initialization failed, tray icon unavailable: {}", e);
    }
}

#[cfg(not(target_os = "linux"))]
fn init_platform() {}

#[cfg(target_os = "linux")]
fn pump_platform() {
    while gtk::events_pending() {
        gtk::main_iteration_do(false);
    }
}

#[cfg(not(target_os = "linux"))]
fn pump_platform() {}

impl TrayBackend for SystemTray {
    fn show(&mut self) -> Result<(), TrayError> {
        if self.icon.is_some() {
            return Ok(());
        }

        let menu = Menu::new();
        let restore = MenuItem::with_id(RESTORE_ID, "Restore", true, None);
        let exit = MenuItem::with_id(EXIT_ID, "Exit", true, None);
        menu.append(&restore)
            .and_then(|_| menu.append(&exit))
            .map_err(|e| TrayError::Menu(e.to_string()))?;

        let tray = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_tooltip(TOOLTIP)
            .with_icon(icon::camera_icon()?)
            .build()
            .map_err(|e| TrayError::Create(e.to_string()))?;

        self.icon = Some(tray);
        Ok(())
    }

    fn hide(&mut self) -> Result<(), TrayError> {
        if let Some(tray) = self.icon.take() {
            tray.set_visible(false)
                .map_err(|e| TrayError::Remove(e.to_string()))?;
        }
        Ok(())
    }
}

impl Drop for SystemTray {
    fn drop(&mut self) {
        if let Err(e) = self.hide() {
            warn!("{}", e);
        }
        MenuEvent::set_event_handler(None::<fn(MenuEvent)>);
        TrayIconEvent::set_event_handler(None::<fn(TrayIconEvent)>);
    }
}
