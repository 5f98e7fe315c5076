//! Message types posted to the UI thread

/// Requests raised by the hotkey listener and the tray icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The capture hotkey was pressed
    CaptureRequested,
    /// Restore was chosen from the tray icon
    RestoreRequested,
    /// Exit was chosen from the tray icon
    ExitRequested,
}

impl AppEvent {
    pub fn label(&self) -> &'static str {
        match self {
            AppEvent::CaptureRequested => "capture requested",
            AppEvent::RestoreRequested => "restore requested",
            AppEvent::ExitRequested => "exit requested",
        }
    }
}
