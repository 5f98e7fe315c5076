//! Screen Capture Layer
//!
//! Grabs full-monitor screenshots through `xcap`. The rest of the
//! application only sees the [`CaptureSource`] trait.

pub mod frame;

pub use frame::CapturedFrame;

use thiserror::Error;
use tracing::debug;
use xcap::Monitor;

/// Errors raised while grabbing the screen
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Failed to enumerate monitors: {0}")]
    MonitorEnumeration(String),

    #[error("No monitor available to capture")]
    NoMonitor,

    #[error("Monitor {index} does not exist ({available} connected)")]
    MonitorOutOfRange { index: usize, available: usize },

    #[error("Screen capture failed: {0}")]
    CaptureFailed(String),
}

/// Anything that can produce a screenshot on demand
pub trait CaptureSource {
    fn grab(&self) -> Result<CapturedFrame, CaptureError>;
}

/// Screen capture configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Monitor index to capture, or `None` for the primary monitor
    pub monitor: Option<usize>,
}

/// Full-monitor capture backed by `xcap`
#[derive(Debug, Clone, Default)]
pub struct ScreenCapture {
    config: CaptureConfig,
}

impl ScreenCapture {
    pub fn new(config: CaptureConfig) -> Self {
        Self { config }
    }

    fn pick_monitor(&self) -> Result<Monitor, CaptureError> {
        let monitors =
            Monitor::all().map_err(|e| CaptureError::MonitorEnumeration(e.to_string()))?;

        if let Some(index) = self.config.monitor {
            let available = monitors.len();
            return monitors
                .into_iter()
                .nth(index)
                .ok_or(CaptureError::MonitorOutOfRange { index, available });
        }

        // Fall back to the first monitor when none reports as primary
        let primary = monitors
            .iter()
            .position(|m| m.is_primary().unwrap_or(false))
            .unwrap_or(0);

        monitors.into_iter().nth(primary).ok_or(CaptureError::NoMonitor)
    }
}

impl CaptureSource for ScreenCapture {
    fn grab(&self) -> Result<CapturedFrame, CaptureError> {
        let monitor = self.pick_monitor()?;
        debug!("Capturing monitor {:?}", monitor.name().unwrap_or_default());

        let image = monitor
            .capture_image()
            .map_err(|e| CaptureError::CaptureFailed(e.to_string()))?;

        Ok(CapturedFrame::new(image))
    }
}

/// Summary of a connected monitor
#[derive(Debug, Clone)]
pub struct MonitorInfo {
    pub index: usize,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub is_primary: bool,
}

/// List connected monitors in capture index order
pub fn list_monitors() -> Result<Vec<MonitorInfo>, CaptureError> {
    let monitors = Monitor::all().map_err(|e| CaptureError::MonitorEnumeration(e.to_string()))?;

    Ok(monitors
        .iter()
        .enumerate()
        .map(|(index, m)| MonitorInfo {
            index,
            name: m.name().unwrap_or_else(|_| "Unknown".to_string()),
            width: m.width().unwrap_or(0),
            height: m.height().unwrap_or(0),
            is_primary: m.is_primary().unwrap_or(false),
        })
        .collect())
}
