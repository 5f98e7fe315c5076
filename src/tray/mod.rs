//! Tray Lifecycle
//!
//! Two states plus a terminal one:
//!
//! - `Visible -> Tray` when the window is closed (closing never quits)
//! - `Tray -> Visible` on restore
//! - `Tray -> Terminated` on exit
//!
//! Any other request leaves the state alone.

pub mod icon;
pub mod system;

pub use system::SystemTray;

use thiserror::Error;
use tracing::{error, info, warn};

/// Errors raised by the platform tray
#[derive(Debug, Error)]
pub enum TrayError {
    #[error("Invalid tray icon: {0}")]
    Icon(String),

    #[error("Failed to build tray menu: {0}")]
    Menu(String),

    #[error("Failed to create tray icon: {0}")]
    Create(String),

    #[error("Failed to remove tray icon: {0}")]
    Remove(String),
}

/// Platform side of the tray: put an icon up, take it down
pub trait TrayBackend {
    fn show(&mut self) -> Result<(), TrayError>;
    fn hide(&mut self) -> Result<(), TrayError>;
}

/// Where the application currently lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayState {
    Visible,
    Tray,
    Terminated,
}

/// Window/tray state machine
pub struct TrayLifecycle<B: TrayBackend> {
    state: TrayState,
    backend: B,
}

impl<B: TrayBackend> TrayLifecycle<B> {
    pub fn new(backend: B) -> Self {
        Self {
            state: TrayState::Visible,
            backend,
        }
    }

    pub fn state(&self) -> TrayState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == TrayState::Terminated
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Handle a window close request.
    ///
    /// Returns `Ok(true)` when the window should be hidden. If the tray
    /// icon cannot be created the window stays visible.
    pub fn minimize(&mut self) -> Result<bool, TrayError> {
        if self.state != TrayState::Visible {
            return Ok(false);
        }

        self.backend.show()?;
        self.state = TrayState::Tray;
        info!("Minimized to tray");
        Ok(true)
    }

    /// Leave the tray. Returns `true` when the window should be shown
    /// and focused.
    pub fn restore(&mut self) -> bool {
        if self.state != TrayState::Tray {
            return false;
        }

        if let Err(e) = self.backend.hide() {
            warn!("{}", e);
        }
        self.state = TrayState::Visible;
        info!("Restored from tray");
        true
    }

    /// Exit from the tray. The icon is released first; a failure to
    /// release it is logged and does not prevent termination.
    pub fn exit(&mut self) -> bool {
        if self.state != TrayState::Tray {
            return false;
        }

        if let Err(e) = self.backend.hide() {
            error!("{}", e);
        }
        self.state = TrayState::Terminated;
        info!("Exit requested from tray");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeTray {
        calls: Rc<RefCell<Vec<&'static str>>>,
        fail_show: bool,
        fail_hide: bool,
    }

    impl TrayBackend for FakeTray {
        fn show(&mut self) -> Result<(), TrayError> {
            self.calls.borrow_mut().push("show");
            if self.fail_show {
                return Err(TrayError::Create("no tray".to_string()));
            }
            Ok(())
        }

        fn hide(&mut self) -> Result<(), TrayError> {
            self.calls.borrow_mut().push("hide");
            if self.fail_hide {
                return Err(TrayError::Remove("stuck".to_string()));
            }
            Ok(())
        }
    }

    fn lifecycle(fail_show: bool, fail_hide: bool) -> (TrayLifecycle<FakeTray>, Rc<RefCell<Vec<&'static str>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let backend = FakeTray {
            calls: calls.clone(),
            fail_show,
            fail_hide,
        };
        (TrayLifecycle::new(backend), calls)
    }

    #[test]
    fn test_close_minimizes_then_restore() {
        let (mut tray, calls) = lifecycle(false, false);

        assert!(tray.minimize().unwrap());
        assert_eq!(tray.state(), TrayState::Tray);

        assert!(tray.restore());
        assert_eq!(tray.state(), TrayState::Visible);
        assert_eq!(*calls.borrow(), vec!["show", "hide"]);
    }

    #[test]
    fn test_close_while_in_tray_is_noop() {
        let (mut tray, calls) = lifecycle(false, false);
        tray.minimize().unwrap();

        assert!(!tray.minimize().unwrap());
        assert_eq!(tray.state(), TrayState::Tray);
        assert_eq!(*calls.borrow(), vec!["show"]);
    }

    #[test]
    fn test_restore_and_exit_need_tray() {
        let (mut tray, calls) = lifecycle(false, false);

        assert!(!tray.restore());
        assert!(!tray.exit());
        assert_eq!(tray.state(), TrayState::Visible);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_exit_releases_icon() {
        let (mut tray, calls) = lifecycle(false, false);
        tray.minimize().unwrap();

        assert!(tray.exit());
        assert!(tray.is_terminated());
        assert_eq!(*calls.borrow(), vec!["show", "hide"]);
    }

    #[test]
    fn test_terminated_is_final() {
        let (mut tray, _calls) = lifecycle(false, false);
        tray.minimize().unwrap();
        tray.exit();

        assert!(!tray.minimize().unwrap());
        assert!(!tray.restore());
        assert!(!tray.exit());
        assert_eq!(tray.state(), TrayState::Terminated);
    }

    #[test]
    fn test_exit_proceeds_when_release_fails() {
        let (mut tray, _calls) = lifecycle(false, true);
        tray.minimize().unwrap();

        assert!(tray.exit());
        assert!(tray.is_terminated());
    }

    #[test]
    fn test_failed_icon_keeps_window_visible() {
        let (mut tray, _calls) = lifecycle(true, false);

        assert!(tray.minimize().is_err());
        assert_eq!(tray.state(), TrayState::Visible);
    }
}
