//! Global capture hotkey
//!
//! The hotkey fires on a platform thread; presses are forwarded to the UI
//! thread as [`AppEvent::CaptureRequested`].

use anyhow::{anyhow, Result};
use global_hotkey::{
    hotkey::{Code, HotKey, Modifiers},
    GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState,
};
use tracing::{info, warn};

use crate::shared::{AppEvent, EventSender};

/// Parses a hotkey string like "Ctrl+PrintScreen", "Ctrl+Shift+S", "Alt+F1" into a HotKey
pub fn parse_hotkey(hotkey_str: &str) -> Result<HotKey> {
    let parts: Vec<&str> = hotkey_str.split('+').map(|s| s.trim()).collect();

    let mut modifiers = Modifiers::empty();
    let mut key_code: Option<Code> = None;

    for part in parts {
        if part.is_empty() {
            continue;
        }
        let upper = part.to_uppercase();
        match upper.as_str() {
            "CTRL" | "CONTROL" => modifiers |= Modifiers::CONTROL,
            "SHIFT" => modifiers |= Modifiers::SHIFT,
            "ALT" => modifiers |= Modifiers::ALT,
            "WIN" | "SUPER" | "META" => modifiers |= Modifiers::SUPER,
            _ => {
                if key_code.is_some() {
                    return Err(anyhow!("More than one key in hotkey string: {}", hotkey_str));
                }
                key_code = Some(parse_key_code(&upper.replace(' ', ""))?);
            }
        }
    }

    let code = key_code.ok_or_else(|| anyhow!("No key code found in hotkey string"))?;
    Ok(HotKey::new(Some(modifiers), code))
}

/// Parse a key code string into a Code enum
fn parse_key_code(key: &str) -> Result<Code> {
    let code = match key {
        // Function keys
        "F1" => Code::F1,
        "F2" => Code::F2,
        "F3" => Code::F3,
        "F4" => Code::F4,
        "F5" => Code::F5,
        "F6" => Code::F6,
        "F7" => Code::F7,
        "F8" => Code::F8,
        "F9" => Code::F9,
        "F10" => Code::F10,
        "F11" => Code::F11,
        "F12" => Code::F12,

        // Letters
        "A" => Code::KeyA,
        "B" => Code::KeyB,
        "C" => Code::KeyC,
        "D" => Code::KeyD,
        "E" => Code::KeyE,
        "F" => Code::KeyF,
        "G" => Code::KeyG,
        "H" => Code::KeyH,
        "I" => Code::KeyI,
        "J" => Code::KeyJ,
        "K" => Code::KeyK,
        "L" => Code::KeyL,
        "M" => Code::KeyM,
        "N" => Code::KeyN,
        "O" => Code::KeyO,
        "P" => Code::KeyP,
        "Q" => Code::KeyQ,
        "R" => Code::KeyR,
        "S" => Code::KeyS,
        "T" => Code::KeyT,
        "U" => Code::KeyU,
        "V" => Code::KeyV,
        "W" => Code::KeyW,
        "X" => Code::KeyX,
        "Y" => Code::KeyY,
        "Z" => Code::KeyZ,

        // Numbers
        "0" => Code::Digit0,
        "1" => Code::Digit1,
        "2" => Code::Digit2,
        "3" => Code::Digit3,
        "4" => Code::Digit4,
        "5" => Code::Digit5,
        "6" => Code::Digit6,
        "7" => Code::Digit7,
        "8" => Code::Digit8,
        "9" => Code::Digit9,

        // Special keys
        "PRINTSCREEN" | "PRINT" | "PRTSC" | "PRTSCN" | "SNAPSHOT" => Code::PrintScreen,
        "PAUSE" => Code::Pause,
        "SCROLLLOCK" => Code::ScrollLock,
        "SPACE" => Code::Space,
        "ENTER" | "RETURN" => Code::Enter,
        "TAB" => Code::Tab,
        "ESCAPE" | "ESC" => Code::Escape,
        "BACKSPACE" => Code::Backspace,
        "DELETE" | "DEL" => Code::Delete,
        "INSERT" | "INS" => Code::Insert,
        "HOME" => Code::Home,
        "END" => Code::End,
        "PAGEUP" | "PGUP" => Code::PageUp,
        "PAGEDOWN" | "PGDN" => Code::PageDown,
        "UP" => Code::ArrowUp,
        "DOWN" => Code::ArrowDown,
        "LEFT" => Code::ArrowLeft,
        "RIGHT" => Code::ArrowRight,

        // Numpad
        "NUMPAD0" | "NUM0" => Code::Numpad0,
        "NUMPAD1" | "NUM1" => Code::Numpad1,
        "NUMPAD2" | "NUM2" => Code::Numpad2,
        "NUMPAD3" | "NUM3" => Code::Numpad3,
        "NUMPAD4" | "NUM4" => Code::Numpad4,
        "NUMPAD5" | "NUM5" => Code::Numpad5,
        "NUMPAD6" | "NUM6" => Code::Numpad6,
        "NUMPAD7" | "NUM7" => Code::Numpad7,
        "NUMPAD8" | "NUM8" => Code::Numpad8,
        "NUMPAD9" | "NUM9" => Code::Numpad9,

        _ => return Err(anyhow!("Unknown key code: {}", key)),
    };

    Ok(code)
}

/// Owns the OS registration of the capture hotkey
pub struct HotkeyManager {
    manager: GlobalHotKeyManager,
    capture_hotkey: Option<HotKey>,
}

impl HotkeyManager {
    /// Create a new hotkey manager. Must be called on the UI thread.
    pub fn new() -> Result<Self> {
        let manager = GlobalHotKeyManager::new()
            .map_err(|e| anyhow!("Failed to create hotkey manager: {:?}", e))?;

        Ok(Self {
            manager,
            capture_hotkey: None,
        })
    }

    /// Register the capture hotkey and forward its presses to `events`
    pub fn register_capture_hotkey(&mut self, hotkey_str: &str, events: EventSender) -> Result<()> {
        // Unregister existing hotkey if any
        self.unregister_capture_hotkey();

        let hotkey = parse_hotkey(hotkey_str).map_err(|e| {
            warn!("Failed to parse hotkey '{}': {}", hotkey_str, e);
            e
        })?;

        self.manager
            .register(hotkey)
            .map_err(|e| anyhow!("Failed to register hotkey {}: {:?}", hotkey_str, e))?;

        let id = hotkey.id();
        GlobalHotKeyEvent::set_event_handler(Some(move |event: GlobalHotKeyEvent| {
            if event.id == id && event.state == HotKeyState::Pressed {
                events.send(AppEvent::CaptureRequested);
            }
        }));

        self.capture_hotkey = Some(hotkey);
        info!("Registered capture hotkey: {}", hotkey_str);

        Ok(())
    }

    /// Unregister the capture hotkey
    pub fn unregister_capture_hotkey(&mut self) {
        if let Some(hotkey) = self.capture_hotkey.take() {
            if let Err(e) = self.manager.unregister(hotkey) {
                warn!("Failed to unregister capture hotkey: {:?}", e);
            }
            GlobalHotKeyEvent::set_event_handler(None::<fn(GlobalHotKeyEvent)>);
        }
    }
}

impl Drop for HotkeyManager {
    fn drop(&mut self) {
        self.unregister_capture_hotkey();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let hotkey = parse_hotkey("F9").unwrap();
        assert!(hotkey.id() > 0);
    }

    #[test]
    fn test_parse_default_capture_hotkey() {
        let hotkey = parse_hotkey("Ctrl+PrintScreen").unwrap();
        assert_eq!(hotkey, HotKey::new(Some(Modifiers::CONTROL), Code::PrintScreen));
    }

    #[test]
    fn test_print_screen_aliases() {
        let expected = parse_hotkey("Ctrl+PrintScreen").unwrap();
        for alias in ["ctrl+prtsc", "CTRL + Print Screen", "Control+Snapshot"] {
            assert_eq!(parse_hotkey(alias).unwrap(), expected, "{}", alias);
        }
    }

    #[test]
    fn test_parse_with_modifiers() {
        let hotkey = parse_hotkey("Ctrl+Shift+S").unwrap();
        assert_eq!(
            hotkey,
            HotKey::new(Some(Modifiers::CONTROL | Modifiers::SHIFT), Code::KeyS)
        );
    }

    #[test]
    fn test_parse_invalid_key() {
        assert!(parse_hotkey("InvalidKey").is_err());
    }

    #[test]
    fn test_parse_two_keys() {
        assert!(parse_hotkey("Ctrl+A+B").is_err());
    }

    #[test]
    fn test_parse_modifiers_only() {
        assert!(parse_hotkey("Ctrl+Shift").is_err());
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_hotkey("").is_err());
    }
}
