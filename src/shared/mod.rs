//! Messaging between background contexts and the UI thread
//!
//! Hotkey and tray callbacks run outside the UI thread. They never touch
//! application state; they post an [`AppEvent`] which the UI thread
//! drains once per frame.

pub mod bus;
pub mod messages;

pub use bus::{event_bus, EventSender};
pub use messages::AppEvent;
