//! Event channel from background contexts to the UI thread

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{debug, warn};

use super::AppEvent;

/// Sending half handed to hotkey and tray callbacks.
///
/// Every send also wakes the UI so the event is drained promptly.
#[derive(Clone)]
pub struct EventSender {
    tx: Sender<AppEvent>,
    ctx: Option<egui::Context>,
}

impl EventSender {
    /// Post an event. Failures only happen after the UI has shut down.
    pub fn send(&self, event: AppEvent) {
        debug!("Posting event: {}", event.label());
        if self.tx.send(event).is_err() {
            warn!("UI is gone, dropping event: {}", event.label());
            return;
        }
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }
}

/// Create the event channel. `ctx` is woken on every send.
pub fn event_bus(ctx: Option<egui::Context>) -> (EventSender, Receiver<AppEvent>) {
    let (tx, rx) = unbounded();
    (EventSender { tx, ctx }, rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_arrive_in_order() {
        let (sender, rx) = event_bus(None);

        let background = sender.clone();
        std::thread::spawn(move || {
            background.send(AppEvent::CaptureRequested);
            background.send(AppEvent::RestoreRequested);
        })
        .join()
        .unwrap();
        sender.send(AppEvent::ExitRequested);

        let received: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            received,
            vec![
                AppEvent::CaptureRequested,
                AppEvent::RestoreRequested,
                AppEvent::ExitRequested,
            ]
        );
    }

    #[test]
    fn test_send_after_receiver_dropped() {
        let (sender, rx) = event_bus(None);
        drop(rx);

        // Must not panic
        sender.send(AppEvent::CaptureRequested);
    }
}
