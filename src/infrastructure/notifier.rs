use crate::domain::notification::{Notification, Variant};
use crate::domain::ports::Notifier;

/// Presents notifications as log lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.variant {
            Some(Variant::Destructive) => {
                log::warn!("{}: {}", notification.title, notification.description)
            }
            None => log::info!("{}: {}", notification.title, notification.description),
        }
    }
}
