//! Notifier port: where the engine sends messages for the resident.

use std::sync::Arc;

use smartflat_domain::notification::Notification;

/// Sink for informational and critical notifications.
///
/// Delivery is fire-and-forget: implementations must swallow their own
/// failures so that a broken display never interrupts a control pass.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}
