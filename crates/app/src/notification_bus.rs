//! In-process notification bus backed by a tokio broadcast channel.

use tokio::sync::broadcast;

use smartflat_domain::notification::Notification;

use crate::ports::Notifier;

/// [`Notifier`] that fans notifications out to every subscriber.
///
/// Publishing succeeds even when there are no active subscribers (the
/// notification is simply dropped). Slow subscribers lag and lose the oldest
/// messages rather than blocking the engine.
#[derive(Clone)]
pub struct NotificationBus {
    sender: broadcast::Sender<Notification>,
}

impl NotificationBus {
    /// Create a new bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to notifications published *after* this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }
}

impl Notifier for NotificationBus {
    fn notify(&self, notification: Notification) {
        if self.sender.send(notification).is_err() {
            tracing::trace!("notification dropped, no subscribers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_deliver_notification_to_subscriber() {
        let bus = NotificationBus::new(16);
        let mut rx = bus.subscribe();

        bus.notify(Notification::info("Security Alert", "Security System Armed."));

        let received = rx.recv().await.unwrap();
        assert_eq!(received.message, "Security System Armed.");
    }

    #[tokio::test]
    async fn should_deliver_notification_to_multiple_subscribers() {
        let bus = NotificationBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.notify(Notification::critical("SECURITY BREACH", "INTRUDER ALERT!"));

        assert!(rx1.recv().await.unwrap().is_critical());
        assert!(rx2.recv().await.unwrap().is_critical());
    }

    #[test]
    fn should_succeed_when_no_subscribers() {
        let bus = NotificationBus::new(16);
        bus.notify(Notification::info("t", "m"));
    }

    #[tokio::test]
    async fn should_not_deliver_notifications_published_before_subscription() {
        let bus = NotificationBus::new(16);
        bus.notify(Notification::info("early", "m"));

        let mut rx = bus.subscribe();
        bus.notify(Notification::info("late", "m"));

        let received = rx.recv().await.unwrap();
        assert_eq!(received.title, "late");
    }

    #[tokio::test]
    async fn should_share_channel_between_clones() {
        let bus = NotificationBus::new(16);
        let mut rx = bus.subscribe();
        let clone = bus.clone();

        clone.notify(Notification::info("from clone", "m"));

        assert_eq!(rx.recv().await.unwrap().title, "from clone");
    }
}
