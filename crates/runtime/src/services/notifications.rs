use school_core::Notification;
use tracing::trace;

/// Anything that accepts notifications for display.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

#[derive(Debug, Clone)]
struct Queued {
    seq: u64,
    notification: Notification,
}

/// Priority queue that paces notifications.
///
/// The highest-priority pending notification is released first; equal
/// priorities keep insertion order. A notification identical to one already
/// pending or currently showing is dropped. At most one notification leaves
/// the queue per `interval_ms`.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    pending: Vec<Queued>,
    showing: Option<Notification>,
    interval_ms: u32,
    cooldown_ms: u32,
    next_seq: u64,
}

impl NotificationQueue {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            pending: Vec::new(),
            showing: None,
            interval_ms,
            cooldown_ms: 0,
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Notification released most recently, until its interval elapses.
    pub fn showing(&self) -> Option<&Notification> {
        self.showing.as_ref()
    }

    /// Advances the pacing timer and releases at most one notification.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<Notification> {
        self.cooldown_ms = self.cooldown_ms.saturating_sub(elapsed_ms);
        if self.cooldown_ms > 0 {
            return None;
        }
        self.showing = None;

        let index = self
            .pending
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| {
                a.notification
                    .priority()
                    .cmp(&b.notification.priority())
                    .then(b.seq.cmp(&a.seq))
            })
            .map(|(index, _)| index)?;

        let next = self.pending.remove(index).notification;
        self.cooldown_ms = self.interval_ms;
        self.showing = Some(next.clone());
        Some(next)
    }
}

impl NotificationSink for NotificationQueue {
    fn notify(&mut self, notification: Notification) {
        let duplicate = self.showing.as_ref() == Some(&notification)
            || self
                .pending
                .iter()
                .any(|queued| queued.notification == notification);
        if duplicate {
            trace!(target: "runtime::notifications", message = %notification.message, "duplicate notification dropped");
            return;
        }
        self.pending.push(Queued {
            seq: self.next_seq,
            notification,
        });
        self.next_seq += 1;
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(school_core::GameConfig::DEFAULT_NOTIFICATION_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use school_core::NotificationKind;

    use super::*;

    #[test]
    fn releases_by_priority_then_insertion() {
        let mut queue = NotificationQueue::new(0);
        queue.notify(Notification::system("saved"));
        queue.notify(Notification::new(NotificationKind::Status, "Mood +1"));
        queue.notify(Notification::new(NotificationKind::QuestCompleted, "done"));
        queue.notify(Notification::new(NotificationKind::Status, "Health -1"));

        let order: Vec<String> = std::iter::from_fn(|| queue.tick(0))
            .map(|n| n.message)
            .collect();
        assert_eq!(order, ["done", "Mood +1", "Health -1", "saved"]);
    }

    #[test]
    fn duplicates_are_suppressed() {
        let mut queue = NotificationQueue::new(100);
        queue.notify(Notification::info("hello"));
        queue.notify(Notification::info("hello"));
        assert_eq!(queue.len(), 1);

        assert!(queue.tick(0).is_some());
        // same message while it is still on screen
        queue.notify(Notification::info("hello"));
        assert!(queue.is_empty());
    }

    #[test]
    fn interval_paces_output() {
        let mut queue = NotificationQueue::new(100);
        queue.notify(Notification::info("a"));
        queue.notify(Notification::info("b"));

        assert_eq!(queue.tick(16).map(|n| n.message), Some("a".into()));
        assert!(queue.tick(50).is_none());
        assert!(queue.tick(49).is_none());
        assert_eq!(queue.tick(1).map(|n| n.message), Some("b".into()));
    }
}
