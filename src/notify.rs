use std::time::Duration;

pub const NOTIFICATION_DURATION: Duration = Duration::from_millis(4000);

pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub duration: Duration,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            duration: NOTIFICATION_DURATION,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Failure,
            message: message.into(),
            duration: NOTIFICATION_DURATION,
        }
    }
}

/// Side channel for transient banners. Callers hand off a notification and forget it;
/// rendering and expiry belong to the implementor.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    pub struct RecordingNotifier {
        pub sent: RefCell<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.sent.borrow_mut().push(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingNotifier;
    use super::*;

    #[test]
    fn test_constructors() {
        let ok = Notification::success(SENT_MESSAGE);
        assert_eq!(ok.kind, NotificationKind::Success);
        assert_eq!(ok.duration, Duration::from_millis(4000));

        let err = Notification::failure(FAILED_MESSAGE);
        assert_eq!(err.kind, NotificationKind::Failure);
        assert_eq!(err.message, FAILED_MESSAGE);
    }

    #[test]
    fn test_notifier_is_object_safe() {
        let recorder = RecordingNotifier::default();
        let notifier: &dyn Notifier = &recorder;
        notifier.notify(Notification::success("hi"));
        assert_eq!(recorder.sent.borrow().len(), 1);
    }
}
