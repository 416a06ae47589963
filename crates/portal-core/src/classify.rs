//! Notification tag classification.
//!
//! The backend does not send a notification kind, so the tag shown next to each
//! item is derived from the message wording. All wording rules live here; the
//! renderer only ever sees a [`NotificationTag`].

/// Tag displayed next to a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationTag {
    /// The warranty has already lapsed
    Expired,
    /// The warranty lapses soon
    Expiring,
    /// Anything else
    Notice,
}

impl NotificationTag {
    /// Label rendered inside the tag chip
    pub fn label(self) -> &'static str {
        match self {
            NotificationTag::Expired => "Expired",
            NotificationTag::Expiring => "Expiring",
            NotificationTag::Notice => "Notice",
        }
    }

    /// CSS modifier class for the tag chip
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationTag::Expired => "notif-expired",
            NotificationTag::Expiring => "notif-expiring",
            NotificationTag::Notice => "notif-generic",
        }
    }
}

const EXPIRED_MARKERS: &[&str] = &["has expired"];
const EXPIRING_MARKERS: &[&str] = &["expires on", "expiring"];

/// Classify a notification message by its wording.
///
/// Matching is case-insensitive. "has expired" wins over the expiring markers
/// when both appear.
pub fn classify(message: &str) -> NotificationTag {
    let lower = message.to_lowercase();
    if EXPIRED_MARKERS.iter().any(|m| lower.contains(m)) {
        NotificationTag::Expired
    } else if EXPIRING_MARKERS.iter().any(|m| lower.contains(m)) {
        NotificationTag::Expiring
    } else {
        NotificationTag::Notice
    }
}

/// Policy used by the renderer to tag notifications
pub trait TagPolicy {
    fn classify(&self, message: &str) -> NotificationTag;
}

/// Default policy: the wording rules in [`classify`]
#[derive(Debug, Clone, Copy, Default)]
pub struct WordingPolicy;

impl TagPolicy for WordingPolicy {
    fn classify(&self, message: &str) -> NotificationTag {
        classify(message)
    }
}

impl<F> TagPolicy for F
where
    F: Fn(&str) -> NotificationTag,
{
    fn classify(&self, message: &str) -> NotificationTag {
        self(message)
    }
}
